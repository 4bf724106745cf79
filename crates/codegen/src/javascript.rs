//! JavaScript emitter: untyped class methods, utilities hoisted.
//!
//! JavaScript has no namespace or type positions, so the namespace lands
//! in a prologue comment and signatures carry parameter names only.
//! Utility blocks hoist to class-level static methods exactly like the C#
//! emitter, with a deferred-placement comment at each call site.

use codebuilder_domain::{CodeElement, Method, ProjectData};

use crate::generator::indent;
use crate::utility;

pub(crate) fn emit(project: &ProjectData) -> String {
    let mut code = format!("// Namespace: {}\n\n", project.namespace);
    code.push_str(&format!("class {} {{\n", project.class_name));

    for method in &project.methods {
        code.push_str(&signature(method));
        for element in &method.elements {
            code.push_str(&render_element(element, 2));
            code.push('\n');
        }
        code.push_str("    }\n\n");
    }

    for tag in utility::collect(project) {
        code.push_str(&utility::javascript_definition(tag, 1));
        code.push_str("\n\n");
    }

    code.push('}');
    code
}

fn signature(method: &Method) -> String {
    let static_keyword = if method.is_static { "static " } else { "" };
    let parameters = method
        .parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("    {}{}({}) {{\n", static_keyword, method.name, parameters)
}

fn braced(header: &str, children: &[CodeElement], depth: usize) -> String {
    let pad = indent(depth);
    let mut out = format!("{header} {{\n");
    for child in children {
        out.push_str(&render_element(child, depth + 1));
        out.push('\n');
    }
    out.push_str(&format!("{pad}}}"));
    out
}

#[allow(clippy::too_many_lines)]
fn render_element(element: &CodeElement, depth: usize) -> String {
    let pad = indent(depth);
    let props = &element.properties;

    if utility::is_utility(&element.element_type) {
        return format!(
            "{pad}// {}() is emitted once at class level",
            utility::camel_name(&element.element_type)
        );
    }

    match element.element_type.as_str() {
        // Output & Debug
        "console.writeline" => format!("{pad}console.log(\"{}\");", props.text("message", "")),
        "console.write" => format!(
            "{pad}process.stdout.write(\"{}\");",
            props.text("message", "")
        ),
        "console.readkey" => format!("{pad}prompt(\"\");"),
        "console.readline" => format!("{pad}const input = prompt(\"\");"),
        "debug.print" => format!("{pad}console.debug(\"{}\");", props.text("message", "")),
        "trace.write" => format!("{pad}console.trace(\"{}\");", props.text("message", "")),

        // Control Flow
        "for" => {
            let variable = props.text("variable", "i");
            let start = props.text("start", "0");
            let end = props.text("end", "10");
            let increment = props.text("increment", "1");
            braced(
                &format!(
                    "{pad}for (let {variable} = {start}; {variable} < {end}; {variable}+={increment})"
                ),
                &element.children,
                depth,
            )
        }
        "foreach" => {
            let item = props.text("item", "item");
            let collection = props.text("collection", "collection");
            braced(
                &format!("{pad}for (const {item} of {collection})"),
                &element.children,
                depth,
            )
        }
        "while" => braced(
            &format!("{pad}while ({})", props.text("condition", "true")),
            &element.children,
            depth,
        ),
        "do-while" => {
            let mut out = braced(&format!("{pad}do"), &element.children, depth);
            out.push_str(&format!(" while ({});", props.text("condition", "true")));
            out
        }
        "switch" => {
            let arm = indent(depth + 1);
            let body = indent(depth + 2);
            let mut out = format!(
                "{pad}switch ({}) {{\n{arm}case 1:\n",
                props.text("variable", "variable")
            );
            for child in &element.children {
                out.push_str(&render_element(child, depth + 2));
                out.push('\n');
            }
            out.push_str(&format!(
                "{body}break;\n{arm}default:\n{body}break;\n{pad}}}"
            ));
            out
        }
        "break" => format!("{pad}break;"),
        "continue" => format!("{pad}continue;"),

        // Conditionals
        "if" => braced(
            &format!("{pad}if ({})", props.text("condition", "true")),
            &element.children,
            depth,
        ),
        "if-else" => {
            let mut out = braced(
                &format!("{pad}if ({})", props.text("condition", "true")),
                &element.children,
                depth,
            );
            out.push_str(&format!(" else {{\n{pad}}}"));
            out
        }
        "if-else-if" => {
            let condition2 = props.text("condition2", "true");
            let mut out = braced(
                &format!("{pad}if ({})", props.text("condition1", "true")),
                &element.children,
                depth,
            );
            out.push_str(&format!(
                " else if ({condition2}) {{\n{pad}}} else {{\n{pad}}}"
            ));
            out
        }
        "ternary" => format!(
            "{pad}const result = {} ? {} : {};",
            props.text("condition", "true"),
            props.text("trueValue", "value1"),
            props.text("falseValue", "value2")
        ),

        // Variables & Data
        "variable" => format!(
            "{pad}let {} = {};",
            props.text("name", "myVariable"),
            props.text("value", "\"\"")
        ),
        "constant" => format!(
            "{pad}const {} = {};",
            props.text("name", "MY_CONSTANT"),
            props.text("value", "0")
        ),
        "array" => format!(
            "{pad}const {} = new Array({});",
            props.text("name", "myArray"),
            props.text("size", "10")
        ),
        "list" => format!("{pad}const {} = [];", props.text("name", "myList")),
        "dictionary" => format!("{pad}const {} = new Map();", props.text("name", "myDict")),
        "return" => format!("{pad}return {};", props.text("value", "null")),

        // Primitive Types
        "string" => format!(
            "{pad}let {} = {};",
            props.text("name", "myString"),
            props.text("value", "\"\"")
        ),
        "int" => format!(
            "{pad}let {} = {};",
            props.text("name", "myInt"),
            props.text("value", "0")
        ),
        "long" => format!(
            "{pad}let {} = {};",
            props.text("name", "myLong"),
            props.text("value", "0")
        ),
        "float" => format!(
            "{pad}let {} = {};",
            props.text("name", "myFloat"),
            props.text("value", "0.0")
        ),
        "double" => format!(
            "{pad}let {} = {};",
            props.text("name", "myDouble"),
            props.text("value", "0.0")
        ),
        "decimal" => format!(
            "{pad}let {} = {};",
            props.text("name", "myDecimal"),
            props.text("value", "0.0")
        ),
        "bool" => format!(
            "{pad}let {} = {};",
            props.text("name", "myBool"),
            props.text("value", "false")
        ),
        "char" => format!(
            "{pad}let {} = {};",
            props.text("name", "myChar"),
            props.text("value", "'a'")
        ),
        "byte" => format!(
            "{pad}let {} = {};",
            props.text("name", "myByte"),
            props.text("value", "0")
        ),
        "short" => format!(
            "{pad}let {} = {};",
            props.text("name", "myShort"),
            props.text("value", "0")
        ),

        // Math & Operations
        "math.sqrt" => format!(
            "{pad}const result = Math.sqrt({});",
            props.text("value", "16")
        ),
        "math.pow" => format!(
            "{pad}const result = Math.pow({}, {});",
            props.text("base", "2"),
            props.text("exponent", "3")
        ),
        "math.abs" => format!(
            "{pad}const result = Math.abs({});",
            props.text("value", "-5")
        ),
        "math.min" => format!(
            "{pad}const result = Math.min({}, {});",
            props.text("value1", "5"),
            props.text("value2", "10")
        ),
        "math.max" => format!(
            "{pad}const result = Math.max({}, {});",
            props.text("value1", "5"),
            props.text("value2", "10")
        ),
        "random" => {
            let min = props.text("min", "1");
            let max = props.text("max", "100");
            format!(
                "{pad}const randomNumber = Math.floor(Math.random() * ({max} - {min} + 1)) + {min};"
            )
        }

        // String Operations
        "string.length" => format!(
            "{pad}const length = {}.length;",
            props.text("variable", "myString")
        ),
        "string.substring" => {
            let start = props.text("start", "0");
            format!(
                "{pad}const result = {}.substring({start}, {start} + {});",
                props.text("variable", "myString"),
                props.text("length", "5")
            )
        }
        "string.split" => format!(
            "{pad}const parts = {}.split(\"{}\");",
            props.text("variable", "myString"),
            props.text("delimiter", ",")
        ),
        "string.replace" => format!(
            "{pad}const result = {}.replace(\"{}\", \"{}\");",
            props.text("variable", "myString"),
            props.text("oldValue", "old"),
            props.text("newValue", "new")
        ),
        "string.tolower" => format!(
            "{pad}const result = {}.toLowerCase();",
            props.text("variable", "myString")
        ),
        "string.toupper" => format!(
            "{pad}const result = {}.toUpperCase();",
            props.text("variable", "myString")
        ),
        "string.trim" => format!(
            "{pad}const result = {}.trim();",
            props.text("variable", "myString")
        ),
        "string.contains" => format!(
            "{pad}const contains = {}.includes(\"{}\");",
            props.text("variable", "myString"),
            props.text("value", "search")
        ),

        // Exception Handling
        "try-catch" => {
            let inner = indent(depth + 1);
            format!(
                "{pad}try {{\n{inner}// Code that might throw an exception\n{pad}}} catch (error) {{\n{inner}// Handle exception\n{pad}}}"
            )
        }
        "try-catch-finally" => {
            let inner = indent(depth + 1);
            format!(
                "{pad}try {{\n{inner}// Code that might throw an exception\n{pad}}} catch (error) {{\n{inner}// Handle exception\n{pad}}} finally {{\n{inner}// Cleanup code\n{pad}}}"
            )
        }
        "throw" => format!(
            "{pad}throw new {}(\"{}\");",
            props.text("exceptionType", "Error"),
            props.text("message", "An error occurred")
        ),

        unknown => format!("{pad}// {unknown}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebuilder_domain::Parameter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_class_shell() {
        let project = ProjectData::new("MyProject", "MyClass");
        assert_eq!(
            emit(&project),
            "// Namespace: MyProject\n\nclass MyClass {\n}"
        );
    }

    #[test]
    fn test_signature_drops_types_and_visibility() {
        let method = Method::new("greet")
            .set_static()
            .returning("void")
            .with_parameter(Parameter::new("name", "string"));
        assert_eq!(signature(&method), "    static greet(name) {\n");
    }

    #[test]
    fn test_hello_world_uses_console_log() {
        let project = ProjectData::new("MyProject", "MyClass").with_method(
            Method::new("MyMethod").with_element(
                CodeElement::new("console.writeline").with_property("message", "Hello World"),
            ),
        );
        let code = emit(&project);
        assert!(code.contains("        console.log(\"Hello World\");"));
    }

    #[test]
    fn test_utilities_hoist_once_with_call_site_comment() {
        let project = ProjectData::new("MyProject", "MyClass")
            .with_method(Method::new("A").with_element(CodeElement::new("util.factorial")))
            .with_method(Method::new("B").with_element(CodeElement::new("util.factorial")));
        let code = emit(&project);

        assert_eq!(code.matches("static factorial(number) {").count(), 1);
        assert_eq!(
            code.matches("// factorial() is emitted once at class level")
                .count(),
            2
        );
    }

    #[test]
    fn test_nested_if_return() {
        let element = CodeElement::new("if")
            .with_property("condition", "x > 0")
            .with_child(CodeElement::new("return").with_property("value", "x"));
        assert_eq!(
            render_element(&element, 2),
            "        if (x > 0) {\n            return x;\n        }"
        );
    }

    #[test]
    fn test_variable_uses_let() {
        let element = CodeElement::new("variable")
            .with_property("name", "count")
            .with_property("value", "3");
        assert_eq!(render_element(&element, 2), "        let count = 3;");
    }
}
