//! Java emitter: package-scoped class, K&R braces, utilities inline.
//!
//! The legacy variant of the builder never hoisted utilities for Java;
//! each occurrence renders a full self-contained method definition at the
//! call site. Library types outside `java.lang` are spelled fully
//! qualified since the prologue only carries the package declaration.

use codebuilder_domain::{CodeElement, Method, ProjectData, TargetLanguage};

use crate::generator::indent;
use crate::types::{boxed_java_type, translate_type};
use crate::utility;

const LANGUAGE: TargetLanguage = TargetLanguage::Java;

pub(crate) fn emit(project: &ProjectData) -> String {
    let mut code = format!("package {};\n\n", project.namespace);
    code.push_str(&format!("public class {} {{\n", project.class_name));

    for method in &project.methods {
        code.push_str(&signature(method));
        for element in &method.elements {
            code.push_str(&render_element(element, 2));
            code.push('\n');
        }
        code.push_str("    }\n\n");
    }

    code.push('}');
    code
}

fn signature(method: &Method) -> String {
    let static_keyword = if method.is_static { "static " } else { "" };
    let parameters = method
        .parameters
        .iter()
        .map(|p| format!("{} {}", translate_type(&p.param_type, LANGUAGE), p.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "    {} {}{} {}({}) {{\n",
        method.visibility,
        static_keyword,
        translate_type(&method.return_type, LANGUAGE),
        method.name,
        parameters
    )
}

/// Renders a same-line-brace block header plus its child body at `depth`.
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

    // No hoisting in the legacy Java variant: the full definition lands
    // at the point of occurrence.
    if utility::is_utility(&element.element_type) {
        return utility::java_definition(&element.element_type, depth);
    }

    match element.element_type.as_str() {
        // Output & Debug
        "console.writeline" => format!(
            "{pad}System.out.println(\"{}\");",
            props.text("message", "")
        ),
        "console.write" => format!("{pad}System.out.print(\"{}\");", props.text("message", "")),
        "console.readkey" => format!("{pad}new java.util.Scanner(System.in).nextLine();"),
        "console.readline" => {
            format!("{pad}String input = new java.util.Scanner(System.in).nextLine();")
        }
        "debug.print" => format!(
            "{pad}System.err.println(\"{}\");",
            props.text("message", "")
        ),
        "trace.write" => format!("{pad}System.err.print(\"{}\");", props.text("message", "")),

        // Control Flow
        "for" => {
            let variable = props.text("variable", "i");
            let start = props.text("start", "0");
            let end = props.text("end", "10");
            let increment = props.text("increment", "1");
            braced(
                &format!(
                    "{pad}for (int {variable} = {start}; {variable} < {end}; {variable}+={increment})"
                ),
                &element.children,
                depth,
            )
        }
        "foreach" => {
            let item = props.text("item", "item");
            let collection = props.text("collection", "collection");
            braced(
                &format!("{pad}for (var {item} : {collection})"),
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
            "{pad}var result = {} ? {} : {};",
            props.text("condition", "true"),
            props.text("trueValue", "value1"),
            props.text("falseValue", "value2")
        ),

        // Variables & Data
        "variable" => {
            let semantic = props.text("type", "String");
            format!(
                "{pad}{} {} = {};",
                translate_type(&semantic, LANGUAGE),
                props.text("name", "myVariable"),
                props.text("value", "\"\"")
            )
        }
        "constant" => {
            let semantic = props.text("type", "int");
            format!(
                "{pad}final {} {} = {};",
                translate_type(&semantic, LANGUAGE),
                props.text("name", "MY_CONSTANT"),
                props.text("value", "0")
            )
        }
        "array" => {
            let semantic = props.text("type", "int");
            let element_type = translate_type(&semantic, LANGUAGE);
            format!(
                "{pad}{element_type}[] {} = new {element_type}[{}];",
                props.text("name", "myArray"),
                props.text("size", "10")
            )
        }
        "list" => {
            let semantic = props.text("type", "int");
            format!(
                "{pad}java.util.List<{0}> {1} = new java.util.ArrayList<>();",
                boxed_java_type(&semantic),
                props.text("name", "myList")
            )
        }
        "dictionary" => {
            let key_semantic = props.text("keyType", "string");
            let value_semantic = props.text("valueType", "int");
            format!(
                "{pad}java.util.Map<{0}, {1}> {2} = new java.util.HashMap<>();",
                boxed_java_type(&key_semantic),
                boxed_java_type(&value_semantic),
                props.text("name", "myDict")
            )
        }
        "return" => format!("{pad}return {};", props.text("value", "null")),

        // Primitive Types
        "string" => format!(
            "{pad}String {} = {};",
            props.text("name", "myString"),
            props.text("value", "\"\"")
        ),
        "int" => format!(
            "{pad}int {} = {};",
            props.text("name", "myInt"),
            props.text("value", "0")
        ),
        "long" => format!(
            "{pad}long {} = {};",
            props.text("name", "myLong"),
            props.text("value", "0L")
        ),
        "float" => format!(
            "{pad}float {} = {};",
            props.text("name", "myFloat"),
            props.text("value", "0.0f")
        ),
        "double" => format!(
            "{pad}double {} = {};",
            props.text("name", "myDouble"),
            props.text("value", "0.0")
        ),
        "decimal" => format!(
            "{pad}java.math.BigDecimal {} = new java.math.BigDecimal(\"{}\");",
            props.text("name", "myDecimal"),
            props.text("value", "0.0")
        ),
        "bool" => format!(
            "{pad}boolean {} = {};",
            props.text("name", "myBool"),
            props.text("value", "false")
        ),
        "char" => format!(
            "{pad}char {} = {};",
            props.text("name", "myChar"),
            props.text("value", "'a'")
        ),
        "byte" => format!(
            "{pad}byte {} = {};",
            props.text("name", "myByte"),
            props.text("value", "0")
        ),
        "short" => format!(
            "{pad}short {} = {};",
            props.text("name", "myShort"),
            props.text("value", "0")
        ),

        // Math & Operations
        "math.sqrt" => format!(
            "{pad}double result = Math.sqrt({});",
            props.text("value", "16")
        ),
        "math.pow" => format!(
            "{pad}double result = Math.pow({}, {});",
            props.text("base", "2"),
            props.text("exponent", "3")
        ),
        "math.abs" => {
            let semantic = props.text("type", "int");
            format!(
                "{pad}{} result = Math.abs({});",
                translate_type(&semantic, LANGUAGE),
                props.text("value", "-5")
            )
        }
        "math.min" => {
            let semantic = props.text("type", "int");
            format!(
                "{pad}{} result = Math.min({}, {});",
                translate_type(&semantic, LANGUAGE),
                props.text("value1", "5"),
                props.text("value2", "10")
            )
        }
        "math.max" => {
            let semantic = props.text("type", "int");
            format!(
                "{pad}{} result = Math.max({}, {});",
                translate_type(&semantic, LANGUAGE),
                props.text("value1", "5"),
                props.text("value2", "10")
            )
        }
        "random" => format!(
            "{pad}java.util.Random rand = new java.util.Random();\n{pad}int randomNumber = rand.nextInt({}, {});",
            props.text("min", "1"),
            props.text("max", "100")
        ),

        // String Operations
        "string.length" => format!(
            "{pad}int length = {}.length();",
            props.text("variable", "myString")
        ),
        "string.substring" => {
            let start = props.text("start", "0");
            format!(
                "{pad}String result = {}.substring({start}, {start} + {});",
                props.text("variable", "myString"),
                props.text("length", "5")
            )
        }
        "string.split" => format!(
            "{pad}String[] parts = {}.split(\"{}\");",
            props.text("variable", "myString"),
            props.text("delimiter", ",")
        ),
        "string.replace" => format!(
            "{pad}String result = {}.replace(\"{}\", \"{}\");",
            props.text("variable", "myString"),
            props.text("oldValue", "old"),
            props.text("newValue", "new")
        ),
        "string.tolower" => format!(
            "{pad}String result = {}.toLowerCase();",
            props.text("variable", "myString")
        ),
        "string.toupper" => format!(
            "{pad}String result = {}.toUpperCase();",
            props.text("variable", "myString")
        ),
        "string.trim" => format!(
            "{pad}String result = {}.trim();",
            props.text("variable", "myString")
        ),
        "string.contains" => format!(
            "{pad}boolean contains = {}.contains(\"{}\");",
            props.text("variable", "myString"),
            props.text("value", "search")
        ),

        // Exception Handling
        "try-catch" => {
            let inner = indent(depth + 1);
            format!(
                "{pad}try {{\n{inner}// Code that might throw an exception\n{pad}}} catch (Exception ex) {{\n{inner}// Handle exception\n{pad}}}"
            )
        }
        "try-catch-finally" => {
            let inner = indent(depth + 1);
            format!(
                "{pad}try {{\n{inner}// Code that might throw an exception\n{pad}}} catch (Exception ex) {{\n{inner}// Handle exception\n{pad}}} finally {{\n{inner}// Cleanup code\n{pad}}}"
            )
        }
        "throw" => format!(
            "{pad}throw new {}(\"{}\");",
            props.text("exceptionType", "Exception"),
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
        let project = ProjectData::new("com.example", "MyClass");
        assert_eq!(
            emit(&project),
            "package com.example;\n\npublic class MyClass {\n}"
        );
    }

    #[test]
    fn test_signature_translates_types() {
        let method = Method::new("Check")
            .returning("bool")
            .with_parameter(Parameter::new("label", "string"));
        assert_eq!(
            signature(&method),
            "    public boolean Check(String label) {\n"
        );
    }

    #[test]
    fn test_hello_world_uses_println() {
        let project = ProjectData::new("com.example", "MyClass").with_method(
            Method::new("MyMethod").with_element(
                CodeElement::new("console.writeline").with_property("message", "Hello World"),
            ),
        );
        let code = emit(&project);
        assert!(code.contains("        System.out.println(\"Hello World\");"));
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
    fn test_utility_renders_inline_definition() {
        let element = CodeElement::new("util.iseven");
        let code = render_element(&element, 2);
        assert!(code.starts_with("        private static boolean isEven(int number) {"));
        assert!(code.contains("number % 2 == 0"));
    }

    #[test]
    fn test_utility_not_deduplicated() {
        let project = ProjectData::new("com.example", "MyClass").with_method(
            Method::new("M")
                .with_element(CodeElement::new("util.iseven"))
                .with_element(CodeElement::new("util.iseven")),
        );
        let code = emit(&project);
        assert_eq!(code.matches("boolean isEven(int number)").count(), 2);
    }

    #[test]
    fn test_variable_defaults_use_java_types() {
        let element = CodeElement::new("variable");
        assert_eq!(
            render_element(&element, 2),
            "        String myVariable = \"\";"
        );
    }
}
