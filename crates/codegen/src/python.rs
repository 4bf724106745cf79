//! Python emitter: colon-and-indent blocks, `pass` for empty suites.
//!
//! The namespace lands in a prologue comment, followed by the fixed
//! imports the generated statements and inline utilities rely on. Every
//! block with no children closes over a `pass` line so the output is
//! always syntactically valid. Utilities render inline as nested
//! definitions, not deduplicated.

use codebuilder_domain::{CodeElement, Method, ProjectData, TargetLanguage};

use crate::generator::indent;
use crate::types::translate_type;
use crate::utility;

const LANGUAGE: TargetLanguage = TargetLanguage::Python;

pub(crate) fn emit(project: &ProjectData) -> String {
    let mut code = format!("# Namespace: {}\n\n", project.namespace);
    code.push_str("import datetime\nimport math\nimport random\nimport sys\n\n\n");
    code.push_str(&format!("class {}:\n", project.class_name));

    if project.methods.is_empty() {
        code.push_str("    pass");
        return code;
    }

    for method in &project.methods {
        code.push_str(&signature(method));
        if method.elements.is_empty() {
            code.push_str("        pass\n");
        } else {
            for element in &method.elements {
                code.push_str(&render_element(element, 2));
                code.push('\n');
            }
        }
        code.push('\n');
    }

    code
}

fn signature(method: &Method) -> String {
    let mut parameters: Vec<String> = Vec::new();
    if !method.is_static {
        parameters.push("self".to_owned());
    }
    for parameter in &method.parameters {
        parameters.push(format!(
            "{}: {}",
            parameter.name,
            translate_type(&parameter.param_type, LANGUAGE)
        ));
    }

    let mut out = String::new();
    if method.is_static {
        out.push_str("    @staticmethod\n");
    }
    out.push_str(&format!(
        "    def {}({}) -> {}:\n",
        method.name,
        parameters.join(", "),
        translate_type(&method.return_type, LANGUAGE)
    ));
    out
}

/// Renders a `header:` suite with its children at `depth + 1`, or `pass`
/// when the suite is empty.
fn suite(header: &str, children: &[CodeElement], depth: usize) -> String {
    let mut out = format!("{header}\n");
    if children.is_empty() {
        out.push_str(&format!("{}pass", indent(depth + 1)));
        return out;
    }
    let body = children
        .iter()
        .map(|child| render_element(child, depth + 1))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&body);
    out
}

#[allow(clippy::too_many_lines)]
fn render_element(element: &CodeElement, depth: usize) -> String {
    let pad = indent(depth);
    let props = &element.properties;

    // Inline, like the Java emitter: a nested definition per occurrence.
    if utility::is_utility(&element.element_type) {
        return utility::python_definition(&element.element_type, depth);
    }

    match element.element_type.as_str() {
        // Output & Debug
        "console.writeline" => format!("{pad}print(\"{}\")", props.text("message", "")),
        "console.write" => format!("{pad}print(\"{}\", end=\"\")", props.text("message", "")),
        "console.readkey" => format!("{pad}input()"),
        "console.readline" => format!("{pad}user_input = input()"),
        "debug.print" => format!(
            "{pad}print(\"{}\", file=sys.stderr)",
            props.text("message", "")
        ),
        "trace.write" => format!(
            "{pad}print(\"{}\", end=\"\", file=sys.stderr)",
            props.text("message", "")
        ),

        // Control Flow
        "for" => {
            let variable = props.text("variable", "i");
            let start = props.text("start", "0");
            let end = props.text("end", "10");
            let increment = props.text("increment", "1");
            suite(
                &format!("{pad}for {variable} in range({start}, {end}, {increment}):"),
                &element.children,
                depth,
            )
        }
        "foreach" => {
            let item = props.text("item", "item");
            let collection = props.text("collection", "collection");
            suite(
                &format!("{pad}for {item} in {collection}:"),
                &element.children,
                depth,
            )
        }
        "while" => suite(
            &format!("{pad}while {}:", props.text("condition", "True")),
            &element.children,
            depth,
        ),
        "do-while" => {
            let inner = indent(depth + 1);
            let mut out = suite(&format!("{pad}while True:"), &element.children, depth);
            out.push_str(&format!(
                "\n{inner}if not ({}):\n{inner}    break",
                props.text("condition", "True")
            ));
            out
        }
        "switch" => {
            let arm = indent(depth + 1);
            let body = indent(depth + 2);
            let mut out = suite(
                &format!(
                    "{pad}match {}:\n{arm}case 1:",
                    props.text("variable", "variable")
                ),
                &element.children,
                depth + 1,
            );
            out.push_str(&format!("\n{arm}case _:\n{body}pass"));
            out
        }
        "break" => format!("{pad}break"),
        "continue" => format!("{pad}continue"),

        // Conditionals
        "if" => suite(
            &format!("{pad}if {}:", props.text("condition", "True")),
            &element.children,
            depth,
        ),
        "if-else" => {
            let inner = indent(depth + 1);
            let mut out = suite(
                &format!("{pad}if {}:", props.text("condition", "True")),
                &element.children,
                depth,
            );
            out.push_str(&format!("\n{pad}else:\n{inner}pass"));
            out
        }
        "if-else-if" => {
            let inner = indent(depth + 1);
            let condition2 = props.text("condition2", "True");
            let mut out = suite(
                &format!("{pad}if {}:", props.text("condition1", "True")),
                &element.children,
                depth,
            );
            out.push_str(&format!(
                "\n{pad}elif {condition2}:\n{inner}pass\n{pad}else:\n{inner}pass"
            ));
            out
        }
        "ternary" => format!(
            "{pad}result = {} if {} else {}",
            props.text("trueValue", "value1"),
            props.text("condition", "True"),
            props.text("falseValue", "value2")
        ),

        // Variables & Data
        "variable" => format!(
            "{pad}{} = {}",
            props.text("name", "my_variable"),
            props.text("value", "\"\"")
        ),
        "constant" => format!(
            "{pad}{} = {}",
            props.text("name", "MY_CONSTANT"),
            props.text("value", "0")
        ),
        "array" => format!(
            "{pad}{} = [None] * {}",
            props.text("name", "my_array"),
            props.text("size", "10")
        ),
        "list" => format!("{pad}{} = []", props.text("name", "my_list")),
        "dictionary" => format!("{pad}{} = {{}}", props.text("name", "my_dict")),
        "return" => format!("{pad}return {}", props.text("value", "None")),

        // Primitive Types
        "string" => format!(
            "{pad}{} = {}",
            props.text("name", "my_string"),
            props.text("value", "\"\"")
        ),
        "int" => format!(
            "{pad}{} = {}",
            props.text("name", "my_int"),
            props.text("value", "0")
        ),
        "long" => format!(
            "{pad}{} = {}",
            props.text("name", "my_long"),
            props.text("value", "0")
        ),
        "float" => format!(
            "{pad}{} = {}",
            props.text("name", "my_float"),
            props.text("value", "0.0")
        ),
        "double" => format!(
            "{pad}{} = {}",
            props.text("name", "my_double"),
            props.text("value", "0.0")
        ),
        "decimal" => format!(
            "{pad}{} = {}",
            props.text("name", "my_decimal"),
            props.text("value", "0.0")
        ),
        "bool" => format!(
            "{pad}{} = {}",
            props.text("name", "my_bool"),
            props.text("value", "False")
        ),
        "char" => format!(
            "{pad}{} = {}",
            props.text("name", "my_char"),
            props.text("value", "'a'")
        ),
        "byte" => format!(
            "{pad}{} = {}",
            props.text("name", "my_byte"),
            props.text("value", "0")
        ),
        "short" => format!(
            "{pad}{} = {}",
            props.text("name", "my_short"),
            props.text("value", "0")
        ),

        // Math & Operations
        "math.sqrt" => format!("{pad}result = math.sqrt({})", props.text("value", "16")),
        "math.pow" => format!(
            "{pad}result = math.pow({}, {})",
            props.text("base", "2"),
            props.text("exponent", "3")
        ),
        "math.abs" => format!("{pad}result = abs({})", props.text("value", "-5")),
        "math.min" => format!(
            "{pad}result = min({}, {})",
            props.text("value1", "5"),
            props.text("value2", "10")
        ),
        "math.max" => format!(
            "{pad}result = max({}, {})",
            props.text("value1", "5"),
            props.text("value2", "10")
        ),
        "random" => format!(
            "{pad}random_number = random.randint({}, {})",
            props.text("min", "1"),
            props.text("max", "100")
        ),

        // String Operations
        "string.length" => format!(
            "{pad}length = len({})",
            props.text("variable", "my_string")
        ),
        "string.substring" => {
            let start = props.text("start", "0");
            format!(
                "{pad}result = {}[{start}:{start} + {}]",
                props.text("variable", "my_string"),
                props.text("length", "5")
            )
        }
        "string.split" => format!(
            "{pad}parts = {}.split(\"{}\")",
            props.text("variable", "my_string"),
            props.text("delimiter", ",")
        ),
        "string.replace" => format!(
            "{pad}result = {}.replace(\"{}\", \"{}\")",
            props.text("variable", "my_string"),
            props.text("oldValue", "old"),
            props.text("newValue", "new")
        ),
        "string.tolower" => format!(
            "{pad}result = {}.lower()",
            props.text("variable", "my_string")
        ),
        "string.toupper" => format!(
            "{pad}result = {}.upper()",
            props.text("variable", "my_string")
        ),
        "string.trim" => format!(
            "{pad}result = {}.strip()",
            props.text("variable", "my_string")
        ),
        "string.contains" => format!(
            "{pad}contains = \"{}\" in {}",
            props.text("value", "search"),
            props.text("variable", "my_string")
        ),

        // Exception Handling
        "try-catch" => {
            let inner = indent(depth + 1);
            format!(
                "{pad}try:\n{inner}# Code that might throw an exception\n{inner}pass\n{pad}except Exception as error:\n{inner}# Handle exception\n{inner}pass"
            )
        }
        "try-catch-finally" => {
            let inner = indent(depth + 1);
            format!(
                "{pad}try:\n{inner}# Code that might throw an exception\n{inner}pass\n{pad}except Exception as error:\n{inner}# Handle exception\n{inner}pass\n{pad}finally:\n{inner}# Cleanup code\n{inner}pass"
            )
        }
        "throw" => format!(
            "{pad}raise {}(\"{}\")",
            props.text("exceptionType", "Exception"),
            props.text("message", "An error occurred")
        ),

        unknown => format!("{pad}# {unknown}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebuilder_domain::Parameter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_class_gets_pass() {
        let project = ProjectData::new("MyProject", "MyClass");
        let code = emit(&project);
        assert!(code.starts_with("# Namespace: MyProject\n\n"));
        assert!(code.ends_with("class MyClass:\n    pass"));
    }

    #[test]
    fn test_empty_method_body_gets_pass() {
        let project =
            ProjectData::new("MyProject", "MyClass").with_method(Method::new("MyMethod"));
        let code = emit(&project);
        assert!(code.contains("    def MyMethod(self) -> None:\n        pass\n"));
    }

    #[test]
    fn test_static_method_gets_decorator_and_no_self() {
        let method = Method::new("greet")
            .set_static()
            .returning("string")
            .with_parameter(Parameter::new("name", "string"));
        assert_eq!(
            signature(&method),
            "    @staticmethod\n    def greet(name: str) -> str:\n"
        );
    }

    #[test]
    fn test_hello_world_uses_print() {
        let project = ProjectData::new("MyProject", "MyClass").with_method(
            Method::new("MyMethod").with_element(
                CodeElement::new("console.writeline").with_property("message", "Hello World"),
            ),
        );
        let code = emit(&project);
        assert!(code.contains("        print(\"Hello World\")"));
    }

    #[test]
    fn test_empty_for_block_closes_with_pass() {
        let element = CodeElement::new("for");
        assert_eq!(
            render_element(&element, 2),
            "        for i in range(0, 10, 1):\n            pass"
        );
    }

    #[test]
    fn test_nested_if_return() {
        let element = CodeElement::new("if")
            .with_property("condition", "x > 0")
            .with_child(CodeElement::new("return").with_property("value", "x"));
        assert_eq!(
            render_element(&element, 2),
            "        if x > 0:\n            return x"
        );
    }

    #[test]
    fn test_utility_renders_inline_definition() {
        let element = CodeElement::new("util.reversestring");
        assert_eq!(
            render_element(&element, 2),
            "        def reverse_string(value):\n            return value[::-1]"
        );
    }

    #[test]
    fn test_unknown_tag_becomes_comment() {
        let element = CodeElement::new("mystery.block");
        assert_eq!(render_element(&element, 2), "        # mystery.block");
    }
}
