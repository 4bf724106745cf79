//! C# emitter: namespaced class, Allman braces, utility hoisting.

use codebuilder_domain::{CodeElement, Method, ProjectData, TargetLanguage};

use crate::generator::indent;
use crate::types::translate_type;
use crate::utility;

const LANGUAGE: TargetLanguage = TargetLanguage::CSharp;

pub(crate) fn emit(project: &ProjectData) -> String {
    let mut code = String::from("using System;\n\n");
    code.push_str(&format!("namespace {}\n{{\n", project.namespace));
    code.push_str(&format!(
        "    public class {}\n    {{\n",
        project.class_name
    ));

    for method in &project.methods {
        code.push_str(&signature(method));
        code.push_str("        {\n");
        for element in &method.elements {
            code.push_str(&render_element(element, 3));
            code.push('\n');
        }
        code.push_str("        }\n\n");
    }

    for tag in utility::collect(project) {
        code.push_str(&utility::csharp_definition(tag, 2));
        code.push_str("\n\n");
    }

    code.push_str("    }\n}");
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
        "        {} {}{} {}({})\n",
        method.visibility,
        static_keyword,
        translate_type(&method.return_type, LANGUAGE),
        method.name,
        parameters
    )
}

/// Renders a block header plus a braced child body at `depth`.
fn braced(header: &str, children: &[CodeElement], depth: usize) -> String {
    let pad = indent(depth);
    let mut out = format!("{header}\n{pad}{{\n");
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

    // Utility blocks are hoisted; the call site only notes where the
    // definition went.
    if utility::is_utility(&element.element_type) {
        return format!(
            "{pad}// {}() is emitted once at class level",
            utility::pascal_name(&element.element_type)
        );
    }

    match element.element_type.as_str() {
        // Output & Debug
        "console.writeline" => {
            format!("{pad}Console.WriteLine(\"{}\");", props.text("message", ""))
        }
        "console.write" => format!("{pad}Console.Write(\"{}\");", props.text("message", "")),
        "console.readkey" => format!("{pad}Console.ReadKey();"),
        "console.readline" => format!("{pad}string input = Console.ReadLine();"),
        "debug.print" => format!("{pad}Debug.Print(\"{}\");", props.text("message", "")),
        "trace.write" => format!("{pad}Trace.Write(\"{}\");", props.text("message", "")),

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
                &format!("{pad}foreach (var {item} in {collection})"),
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
                "{pad}switch ({})\n{pad}{{\n{arm}case 1:\n",
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
            out.push_str(&format!("\n{pad}else\n{pad}{{\n{pad}}}"));
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
                "\n{pad}else if ({condition2})\n{pad}{{\n{pad}}}\n{pad}else\n{pad}{{\n{pad}}}"
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
        "variable" => format!(
            "{pad}{} {} = {};",
            props.text("type", "var"),
            props.text("name", "myVariable"),
            props.text("value", "\"\"")
        ),
        "constant" => format!(
            "{pad}const {} {} = {};",
            props.text("type", "int"),
            props.text("name", "MY_CONSTANT"),
            props.text("value", "0")
        ),
        "array" => {
            let element_type = props.text("type", "int");
            format!(
                "{pad}{element_type}[] {} = new {element_type}[{}];",
                props.text("name", "myArray"),
                props.text("size", "10")
            )
        }
        "list" => {
            let element_type = props.text("type", "int");
            format!(
                "{pad}List<{element_type}> {} = new List<{element_type}>();",
                props.text("name", "myList")
            )
        }
        "dictionary" => {
            let key_type = props.text("keyType", "string");
            let value_type = props.text("valueType", "int");
            format!(
                "{pad}Dictionary<{key_type}, {value_type}> {} = new Dictionary<{key_type}, {value_type}>();",
                props.text("name", "myDict")
            )
        }
        "return" => format!("{pad}return {};", props.text("value", "null")),

        // Primitive Types
        "string" => format!(
            "{pad}string {} = {};",
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
            "{pad}decimal {} = {};",
            props.text("name", "myDecimal"),
            props.text("value", "0.0m")
        ),
        "bool" => format!(
            "{pad}bool {} = {};",
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
            "{pad}double result = Math.Sqrt({});",
            props.text("value", "16")
        ),
        "math.pow" => format!(
            "{pad}double result = Math.Pow({}, {});",
            props.text("base", "2"),
            props.text("exponent", "3")
        ),
        "math.abs" => format!(
            "{pad}{} result = Math.Abs({});",
            props.text("type", "int"),
            props.text("value", "-5")
        ),
        "math.min" => format!(
            "{pad}{} result = Math.Min({}, {});",
            props.text("type", "int"),
            props.text("value1", "5"),
            props.text("value2", "10")
        ),
        "math.max" => format!(
            "{pad}{} result = Math.Max({}, {});",
            props.text("type", "int"),
            props.text("value1", "5"),
            props.text("value2", "10")
        ),
        "random" => format!(
            "{pad}Random rand = new Random();\n{pad}int randomNumber = rand.Next({}, {});",
            props.text("min", "1"),
            props.text("max", "100")
        ),

        // String Operations
        "string.length" => format!(
            "{pad}int length = {}.Length;",
            props.text("variable", "myString")
        ),
        "string.substring" => format!(
            "{pad}string result = {}.Substring({}, {});",
            props.text("variable", "myString"),
            props.text("start", "0"),
            props.text("length", "5")
        ),
        "string.split" => format!(
            "{pad}string[] parts = {}.Split('{}');",
            props.text("variable", "myString"),
            props.text("delimiter", ",")
        ),
        "string.replace" => format!(
            "{pad}string result = {}.Replace(\"{}\", \"{}\");",
            props.text("variable", "myString"),
            props.text("oldValue", "old"),
            props.text("newValue", "new")
        ),
        "string.tolower" => format!(
            "{pad}string result = {}.ToLower();",
            props.text("variable", "myString")
        ),
        "string.toupper" => format!(
            "{pad}string result = {}.ToUpper();",
            props.text("variable", "myString")
        ),
        "string.trim" => format!(
            "{pad}string result = {}.Trim();",
            props.text("variable", "myString")
        ),
        "string.contains" => format!(
            "{pad}bool contains = {}.Contains(\"{}\");",
            props.text("variable", "myString"),
            props.text("value", "search")
        ),

        // Exception Handling
        "try-catch" => {
            let inner = indent(depth + 1);
            format!(
                "{pad}try\n{pad}{{\n{inner}// Code that might throw an exception\n{pad}}}\n{pad}catch (Exception ex)\n{pad}{{\n{inner}// Handle exception\n{pad}}}"
            )
        }
        "try-catch-finally" => {
            let inner = indent(depth + 1);
            format!(
                "{pad}try\n{pad}{{\n{inner}// Code that might throw an exception\n{pad}}}\n{pad}catch (Exception ex)\n{pad}{{\n{inner}// Handle exception\n{pad}}}\n{pad}finally\n{pad}{{\n{inner}// Cleanup code\n{pad}}}"
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
        let project = ProjectData::new("MyProject", "MyClass");
        let code = emit(&project);
        assert_eq!(
            code,
            "using System;\n\nnamespace MyProject\n{\n    public class MyClass\n    {\n    }\n}"
        );
    }

    #[test]
    fn test_hello_world_method() {
        let project = ProjectData::new("MyProject", "MyClass").with_method(
            Method::new("MyMethod").with_element(
                CodeElement::new("console.writeline").with_property("message", "Hello World"),
            ),
        );
        let code = emit(&project);
        assert!(code.contains("public class MyClass"));
        assert!(code.contains("public void MyMethod()"));
        assert!(code.contains("            Console.WriteLine(\"Hello World\");"));
    }

    #[test]
    fn test_signature_with_parameters() {
        let method = Method::new("Add")
            .set_static()
            .returning("int")
            .with_parameter(Parameter::new("left", "int"))
            .with_parameter(Parameter::new("right", "int"));
        assert_eq!(
            signature(&method),
            "        public static int Add(int left, int right)\n"
        );
    }

    #[test]
    fn test_for_defaults() {
        let element = CodeElement::new("for");
        assert_eq!(
            render_element(&element, 3),
            "            for (int i = 0; i < 10; i+=1)\n            {\n            }"
        );
    }

    #[test]
    fn test_nested_child_is_indented_one_level() {
        let element = CodeElement::new("if")
            .with_property("condition", "x > 0")
            .with_child(CodeElement::new("return").with_property("value", "x"));
        assert_eq!(
            render_element(&element, 3),
            "            if (x > 0)\n            {\n                return x;\n            }"
        );
    }

    #[test]
    fn test_unknown_tag_renders_comment() {
        let element = CodeElement::new("goto");
        assert_eq!(render_element(&element, 3), "            // goto");
    }

    #[test]
    fn test_utility_call_site_is_deferred() {
        let element = CodeElement::new("util.factorial");
        assert_eq!(
            render_element(&element, 3),
            "            // Factorial() is emitted once at class level"
        );
    }
}
