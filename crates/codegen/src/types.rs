//! Semantic type-name translation.
//!
//! Method signatures and declarations carry semantic type tags (`string`,
//! `int`, `bool`, ...). Each target language maps them through a fixed
//! lookup table; tags without an entry pass through unchanged. The
//! identity fallback is intentional, not an error path: a user-typed
//! custom type name is emitted verbatim.

use codebuilder_domain::TargetLanguage;

/// Translate a semantic type tag into the target language's spelling.
#[must_use]
pub fn translate_type<'a>(semantic: &'a str, language: TargetLanguage) -> &'a str {
    match language {
        // C# spells the semantic tags natively; JavaScript has no type
        // positions but keeps the identity mapping for uniformity.
        TargetLanguage::CSharp | TargetLanguage::JavaScript => semantic,
        TargetLanguage::Java => match semantic {
            "string" => "String",
            "bool" => "boolean",
            other => other,
        },
        TargetLanguage::Python => match semantic {
            "string" | "char" => "str",
            "int" | "long" | "short" | "byte" => "int",
            "float" | "double" | "decimal" => "float",
            "bool" => "bool",
            "void" => "None",
            other => other,
        },
    }
}

/// Boxed spelling of a semantic tag for Java generic positions.
///
/// `List<int>` is not legal Java; container declarations use the wrapper
/// types instead.
#[must_use]
pub fn boxed_java_type(semantic: &str) -> &str {
    match semantic {
        "string" => "String",
        "int" => "Integer",
        "long" => "Long",
        "short" => "Short",
        "byte" => "Byte",
        "float" => "Float",
        "double" => "Double",
        "bool" => "Boolean",
        "char" => "Character",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_java_table() {
        assert_eq!(translate_type("string", TargetLanguage::Java), "String");
        assert_eq!(translate_type("bool", TargetLanguage::Java), "boolean");
        assert_eq!(translate_type("int", TargetLanguage::Java), "int");
        assert_eq!(translate_type("void", TargetLanguage::Java), "void");
    }

    #[test]
    fn test_python_table() {
        assert_eq!(translate_type("string", TargetLanguage::Python), "str");
        assert_eq!(translate_type("double", TargetLanguage::Python), "float");
        assert_eq!(translate_type("void", TargetLanguage::Python), "None");
    }

    #[test]
    fn test_identity_fallback() {
        assert_eq!(translate_type("MyWidget", TargetLanguage::Java), "MyWidget");
        assert_eq!(translate_type("string", TargetLanguage::CSharp), "string");
        assert_eq!(
            translate_type("MyWidget", TargetLanguage::Python),
            "MyWidget"
        );
    }

    #[test]
    fn test_boxed_java_types() {
        assert_eq!(boxed_java_type("int"), "Integer");
        assert_eq!(boxed_java_type("string"), "String");
        assert_eq!(boxed_java_type("MyWidget"), "MyWidget");
    }
}
