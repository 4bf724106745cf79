//! Export helpers for the generated source text.
//!
//! The generator hands back a plain string; these helpers cover the
//! collaborator's download path, which names the file after the class.

use crate::language::extension_for_tag;
use crate::project::ProjectData;

/// Suggested filename for a project's generated source:
/// `{className}.{extension}`.
#[must_use]
pub fn suggested_file_name(project: &ProjectData) -> String {
    format!(
        "{}.{}",
        project.class_name,
        project.language.file_extension()
    )
}

/// Suggested filename for a class name and a raw language tag.
///
/// Unrecognized tags get a `txt` extension instead of collapsing into the
/// C# fallback the generator uses.
#[must_use]
pub fn file_name_for_tag(class_name: &str, language_tag: &str) -> String {
    format!("{}.{}", class_name, extension_for_tag(language_tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::TargetLanguage;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_suggested_file_name() {
        let project = ProjectData::starter();
        assert_eq!(suggested_file_name(&project), "MyClass.cs");

        let project = project.for_language(TargetLanguage::Python);
        assert_eq!(suggested_file_name(&project), "MyClass.py");
    }

    #[test]
    fn test_file_name_for_unknown_tag() {
        assert_eq!(file_name_for_tag("MyClass", "java"), "MyClass.java");
        assert_eq!(file_name_for_tag("MyClass", "cobol"), "MyClass.txt");
    }
}
