//! Top-level dispatch and shared formatting helpers.

use codebuilder_domain::{ProjectData, TargetLanguage};

use crate::{csharp, java, javascript, python};

/// One indentation level of generated source.
pub(crate) const INDENT: &str = "    ";

/// Indentation prefix for a nesting depth.
pub(crate) fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Re-indents a multi-line template so its first level sits at `depth`.
///
/// Blank lines stay blank rather than picking up trailing whitespace.
pub(crate) fn reindent(template: &str, depth: usize) -> String {
    let pad = indent(depth);
    template
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate source text for a project in its target language.
///
/// Pure and deterministic: the same project renders byte-identical output
/// on every call, and no structurally valid input can fail.
#[must_use]
pub fn generate(project: &ProjectData) -> String {
    match project.language {
        TargetLanguage::CSharp => csharp::emit(project),
        TargetLanguage::Java => java::emit(project),
        TargetLanguage::JavaScript => javascript::emit(project),
        TargetLanguage::Python => python::emit(project),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indent_depth() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn test_reindent_keeps_blank_lines_empty() {
        let out = reindent("a\n\nb", 1);
        assert_eq!(out, "    a\n\n    b");
    }

    #[test]
    fn test_generate_is_idempotent() {
        let project = ProjectData::starter();
        assert_eq!(generate(&project), generate(&project));
    }
}
