//! Target output languages.

use serde::{Deserialize, Serialize};

/// Target languages the generator can emit.
///
/// Unrecognized language tags fall back to [`TargetLanguage::CSharp`],
/// both at parse time and through serde. A project file written by an
/// older or newer collaborator therefore always generates something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum TargetLanguage {
    /// C#: namespaced OOP, brace-based, utility hoisting.
    #[default]
    CSharp,
    /// Java: JVM-style OOP, utilities rendered inline (legacy variant).
    Java,
    /// JavaScript: dynamically typed, brace-based, utility hoisting.
    JavaScript,
    /// Python: indentation-sensitive, utilities rendered inline.
    Python,
}

impl TargetLanguage {
    /// Parse a lowercase language tag, falling back to C# for unknown tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "java" => Self::Java,
            "javascript" => Self::JavaScript,
            "python" => Self::Python,
            _ => Self::CSharp,
        }
    }

    /// The lowercase tag used in project files.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Python => "python",
        }
    }

    /// Get the display name for the language.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CSharp => "C#",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
        }
    }

    /// Get the file extension for generated source files.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::CSharp => "cs",
            Self::Java => "java",
            Self::JavaScript => "js",
            Self::Python => "py",
        }
    }

    /// Whether utility-function blocks are hoisted to class level rather
    /// than rendered inline at their call site.
    #[must_use]
    pub const fn hoists_utilities(&self) -> bool {
        matches!(self, Self::CSharp | Self::JavaScript)
    }

    /// Get all available languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::CSharp, Self::Java, Self::JavaScript, Self::Python]
    }
}

impl From<String> for TargetLanguage {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<TargetLanguage> for String {
    fn from(language: TargetLanguage) -> Self {
        language.tag().to_string()
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// File extension for a raw language tag, `txt` when unrecognized.
///
/// Unlike [`TargetLanguage::from_tag`] this does not collapse unknown tags
/// into C#; a download of an unrecognized language gets a neutral extension.
#[must_use]
pub fn extension_for_tag(tag: &str) -> &'static str {
    match tag {
        "csharp" => "cs",
        "java" => "java",
        "javascript" => "js",
        "python" => "py",
        _ => "txt",
    }
}
