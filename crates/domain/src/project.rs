//! Project tree: the root container the generator consumes.

use serde::{Deserialize, Serialize};

use crate::element::CodeElement;
use crate::error::ProjectResult;
use crate::language::TargetLanguage;

/// One parameter of a method signature.
///
/// The type is a semantic tag (`string`, `int`, `bool`, `double`, ...)
/// translated into the target language's lexicon at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Semantic type tag.
    #[serde(rename = "type")]
    pub param_type: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
        }
    }
}

/// One class method assembled on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// Visibility keyword (`public`, `private`, ...).
    #[serde(default = "default_visibility")]
    pub visibility: String,
    /// Whether the method is static.
    #[serde(default)]
    pub is_static: bool,
    /// Semantic return type tag.
    #[serde(default = "default_return_type")]
    pub return_type: String,
    /// Method name, emitted verbatim in every language.
    pub name: String,
    /// Ordered parameter list.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Ordered element sequence forming the method body.
    #[serde(default)]
    pub elements: Vec<CodeElement>,
}

fn default_visibility() -> String {
    "public".to_string()
}

fn default_return_type() -> String {
    "void".to_string()
}

impl Method {
    /// Creates a public void method with no parameters or elements.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            visibility: default_visibility(),
            is_static: false,
            return_type: default_return_type(),
            name: name.into(),
            parameters: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Marks the method static.
    #[must_use]
    pub fn set_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Sets the semantic return type.
    #[must_use]
    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends a body element.
    #[must_use]
    pub fn with_element(mut self, element: CodeElement) -> Self {
        self.elements.push(element);
        self
    }
}

/// Root container for one generated class, owned by the collaborator UI
/// and passed by reference into the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    /// Namespace (C#) or package (Java) the class lives in.
    pub namespace: String,
    /// Name of the generated class.
    pub class_name: String,
    /// Target output language.
    #[serde(default)]
    pub language: TargetLanguage,
    /// Ordered method definitions.
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl ProjectData {
    /// Creates an empty project for a namespace and class name.
    #[must_use]
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
            language: TargetLanguage::default(),
            methods: Vec::new(),
        }
    }

    /// The project the UI starts every session with: `MyProject.MyClass`
    /// targeting C#, containing one empty public void `MyMethod`.
    #[must_use]
    pub fn starter() -> Self {
        Self::new("MyProject", "MyClass").with_method(Method::new("MyMethod"))
    }

    /// Sets the target language.
    #[must_use]
    pub const fn for_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    /// Appends a method definition.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Parses a project from the JSON the collaborator produces.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProjectError::InvalidJson`] when the document is
    /// not valid project JSON.
    pub fn from_json(json: &str) -> ProjectResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the project to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProjectError::InvalidJson`] when serialization
    /// fails, which cannot happen for well-formed trees.
    pub fn to_json(&self) -> ProjectResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starter_project_shape() {
        let project = ProjectData::starter();
        assert_eq!(project.namespace, "MyProject");
        assert_eq!(project.class_name, "MyClass");
        assert_eq!(project.language, TargetLanguage::CSharp);
        assert_eq!(project.methods.len(), 1);
        assert_eq!(project.methods[0].name, "MyMethod");
        assert_eq!(project.methods[0].visibility, "public");
        assert_eq!(project.methods[0].return_type, "void");
        assert!(!project.methods[0].is_static);
    }

    #[test]
    fn test_json_round_trip() {
        let project = ProjectData::starter().for_language(TargetLanguage::Java);
        let json = project.to_json().unwrap();
        let back = ProjectData::from_json(&json).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = ProjectData::starter().to_json().unwrap();
        assert!(json.contains("\"className\""));
        assert!(json.contains("\"isStatic\""));
        assert!(json.contains("\"returnType\""));
    }

    #[test]
    fn test_deserialize_collaborator_document() {
        let json = r#"{
            "namespace": "Acme",
            "className": "Greeter",
            "language": "python",
            "methods": [
                {
                    "name": "Greet",
                    "parameters": [{ "name": "who", "type": "string" }],
                    "elements": [
                        { "id": "e1", "type": "console.writeline",
                          "properties": { "message": "hi" } }
                    ]
                }
            ]
        }"#;
        let project = ProjectData::from_json(json).unwrap();
        assert_eq!(project.language, TargetLanguage::Python);
        assert_eq!(project.methods[0].visibility, "public");
        assert_eq!(project.methods[0].parameters[0].param_type, "string");
        assert_eq!(
            project.methods[0].elements[0].properties.text("message", ""),
            "hi"
        );
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let result = ProjectData::from_json("{ not json");
        assert!(result.is_err());
    }
}
