//! Code element types.
//!
//! A [`CodeElement`] is one draggable block on the canvas: a statement, a
//! declaration, or a block construct with nested children. The generator
//! only reads these; the collaborator UI creates and mutates them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog;
use crate::id::generate_id;

/// Operation-specific configuration of an element.
///
/// Keys are enumerated per element type; values are arbitrary JSON scalars
/// coming from the property form. Insertion order is preserved so saved
/// project files stay stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    entries: IndexMap<String, Value>,
}

impl Properties {
    /// Creates an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the raw value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Sets a property value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Resolves a property as text, applying the given default.
    ///
    /// The default applies when the key is missing, null, or an empty
    /// string; numbers and booleans render via their display form. This is
    /// the lookup every template field goes through, so a half-filled
    /// property form can never break generation.
    #[must_use]
    pub fn text(&self, key: &str, default: &str) -> String {
        match self.entries.get(key) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }
}

/// UI-only canvas coordinates of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate.
    pub y: f64,
}

/// One renderable unit of behavior in the method being built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeElement {
    /// Unique, opaque element id.
    pub id: String,
    /// Tag identifying the statement kind (e.g. `console.writeline`).
    #[serde(rename = "type")]
    pub element_type: String,
    /// Human-readable default label, used only by the UI.
    #[serde(default)]
    pub content: String,
    /// Operation-specific configuration.
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
    /// Nested body, only meaningful for block-structured element types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CodeElement>,
    /// Canvas coordinates, only meaningful to the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl CodeElement {
    /// Creates a fresh element for a tag, as the UI does on drop: a new
    /// id and the catalog label as default content. Unknown tags keep the
    /// tag itself as content.
    #[must_use]
    pub fn new(element_type: impl Into<String>) -> Self {
        let element_type = element_type.into();
        let content = catalog::find(&element_type)
            .map_or_else(|| element_type.clone(), |block| block.label.to_string());
        Self {
            id: generate_id(),
            element_type,
            content,
            properties: Properties::new(),
            children: Vec::new(),
            position: None,
        }
    }

    /// Sets a property value.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Appends a nested child element.
    #[must_use]
    pub fn with_child(mut self, child: CodeElement) -> Self {
        self.children.push(child);
        self
    }

    /// Places the element on the canvas.
    #[must_use]
    pub const fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position { x, y });
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_element_gets_id_and_label() {
        let element = CodeElement::new("console.writeline");
        assert_eq!(element.id.len(), 36);
        assert_eq!(element.content, "Console.WriteLine");
        assert!(element.children.is_empty());
    }

    #[test]
    fn test_unknown_tag_keeps_tag_as_content() {
        let element = CodeElement::new("goto");
        assert_eq!(element.content, "goto");
    }

    #[test]
    fn test_property_text_defaults() {
        let props = Properties::new();
        assert_eq!(props.text("condition", "true"), "true");
    }

    #[test]
    fn test_property_text_scalars() {
        let mut props = Properties::new();
        props.set("start", 5);
        props.set("flag", true);
        props.set("name", "counter");
        props.set("empty", "");
        assert_eq!(props.text("start", "0"), "5");
        assert_eq!(props.text("flag", "false"), "true");
        assert_eq!(props.text("name", "myVariable"), "counter");
        // Empty strings fall back, mirroring the property form clearing a field.
        assert_eq!(props.text("empty", "fallback"), "fallback");
    }

    #[test]
    fn test_serde_uses_type_field() {
        let element = CodeElement::new("if").with_property("condition", "x > 0");
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "if");
        assert_eq!(json["properties"]["condition"], "x > 0");

        let back: CodeElement = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn test_deserialize_minimal_element() {
        let element: CodeElement =
            serde_json::from_str(r#"{"id": "e1", "type": "break"}"#).unwrap();
        assert_eq!(element.element_type, "break");
        assert!(element.properties.is_empty());
        assert!(element.position.is_none());
    }
}
