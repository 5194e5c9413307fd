// ABOUTME: Component descriptor and generated template data types
// ABOUTME: Descriptors are catalog input, templates are synthesized output

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ParseEnumError;

/// Component category driving template dispatch.
///
/// Unrecognised categories are kept verbatim in `Other` so that they can
/// still be routed to the generic fallback template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentCategory {
    Action,
    Input,
    Navigation,
    Feedback,
    Layout,
    Content,
    Other(String),
}

impl ComponentCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentCategory::Action => "action",
            ComponentCategory::Input => "input",
            ComponentCategory::Navigation => "navigation",
            ComponentCategory::Feedback => "feedback",
            ComponentCategory::Layout => "layout",
            ComponentCategory::Content => "content",
            ComponentCategory::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentCategory::Other(_))
    }
}

impl From<&str> for ComponentCategory {
    fn from(value: &str) -> Self {
        match value {
            "action" => ComponentCategory::Action,
            "input" => ComponentCategory::Input,
            "navigation" => ComponentCategory::Navigation,
            "feedback" => ComponentCategory::Feedback,
            "layout" => ComponentCategory::Layout,
            "content" => ComponentCategory::Content,
            other => ComponentCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for ComponentCategory {
    fn from(value: String) -> Self {
        ComponentCategory::from(value.as_str())
    }
}

impl From<ComponentCategory> for String {
    fn from(category: ComponentCategory) -> Self {
        match category {
            ComponentCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markup structure requested by input components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStructure {
    Fieldset,
}

impl std::str::FromStr for InputStructure {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fieldset" => Ok(InputStructure::Fieldset),
            _ => Err(ParseEnumError::new("input structure", s)),
        }
    }
}

/// Catalog entry describing one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub id: String,
    /// CSS class root, e.g. `krds-btn`
    pub class_name: String,
    pub category: ComponentCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_file: Option<String>,
    /// Variant identifiers in catalog order
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<InputStructure>,
    /// Opaque, possibly localized, description text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComponentDescriptor {
    pub fn new(
        id: impl Into<String>,
        class_name: impl Into<String>,
        category: impl Into<ComponentCategory>,
    ) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            category: category.into(),
            html_file: None,
            variants: Vec::new(),
            structure: None,
            description: None,
        }
    }

    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_structure(mut self, structure: InputStructure) -> Self {
        self.structure = Some(structure);
        self
    }

    pub fn with_html_file(mut self, html_file: impl Into<String>) -> Self {
        self.html_file = Some(html_file.into());
        self
    }

    /// Variant identifier used when the caller does not name one
    pub fn default_file(&self) -> String {
        self.html_file
            .clone()
            .unwrap_or_else(|| format!("{}.html", self.id))
    }

    pub fn is_fieldset(&self) -> bool {
        self.structure == Some(InputStructure::Fieldset)
    }
}

/// HTML + CSS template pair produced for a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTemplate {
    pub html: String,
    pub css: String,
    /// Facet values the producing branch understands
    pub variants: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_deserialization() {
        let json = r#"{
            "id": "text-input",
            "className": "krds-input",
            "category": "input",
            "htmlFile": "text_input.html",
            "variants": ["text_input_size_small.html"],
            "structure": "fieldset"
        }"#;

        let descriptor: ComponentDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.id, "text-input");
        assert_eq!(descriptor.class_name, "krds-input");
        assert_eq!(descriptor.category, ComponentCategory::Input);
        assert_eq!(descriptor.variants.len(), 1);
        assert!(descriptor.is_fieldset());
        assert_eq!(descriptor.default_file(), "text_input.html");
    }

    #[test]
    fn test_unknown_category_is_preserved() {
        let json = r#"{"id": "x", "className": "krds-x", "category": "zzz"}"#;
        let descriptor: ComponentDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(descriptor.category, ComponentCategory::Other("zzz".to_string()));
        assert!(!descriptor.category.is_known());
        assert!(descriptor.variants.is_empty());
        assert_eq!(descriptor.default_file(), "x.html");

        let back = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(back["category"], "zzz");
        assert!(back.get("structure").is_none());
    }

    #[test]
    fn test_unknown_structure_is_rejected() {
        let json = r#"{"id": "x", "className": "krds-x", "category": "input", "structure": "grid"}"#;
        assert!(serde_json::from_str::<ComponentDescriptor>(json).is_err());
    }
}
