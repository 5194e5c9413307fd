// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for the token and component crates

pub mod component;
pub mod theme;
pub mod token;

// Re-export commonly used types
pub use component::{ComponentCategory, ComponentDescriptor, GeneratedTemplate, InputStructure};
pub use theme::Theme;
pub use token::{NAMESPACE, TokenCategory};

/// Error returned when a string does not name a known enum value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
