// ABOUTME: Token category enumeration and the fixed token namespace
// ABOUTME: Categories are the closed set a token name's category segment may take

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseEnumError;

/// Namespace segment every catalog token name starts with
pub const NAMESPACE: &str = "krds";

/// Category segment of a compound token name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Typography,
    Spacing,
    Sizing,
    Border,
    Shadow,
    Motion,
    Layout,
    Component,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 9] = [
        TokenCategory::Color,
        TokenCategory::Typography,
        TokenCategory::Spacing,
        TokenCategory::Sizing,
        TokenCategory::Border,
        TokenCategory::Shadow,
        TokenCategory::Motion,
        TokenCategory::Layout,
        TokenCategory::Component,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Typography => "typography",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Sizing => "sizing",
            TokenCategory::Border => "border",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Motion => "motion",
            TokenCategory::Layout => "layout",
            TokenCategory::Component => "component",
        }
    }

    /// Match a raw name segment; unknown segments yield `None`
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == segment)
    }

    /// Capitalized label used in generated descriptions
    pub fn label(self) -> &'static str {
        match self {
            TokenCategory::Color => "Color",
            TokenCategory::Typography => "Typography",
            TokenCategory::Spacing => "Spacing",
            TokenCategory::Sizing => "Sizing",
            TokenCategory::Border => "Border",
            TokenCategory::Shadow => "Shadow",
            TokenCategory::Motion => "Motion",
            TokenCategory::Layout => "Layout",
            TokenCategory::Component => "Component",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_segment(&s.trim().to_lowercase())
            .ok_or_else(|| ParseEnumError::new("token category", s))
    }
}
