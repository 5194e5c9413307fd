// ABOUTME: Ordered, read-only token catalog keyed by compound token name
// ABOUTME: Loads from flat JSON objects and answers category-scoped lookups

use indexmap::IndexMap;
use krds_types::{Theme, TokenCategory};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::grammar;
use crate::theme::is_visible;

const BUILTIN_TOKENS: &str = include_str!("../assets/tokens.json");

/// Errors raised while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Token name to value map.
///
/// Iteration follows insertion order, which is what makes collision handling
/// in the Style Dictionary tree reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenCatalog {
    tokens: IndexMap<String, String>,
}

/// A token resolved for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub name: String,
    pub value: String,
    pub description: String,
}

impl TokenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_TOKENS)
    }

    /// Parse a flat `{ "name": "value" }` JSON object
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Insert or replace a token; a replaced token keeps its position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.tokens.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Tokens visible under `theme`, in catalog order
    pub fn visible(&self, theme: Theme) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(move |(name, _)| is_visible(name, theme))
    }

    /// Tokens whose category segment is `category`, optionally theme filtered.
    ///
    /// Names that fail to parse, or whose category is outside the fixed
    /// enumeration, are simply not found.
    pub fn by_category(&self, category: TokenCategory, theme: Option<Theme>) -> Vec<TokenEntry> {
        self.iter()
            .filter(|(name, _)| theme.is_none_or(|theme| is_visible(name, theme)))
            .filter(|(name, _)| {
                grammar::parse(name)
                    .map(|parsed| parsed.category() == Some(category))
                    .unwrap_or(false)
            })
            .map(|(name, value)| TokenEntry {
                name: name.to_string(),
                value: value.to_string(),
                description: grammar::describe(name),
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for TokenCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
