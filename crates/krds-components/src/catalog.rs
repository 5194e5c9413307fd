// ABOUTME: Read-only component catalog keyed by component id
// ABOUTME: Loads descriptor arrays from JSON, with a built-in sample set

use indexmap::IndexMap;
use krds_types::{ComponentCategory, ComponentDescriptor};
use std::path::{Path, PathBuf};

const BUILTIN_COMPONENTS: &str = include_str!("../assets/components.json");

#[derive(Debug, thiserror::Error)]
pub enum ComponentCatalogError {
    #[error("Failed to read component catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid component catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Component descriptors in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentCatalog {
    components: IndexMap<String, ComponentDescriptor>,
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Result<Self, ComponentCatalogError> {
        Self::from_json_str(BUILTIN_COMPONENTS)
    }

    /// Parse a JSON array of descriptors; a repeated id replaces the earlier entry
    pub fn from_json_str(json: &str) -> Result<Self, ComponentCatalogError> {
        let descriptors: Vec<ComponentDescriptor> = serde_json::from_str(json)?;
        Ok(descriptors.into_iter().collect())
    }

    pub fn from_path(path: &Path) -> Result<Self, ComponentCatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| ComponentCatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn insert(&mut self, descriptor: ComponentDescriptor) -> Option<ComponentDescriptor> {
        self.components.insert(descriptor.id.clone(), descriptor)
    }

    pub fn get(&self, id: &str) -> Option<&ComponentDescriptor> {
        self.components.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.values()
    }

    pub fn by_category<'a>(
        &'a self,
        category: &'a ComponentCategory,
    ) -> impl Iterator<Item = &'a ComponentDescriptor> {
        self.iter()
            .filter(move |descriptor| &descriptor.category == category)
    }
}

impl FromIterator<ComponentDescriptor> for ComponentCatalog {
    fn from_iter<I: IntoIterator<Item = ComponentDescriptor>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for descriptor in iter {
            catalog.insert(descriptor);
        }
        catalog
    }
}
