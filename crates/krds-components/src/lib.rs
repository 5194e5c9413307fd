// ABOUTME: Component template synthesis for the KRDS artifact generator
// ABOUTME: Catalog lookup, variant facet resolution, per-category builders and memoization

pub mod a11y;
pub mod cache;
pub mod catalog;
pub mod css;
pub mod html;
pub mod synth;
pub mod variant;

pub use a11y::{AccessibilityReport, AccessibilityValidator};
pub use cache::{ComponentError, TemplateCache};
pub use catalog::{ComponentCatalog, ComponentCatalogError};
pub use synth::{Blueprint, SynthesisError, TemplateSynthesizer, fallback_template};
pub use variant::{
    PatternResolver, VariantFacets, VariantResolver, extract_size, extract_state, extract_type,
    state_attributes,
};
