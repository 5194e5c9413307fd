// ABOUTME: KRDS artifact generator: request-driven facade over the token and component crates
// ABOUTME: Also hosts configuration loading shared by the krds-gen binary

pub mod config;
pub mod generator;

#[cfg(test)]
mod integrity_tests;

pub use config::{CatalogConfig, Config};
pub use generator::{Artifact, ArtifactRequest, GenerateError, Generator, GeneratorOptions};

// Re-export the layers so hosts need a single dependency
pub use krds_components as components;
pub use krds_tokens as tokens;
pub use krds_types as types;
