// ABOUTME: Protocol-agnostic entry point turning artifact requests into artifacts
// ABOUTME: Owns the catalogs, the template cache and the optional accessibility validator

use indexmap::IndexMap;
use krds_components::{
    AccessibilityReport, AccessibilityValidator, ComponentCatalog, ComponentError, TemplateCache,
    TemplateSynthesizer,
};
use krds_logging::{PerfTimer, debug, info};
use krds_tokens::{StylesheetOptions, TokenCatalog, TokenEntry};
use krds_types::{GeneratedTemplate, Theme, TokenCategory};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Emission taking longer than this is logged as slow
const SLOW_GENERATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Theme used when a request does not name one
    pub default_theme: Theme,
    /// Append utility classes to stylesheets unless a request says otherwise
    pub utilities: bool,
    /// Memoize component templates for the generator's lifetime
    pub cache_templates: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            utilities: true,
            cache_templates: true,
        }
    }
}

/// One generation request, tagged by `kind` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtifactRequest {
    Stylesheet {
        #[serde(default)]
        theme: Option<Theme>,
        #[serde(default)]
        utilities: Option<bool>,
    },
    Variables {
        #[serde(default)]
        theme: Option<Theme>,
    },
    StyleDictionary,
    Component {
        id: String,
        #[serde(default)]
        variant: Option<String>,
    },
    Tokens {
        category: TokenCategory,
        #[serde(default)]
        theme: Option<Theme>,
    },
    DescribeToken {
        name: String,
    },
    ValidateComponent {
        id: String,
        #[serde(default)]
        variant: Option<String>,
    },
}

impl ArtifactRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            ArtifactRequest::Stylesheet { .. } => "stylesheet",
            ArtifactRequest::Variables { .. } => "variables",
            ArtifactRequest::StyleDictionary => "style_dictionary",
            ArtifactRequest::Component { .. } => "component",
            ArtifactRequest::Tokens { .. } => "tokens",
            ArtifactRequest::DescribeToken { .. } => "describe_token",
            ArtifactRequest::ValidateComponent { .. } => "validate_component",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Artifact {
    Css(String),
    Variables(IndexMap<String, String>),
    Tree(Value),
    Template(Arc<GeneratedTemplate>),
    Tokens(Vec<TokenEntry>),
    Description(String),
    Accessibility(AccessibilityReport),
}

impl Artifact {
    /// Text form for terminals: CSS and descriptions verbatim, everything else as JSON
    pub fn to_text(&self) -> Result<String, GenerateError> {
        Ok(match self {
            Artifact::Css(css) => css.clone(),
            Artifact::Description(text) => format!("{text}\n"),
            Artifact::Variables(vars) => vars
                .iter()
                .map(|(name, value)| format!("{name}: {value};\n"))
                .collect(),
            Artifact::Tree(tree) => format!("{}\n", serde_json::to_string_pretty(tree)?),
            Artifact::Template(template) => {
                format!("{}\n", serde_json::to_string_pretty(template.as_ref())?)
            }
            Artifact::Tokens(entries) => format!("{}\n", serde_json::to_string_pretty(entries)?),
            Artifact::Accessibility(report) => {
                format!("{}\n", serde_json::to_string_pretty(report)?)
            }
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error("No accessibility validator is configured")]
    NoValidator,

    #[error("Failed to serialize artifact: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct Generator {
    tokens: TokenCatalog,
    components: ComponentCatalog,
    options: GeneratorOptions,
    cache: TemplateCache,
    validator: Option<Box<dyn AccessibilityValidator>>,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("tokens", &self.tokens.len())
            .field("components", &self.components.len())
            .field("options", &self.options)
            .field("cached_templates", &self.cache.len())
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

impl Generator {
    pub fn new(
        tokens: TokenCatalog,
        components: ComponentCatalog,
        options: GeneratorOptions,
    ) -> Self {
        info!(
            tokens = tokens.len(),
            components = components.len(),
            default_theme = %options.default_theme,
            "Generator ready"
        );
        Self {
            tokens,
            components,
            options,
            cache: TemplateCache::new(),
            validator: None,
        }
    }

    pub fn with_validator(mut self, validator: Box<dyn AccessibilityValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn tokens(&self) -> &TokenCatalog {
        &self.tokens
    }

    pub fn components(&self) -> &ComponentCatalog {
        &self.components
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn generate(&self, request: ArtifactRequest) -> Result<Artifact, GenerateError> {
        debug!(kind = request.kind(), "Handling artifact request");

        let artifact = match request {
            ArtifactRequest::Stylesheet { theme, utilities } => {
                let _timer = PerfTimer::new("emit_stylesheet").with_warn_threshold(SLOW_GENERATION);
                let options = StylesheetOptions {
                    utilities: utilities.unwrap_or(self.options.utilities),
                };
                Artifact::Css(krds_tokens::emit_stylesheet_with(
                    &self.tokens,
                    self.theme(theme),
                    &options,
                ))
            }
            ArtifactRequest::Variables { theme } => {
                Artifact::Variables(krds_tokens::emit_variables(&self.tokens, self.theme(theme)))
            }
            ArtifactRequest::StyleDictionary => Artifact::Tree(krds_tokens::to_tree(&self.tokens)),
            ArtifactRequest::Component { id, variant } => {
                Artifact::Template(self.template(&id, variant.as_deref())?)
            }
            ArtifactRequest::Tokens { category, theme } => {
                Artifact::Tokens(self.tokens.by_category(category, theme))
            }
            ArtifactRequest::DescribeToken { name } => {
                Artifact::Description(krds_tokens::describe(&name))
            }
            ArtifactRequest::ValidateComponent { id, variant } => {
                let validator = self.validator.as_ref().ok_or(GenerateError::NoValidator)?;
                let template = self.template(&id, variant.as_deref())?;
                Artifact::Accessibility(validator.validate(&template.html))
            }
        };

        Ok(artifact)
    }

    fn theme(&self, requested: Option<Theme>) -> Theme {
        requested.unwrap_or(self.options.default_theme)
    }

    fn template(
        &self,
        id: &str,
        variant: Option<&str>,
    ) -> Result<Arc<GeneratedTemplate>, GenerateError> {
        let _timer = PerfTimer::new("synthesize_template").with_warn_threshold(SLOW_GENERATION);

        if self.options.cache_templates {
            return Ok(self.cache.get(&self.components, id, variant)?);
        }

        let descriptor = self
            .components
            .get(id)
            .ok_or_else(|| ComponentError::UnknownComponent(id.to_string()))?;
        let variant = variant.map_or_else(|| descriptor.default_file(), str::to_string);
        Ok(Arc::new(
            TemplateSynthesizer::new().synthesize_or_fallback(descriptor, Some(&variant)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(options: GeneratorOptions) -> Generator {
        Generator::new(
            TokenCatalog::builtin().unwrap(),
            ComponentCatalog::builtin().unwrap(),
            options,
        )
    }

    fn request(json: &str) -> ArtifactRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_wire_format() {
        assert_eq!(
            request(r#"{"kind": "component", "id": "button", "variant": "button_size_small.html"}"#),
            ArtifactRequest::Component {
                id: "button".to_string(),
                variant: Some("button_size_small.html".to_string()),
            }
        );
        assert_eq!(
            request(r#"{"kind": "stylesheet"}"#),
            ArtifactRequest::Stylesheet {
                theme: None,
                utilities: None
            }
        );
        assert_eq!(
            request(r#"{"kind": "tokens", "category": "spacing", "theme": "dark"}"#),
            ArtifactRequest::Tokens {
                category: TokenCategory::Spacing,
                theme: Some(Theme::Dark),
            }
        );
        assert!(serde_json::from_str::<ArtifactRequest>(r#"{"kind": "deploy"}"#).is_err());
    }

    #[test]
    fn test_stylesheet_uses_default_theme() {
        let generator = generator(GeneratorOptions {
            default_theme: Theme::Dark,
            utilities: false,
            cache_templates: true,
        });

        let Artifact::Css(css) = generator
            .generate(ArtifactRequest::Stylesheet {
                theme: None,
                utilities: None,
            })
            .unwrap()
        else {
            panic!("expected css");
        };
        assert!(css.contains("[data-theme=\"dark\"] {"));
        assert!(!css.contains(".krds-btn {"));

        let Artifact::Css(css) = generator
            .generate(ArtifactRequest::Stylesheet {
                theme: Some(Theme::Light),
                utilities: Some(true),
            })
            .unwrap()
        else {
            panic!("expected css");
        };
        assert!(!css.contains("[data-theme=\"dark\"]"));
        assert!(css.contains(".krds-btn {"));
    }

    #[test]
    fn test_component_requests_hit_the_cache() {
        let generator = generator(GeneratorOptions::default());
        let fetch = || match generator
            .generate(request(r#"{"kind": "component", "id": "button"}"#))
            .unwrap()
        {
            Artifact::Template(template) => template,
            other => panic!("unexpected artifact {other:?}"),
        };

        assert!(Arc::ptr_eq(&fetch(), &fetch()));
    }

    #[test]
    fn test_disabled_cache_recomputes() {
        let generator = generator(GeneratorOptions {
            cache_templates: false,
            ..GeneratorOptions::default()
        });
        let fetch = || match generator
            .generate(request(r#"{"kind": "component", "id": "card"}"#))
            .unwrap()
        {
            Artifact::Template(template) => template,
            other => panic!("unexpected artifact {other:?}"),
        };

        let (first, second) = (fetch(), fetch());
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_component_is_an_error() {
        let generator = generator(GeneratorOptions::default());
        let error = generator
            .generate(request(r#"{"kind": "component", "id": "carousel"}"#))
            .unwrap_err();
        assert!(matches!(
            error,
            GenerateError::Component(ComponentError::UnknownComponent(ref id)) if id == "carousel"
        ));
        assert_eq!(error.to_string(), "Unknown component: 'carousel'");
    }

    #[test]
    fn test_token_lookups() {
        let generator = generator(GeneratorOptions::default());

        let Artifact::Tokens(entries) = generator
            .generate(request(r#"{"kind": "tokens", "category": "spacing"}"#))
            .unwrap()
        else {
            panic!("expected tokens");
        };
        assert!(entries.iter().any(|entry| entry.name == "krds-spacing-4"));

        let description = generator
            .generate(ArtifactRequest::DescribeToken {
                name: "krds-spacing-4".to_string(),
            })
            .unwrap();
        assert_eq!(description, Artifact::Description("Spacing token: 4".to_string()));
    }

    #[test]
    fn test_validation_requires_a_validator() {
        let validate = ArtifactRequest::ValidateComponent {
            id: "alert".to_string(),
            variant: None,
        };

        let error = generator(GeneratorOptions::default())
            .generate(validate.clone())
            .unwrap_err();
        assert!(matches!(error, GenerateError::NoValidator));

        let generator = generator(GeneratorOptions::default()).with_validator(Box::new(
            |html: &str| {
                if html.contains("role=\"alert\"") {
                    AccessibilityReport::pass()
                } else {
                    AccessibilityReport::fail(["alert without role"])
                }
            },
        ));
        assert_eq!(
            generator.generate(validate).unwrap(),
            Artifact::Accessibility(AccessibilityReport::pass())
        );
    }

    #[test]
    fn test_artifact_serialization() {
        let generator = generator(GeneratorOptions::default());
        let artifact = generator
            .generate(request(r#"{"kind": "describe_token", "name": "krds-shadow-1"}"#))
            .unwrap();

        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "description", "content": "Shadow token: 1" })
        );

        let tree = generator.generate(ArtifactRequest::StyleDictionary).unwrap();
        let text = tree.to_text().unwrap();
        assert!(text.contains("\"spacing\""));
    }

    #[test]
    fn test_variables_text_form() {
        let generator = Generator::new(
            [("krds-spacing-4", "16px"), ("krds-dark-color-text-basic", "#fff")]
                .into_iter()
                .collect(),
            ComponentCatalog::new(),
            GeneratorOptions::default(),
        );
        let artifact = generator
            .generate(ArtifactRequest::Variables { theme: None })
            .unwrap();
        assert_eq!(artifact.to_text().unwrap(), "--krds-spacing-4: 16px;\n");
    }
}
