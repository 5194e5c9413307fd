// ABOUTME: Category dispatch producing HTML + CSS template pairs for components
// ABOUTME: Malformed descriptors degrade to a minimal stub instead of failing the caller

use krds_logging::{debug, warn};
use krds_types::{ComponentCategory, ComponentDescriptor, GeneratedTemplate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::variant::{PatternResolver, VariantFacets, VariantResolver};
use crate::{css, html};

static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_-][A-Za-z0-9_-]*$").expect("class name pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
    #[error("Malformed descriptor '{id}': {reason}")]
    MalformedDescriptor { id: String, reason: String },
}

/// Which markup and CSS builders a descriptor routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blueprint {
    Button,
    Link,
    Fieldset,
    Checkbox,
    Radio,
    Control,
    Navigation,
    Breadcrumb,
    Alert,
    Card,
    Modal,
    Table,
    /// Unknown category, or an id the category has no builder for
    Generic,
}

impl Blueprint {
    pub fn for_descriptor(descriptor: &ComponentDescriptor) -> Self {
        let id = descriptor.id.as_str();
        match &descriptor.category {
            ComponentCategory::Action if id == "button" => Blueprint::Button,
            ComponentCategory::Action => Blueprint::Link,
            ComponentCategory::Input if descriptor.is_fieldset() => Blueprint::Fieldset,
            ComponentCategory::Input => match id {
                "checkbox" => Blueprint::Checkbox,
                "radio" => Blueprint::Radio,
                _ => Blueprint::Control,
            },
            ComponentCategory::Navigation => match id {
                "navigation" | "nav" => Blueprint::Navigation,
                "breadcrumb" => Blueprint::Breadcrumb,
                _ => Blueprint::Generic,
            },
            ComponentCategory::Feedback if id == "alert" => Blueprint::Alert,
            ComponentCategory::Layout if id == "card" => Blueprint::Card,
            ComponentCategory::Layout if id == "modal" => Blueprint::Modal,
            ComponentCategory::Content if id == "table" => Blueprint::Table,
            ComponentCategory::Feedback
            | ComponentCategory::Layout
            | ComponentCategory::Content
            | ComponentCategory::Other(_) => Blueprint::Generic,
        }
    }

    /// Facet values this builder understands, for variant pickers.
    /// `None` means the descriptor's own variant list is advertised.
    pub fn advertised_variants(self) -> Option<&'static [&'static str]> {
        let variants: &'static [&'static str] = match self {
            Blueprint::Button => &["xsmall", "small", "medium", "large", "xlarge", "disabled"],
            Blueprint::Link => &["small", "medium", "disabled"],
            Blueprint::Fieldset | Blueprint::Control => {
                &["default", "error", "disabled", "readonly"]
            }
            Blueprint::Checkbox | Blueprint::Radio => &["default", "checked", "disabled"],
            Blueprint::Navigation => &["horizontal", "vertical"],
            Blueprint::Breadcrumb | Blueprint::Card | Blueprint::Table => &["default"],
            Blueprint::Alert => &["info", "success", "warning", "error"],
            Blueprint::Modal => &["small", "medium", "large"],
            Blueprint::Generic => return None,
        };
        Some(variants)
    }

    fn markup(self, ctx: &html::MarkupContext<'_>) -> String {
        match self {
            Blueprint::Button => html::button(ctx),
            Blueprint::Link => html::link(ctx),
            Blueprint::Fieldset => html::fieldset(ctx),
            Blueprint::Checkbox => html::choice(ctx, "checkbox"),
            Blueprint::Radio => html::choice(ctx, "radio"),
            Blueprint::Control => html::control(ctx),
            Blueprint::Navigation => html::navigation(ctx),
            Blueprint::Breadcrumb => html::breadcrumb(ctx),
            Blueprint::Alert => html::alert(ctx),
            Blueprint::Card => html::card(ctx),
            Blueprint::Modal => html::modal(ctx),
            Blueprint::Table => html::table(ctx),
            Blueprint::Generic => html::generic(ctx),
        }
    }

    fn stylesheet(self, class: &str) -> String {
        match self {
            Blueprint::Button => css::button(class),
            Blueprint::Link => css::link(class),
            Blueprint::Fieldset | Blueprint::Control => css::input(class),
            Blueprint::Checkbox | Blueprint::Radio => css::choice(class),
            Blueprint::Navigation => css::navigation(class),
            Blueprint::Breadcrumb => css::breadcrumb(class),
            Blueprint::Alert => css::alert(class),
            Blueprint::Card => css::card(class),
            Blueprint::Modal => css::modal(class),
            Blueprint::Table => css::table(class),
            Blueprint::Generic => css::generic(class),
        }
    }
}

fn validate(descriptor: &ComponentDescriptor) -> Result<(), SynthesisError> {
    let malformed = |reason: String| SynthesisError::MalformedDescriptor {
        id: descriptor.id.clone(),
        reason,
    };

    if descriptor.id.trim().is_empty() {
        return Err(malformed("component id is empty".to_string()));
    }
    if !CLASS_NAME.is_match(&descriptor.class_name) {
        return Err(malformed(format!(
            "'{}' is not a usable CSS class name",
            descriptor.class_name
        )));
    }
    Ok(())
}

/// Stub returned when synthesis fails
pub fn fallback_template(descriptor: &ComponentDescriptor) -> GeneratedTemplate {
    let class = if CLASS_NAME.is_match(&descriptor.class_name) {
        descriptor.class_name.clone()
    } else {
        html::escape(&descriptor.class_name)
    };

    GeneratedTemplate {
        html: format!("<div class=\"{class}\">\n  {}\n</div>\n", html::escape(&descriptor.id)),
        css: css::minimal_box(&class),
        variants: descriptor.variants.clone(),
    }
}

/// Builds templates from descriptors, resolving variant facets through `R`
#[derive(Debug, Clone, Default)]
pub struct TemplateSynthesizer<R = PatternResolver> {
    resolver: R,
}

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: VariantResolver> TemplateSynthesizer<R> {
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn synthesize(
        &self,
        descriptor: &ComponentDescriptor,
        variant: Option<&str>,
    ) -> Result<GeneratedTemplate, SynthesisError> {
        validate(descriptor)?;

        let blueprint = Blueprint::for_descriptor(descriptor);
        debug!(
            component = %descriptor.id,
            category = %descriptor.category,
            blueprint = ?blueprint,
            variant = variant.unwrap_or(""),
            "Synthesizing component template"
        );

        let ctx = html::MarkupContext {
            descriptor,
            variant,
            facets: VariantFacets::resolve(&self.resolver, variant),
            attributes: variant.map_or("", |v| self.resolver.state_attributes(v)),
        };

        let variants = match blueprint.advertised_variants() {
            Some(values) => values.iter().map(|v| v.to_string()).collect(),
            None => descriptor.variants.clone(),
        };

        Ok(GeneratedTemplate {
            html: blueprint.markup(&ctx),
            css: blueprint.stylesheet(&descriptor.class_name),
            variants,
        })
    }

    /// Like [`synthesize`](Self::synthesize), but never fails
    pub fn synthesize_or_fallback(
        &self,
        descriptor: &ComponentDescriptor,
        variant: Option<&str>,
    ) -> GeneratedTemplate {
        match self.synthesize(descriptor, variant) {
            Ok(template) => template,
            Err(error) => {
                warn!(
                    component = %descriptor.id,
                    error = %error,
                    "Template synthesis failed, using fallback template"
                );
                fallback_template(descriptor)
            }
        }
    }
}
