// ABOUTME: Cross-crate checks that generated CSS only references tokens the catalog defines
// ABOUTME: Catches drift between the built-in token set and the CSS builders

#[cfg(test)]
mod tests {
    use crate::{Artifact, ArtifactRequest, Generator, GeneratorOptions};
    use krds_components::{ComponentCatalog, TemplateSynthesizer, fallback_template};
    use krds_tokens::TokenCatalog;
    use krds_types::{ComponentDescriptor, Theme};
    use regex::Regex;
    use std::collections::BTreeSet;

    fn referenced_tokens(css: &str) -> BTreeSet<String> {
        let pattern = Regex::new(r"var\(--([a-z0-9-]+)\)").unwrap();
        pattern
            .captures_iter(css)
            .map(|captures| captures[1].to_string())
            .collect()
    }

    fn assert_all_defined(tokens: &TokenCatalog, css: &str, context: &str) {
        let missing: Vec<String> = referenced_tokens(css)
            .into_iter()
            .filter(|name| !tokens.contains(name))
            .collect();
        assert!(missing.is_empty(), "{context} references undefined tokens: {missing:?}");
    }

    #[test]
    fn test_component_css_references_defined_tokens() {
        let tokens = TokenCatalog::builtin().unwrap();
        let components = ComponentCatalog::builtin().unwrap();
        let synthesizer = TemplateSynthesizer::new();

        for descriptor in components.iter() {
            let mut variants: Vec<Option<&str>> = vec![None];
            variants.extend(descriptor.variants.iter().map(|v| Some(v.as_str())));

            for variant in variants {
                let template = synthesizer.synthesize(descriptor, variant).unwrap();
                assert!(
                    template.html.contains(&descriptor.class_name),
                    "{} html lacks its class",
                    descriptor.id
                );
                assert_all_defined(&tokens, &template.css, &descriptor.id);
            }
        }

        let stub = fallback_template(&ComponentDescriptor::new("x", "krds-x", "zzz"));
        assert_all_defined(&tokens, &stub.css, "fallback");
    }

    #[test]
    fn test_stylesheet_utilities_reference_defined_tokens() {
        let generator = Generator::new(
            TokenCatalog::builtin().unwrap(),
            ComponentCatalog::new(),
            GeneratorOptions::default(),
        );

        for theme in Theme::ALL {
            let Artifact::Css(css) = generator
                .generate(ArtifactRequest::Stylesheet {
                    theme: Some(theme),
                    utilities: Some(true),
                })
                .unwrap()
            else {
                panic!("expected css");
            };
            assert_all_defined(generator.tokens(), &css, theme.as_str());
        }
    }

    #[test]
    fn test_dark_stylesheet_layout_with_builtin_tokens() {
        let tokens = TokenCatalog::builtin().unwrap();
        let css = krds_tokens::emit_stylesheet(&tokens, Theme::Dark);

        let root_end = css.find("}\n").unwrap();
        let root = &css[..root_end];
        assert!(root.contains("--krds-light-color-text-basic: #1e2124;"));
        assert!(!root.contains("--krds-dark-"));
        assert!(root.contains("--krds-high-contrast-color-text-basic"));

        let dark_start = css.find("[data-theme=\"dark\"] {").unwrap();
        let dark_end = dark_start + css[dark_start..].find("}\n").unwrap();
        let dark = &css[dark_start..dark_end];
        assert!(dark.contains("--krds-dark-color-text-basic: #e6e8ea;"));
        assert!(!dark.contains("--krds-spacing-"));
        assert!(!dark.contains("--krds-light-"));
    }
}
