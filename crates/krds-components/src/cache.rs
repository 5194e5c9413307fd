// ABOUTME: Process-lifetime memoization of synthesized templates
// ABOUTME: Keyed by (component id, variant or default file); repeat lookups share one Arc

use krds_logging::debug;
use krds_types::GeneratedTemplate;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::ComponentCatalog;
use crate::synth::TemplateSynthesizer;
use crate::variant::{PatternResolver, VariantResolver};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    #[error("Unknown component: '{0}'")]
    UnknownComponent(String),
}

type CacheKey = (String, String);

/// Template cache without eviction.
///
/// Synthesis runs while the lock is held, so concurrent callers asking for
/// the same key always observe the same `Arc`.
#[derive(Debug, Default)]
pub struct TemplateCache<R = PatternResolver> {
    synthesizer: TemplateSynthesizer<R>,
    entries: Mutex<HashMap<CacheKey, Arc<GeneratedTemplate>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: VariantResolver> TemplateCache<R> {
    pub fn with_synthesizer(synthesizer: TemplateSynthesizer<R>) -> Self {
        Self {
            synthesizer,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached template for `id`, synthesizing it on first access
    pub fn get(
        &self,
        catalog: &ComponentCatalog,
        id: &str,
        variant: Option<&str>,
    ) -> Result<Arc<GeneratedTemplate>, ComponentError> {
        let descriptor = catalog
            .get(id)
            .ok_or_else(|| ComponentError::UnknownComponent(id.to_string()))?;

        let variant_key = match variant {
            Some(variant) => variant.to_string(),
            None => descriptor.default_file(),
        };
        let key = (descriptor.id.clone(), variant_key);

        let mut entries = self.entries.lock();
        if let Some(template) = entries.get(&key) {
            debug!(component = %key.0, variant = %key.1, "Template cache hit");
            return Ok(Arc::clone(template));
        }

        debug!(component = %key.0, variant = %key.1, "Template cache miss");
        let template = Arc::new(
            self.synthesizer
                .synthesize_or_fallback(descriptor, Some(key.1.as_str())),
        );
        entries.insert(key, Arc::clone(&template));
        Ok(template)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn synthesizer(&self) -> &TemplateSynthesizer<R> {
        &self.synthesizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn catalog() -> ComponentCatalog {
        ComponentCatalog::builtin().unwrap()
    }

    #[test]
    fn test_repeat_lookups_share_one_template() {
        let cache = TemplateCache::new();
        let catalog = catalog();

        let first = cache.get(&catalog, "button", None).unwrap();
        let second = cache.get(&catalog, "button", None).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_default_file_and_explicit_variant_share_a_key() {
        let cache = TemplateCache::new();
        let catalog = catalog();

        let implicit = cache.get(&catalog, "button", None).unwrap();
        let explicit = cache.get(&catalog, "button", Some("button.html")).unwrap();
        assert!(Arc::ptr_eq(&implicit, &explicit));

        let small = cache
            .get(&catalog, "button", Some("button_size_small.html"))
            .unwrap();
        assert!(!Arc::ptr_eq(&implicit, &small));
        assert!(small.html.contains("class=\"krds-btn small\""));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_html_file_is_the_default_key() {
        let mut catalog = ComponentCatalog::new();
        catalog.insert(
            krds_types::ComponentDescriptor::new("button", "krds-btn", "action")
                .with_html_file("primary_button.html"),
        );
        let cache = TemplateCache::new();

        let implicit = cache.get(&catalog, "button", None).unwrap();
        let explicit = cache
            .get(&catalog, "button", Some("primary_button.html"))
            .unwrap();
        assert!(Arc::ptr_eq(&implicit, &explicit));
        assert_eq!(cache.len(), 1);

        let by_id = cache.get(&catalog, "button", Some("button.html")).unwrap();
        assert!(!Arc::ptr_eq(&implicit, &by_id));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_uses_its_synthesizer_resolver() {
        #[derive(Debug)]
        struct LargeResolver;

        impl VariantResolver for LargeResolver {
            fn size<'v>(&self, _: &'v str) -> Option<&'v str> {
                Some("large")
            }
            fn state<'v>(&self, _: &'v str) -> Option<&'v str> {
                None
            }
            fn kind<'v>(&self, _: &'v str) -> Option<&'v str> {
                None
            }
            fn state_attributes(&self, _: &str) -> &'static str {
                ""
            }
        }

        let synthesizer = TemplateSynthesizer::with_resolver(LargeResolver);
        let cache = TemplateCache::with_synthesizer(synthesizer);
        let template = cache
            .get(&catalog(), "button", Some("button_size_small.html"))
            .unwrap();
        assert!(template.html.contains("class=\"krds-btn large\""));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_unknown_component() {
        let cache = TemplateCache::new();
        let error = cache.get(&catalog(), "carousel", None).unwrap_err();
        assert_eq!(error, ComponentError::UnknownComponent("carousel".to_string()));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_malformed_descriptor_is_cached_as_fallback() {
        let mut catalog = ComponentCatalog::new();
        catalog.insert(krds_types::ComponentDescriptor::new("odd", "1odd", "action"));

        let cache = TemplateCache::new();
        let template = cache.get(&catalog, "odd", None).unwrap();
        assert!(template.html.starts_with("<div class=\"1odd\">"));
        assert!(Arc::ptr_eq(&template, &cache.get(&catalog, "odd", None).unwrap()));
    }

    #[test]
    fn test_concurrent_callers_observe_one_arc() {
        let cache = Arc::new(TemplateCache::new());
        let catalog = Arc::new(catalog());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || cache.get(&catalog, "modal", None).unwrap())
            })
            .collect();

        let templates: Vec<Arc<GeneratedTemplate>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        for template in &templates[1..] {
            assert!(Arc::ptr_eq(&templates[0], template));
        }
        assert_eq!(cache.len(), 1);
    }
}
