// ABOUTME: Converts the flat token catalog into a Style Dictionary shaped tree
// ABOUTME: Nested objects keyed by name segment, terminating in { "value": ... } leaves

use serde_json::{Map, Value};

use crate::catalog::TokenCatalog;

const VALUE_KEY: &str = "value";

/// Nested tree of every token, namespace segment stripped.
///
/// Collisions resolve last-write-wins in catalog order: a token landing on an
/// existing node replaces it with a fresh leaf. A leaf that a later token
/// walks through keeps its `value` alongside the new children.
pub fn to_tree(tokens: &TokenCatalog) -> Value {
    let mut root = Map::new();

    for (name, value) in tokens.iter() {
        let path: Vec<&str> = name.split('-').skip(1).collect();
        let Some((last, parents)) = path.split_last() else {
            continue;
        };

        let mut node = &mut root;
        for segment in parents {
            let child = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            let Value::Object(map) = child else {
                unreachable!("child was just made an object");
            };
            node = map;
        }

        let mut leaf = Map::new();
        leaf.insert(VALUE_KEY.to_string(), Value::String(value.to_string()));
        node.insert(last.to_string(), Value::Object(leaf));
    }

    Value::Object(root)
}

/// Pretty printed JSON of [`to_tree`]
pub fn to_json(tokens: &TokenCatalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&to_tree(tokens))
}
