//! Translation dictionary: a tree of string keys terminating in string leaves.
//!
//! A dictionary holds one language's UI strings. Partial dictionaries are
//! valid and expected; a missing leaf is not an error, it is resolved through
//! the fallback cascade in [`crate::resolve`].

use anyhow::{Result, bail};
use serde_json::Value;

/// One language's complete or partial set of UI strings.
///
/// The tree is an arbitrary nesting of string-keyed objects terminating in
/// string leaves, not a fixed schema. Namespaces (editor chrome, one per
/// block type, one per tool) are a convention of the data, invisible to the
/// lookup code.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    /// Wrap a parsed JSON value as a dictionary.
    ///
    /// The root must be a JSON object; anything else is a host integration
    /// bug and fails hard at setup time. Interior values that are neither
    /// objects nor strings are accepted here and simply never match a walk.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            bail!(
                "dictionary root must be a JSON object, got {}",
                value_kind(&value)
            );
        }
        Ok(Self { root: value })
    }

    /// Parse a dictionary from JSON text.
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// A dictionary with no entries. Every lookup misses.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(serde_json::Map::new()),
        }
    }

    /// Walk the tree along the dot-separated segments of `key`.
    ///
    /// Descends by exact, case-sensitive segment match. Returns the leaf
    /// string if every segment matches an object child and the final node is
    /// a string. A node that is not an object where a descent is expected, or
    /// a terminal node that is not a string, is a miss - no partial or object
    /// results are ever returned.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for segment in key.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }

    /// Enumerate the dotted key paths of every string leaf.
    ///
    /// Order follows the document order of the underlying JSON. Used by the
    /// coverage diagnostics to compare languages against the default.
    pub fn flatten(&self) -> Vec<String> {
        let mut keys = Vec::new();
        flatten_value(&self.root, String::new(), &mut keys);
        keys
    }
}

fn flatten_value(value: &Value, prefix: String, keys: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_value(val, new_prefix, keys);
            }
        }
        Value::String(_) => keys.push(prefix),
        _ => {}
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn dict(value: Value) -> Dictionary {
        Dictionary::from_value(value).unwrap()
    }

    #[test]
    fn from_value_rejects_non_object_root() {
        assert!(Dictionary::from_value(json!("Delete")).is_err());
        assert!(Dictionary::from_value(json!(["a", "b"])).is_err());
        assert!(Dictionary::from_value(json!(null)).is_err());
        assert!(Dictionary::from_value(json!(42)).is_err());
    }

    #[test]
    fn from_value_error_names_the_kind() {
        let err = Dictionary::from_value(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn lookup_nested_leaf() {
        let d = dict(json!({"editor": {"blockOptions": {"delete": "Delete"}}}));
        assert_eq!(d.lookup("editor.blockOptions.delete"), Some("Delete"));
    }

    #[test]
    fn lookup_root_level_leaf() {
        let d = dict(json!({"title": "Hello"}));
        assert_eq!(d.lookup("title"), Some("Hello"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let d = dict(json!({"Editor": {"save": "Save"}}));
        assert_eq!(d.lookup("editor.save"), None);
        assert_eq!(d.lookup("Editor.Save"), None);
        assert_eq!(d.lookup("Editor.save"), Some("Save"));
    }

    #[test]
    fn lookup_stops_at_interior_object() {
        // Path terminates on a subtree, not a leaf string.
        let d = dict(json!({"editor": {"blockOptions": {"delete": "Delete"}}}));
        assert_eq!(d.lookup("editor.blockOptions"), None);
    }

    #[test]
    fn lookup_cannot_descend_through_leaf() {
        let d = dict(json!({"editor": "oops"}));
        assert_eq!(d.lookup("editor.save"), None);
    }

    #[test]
    fn lookup_non_string_leaf_misses() {
        let d = dict(json!({"editor": {"count": 3, "flag": true}}));
        assert_eq!(d.lookup("editor.count"), None);
        assert_eq!(d.lookup("editor.flag"), None);
    }

    #[test]
    fn lookup_empty_segment_misses() {
        let d = dict(json!({"a": {"b": "c"}}));
        assert_eq!(d.lookup("a..b"), None);
    }

    #[test]
    fn empty_dictionary_always_misses() {
        let d = Dictionary::empty();
        assert_eq!(d.lookup("anything"), None);
        assert!(d.flatten().is_empty());
    }

    #[test]
    fn flatten_lists_all_string_leaves() {
        let d = dict(json!({
            "editor": {
                "blockOptions": {"delete": "Delete", "duplicate": "Duplicate"},
                "save": "Save"
            },
            "count": 3
        }));
        assert_eq!(
            d.flatten(),
            vec![
                "editor.blockOptions.delete".to_string(),
                "editor.blockOptions.duplicate".to_string(),
                "editor.save".to_string(),
            ]
        );
    }

    #[test]
    fn parse_round_trips_json_text() {
        let d = Dictionary::parse(r#"{"plugins": {"Image": {"labels": {"altText": "Alt"}}}}"#)
            .unwrap();
        assert_eq!(d.lookup("plugins.Image.labels.altText"), Some("Alt"));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(Dictionary::parse("{ not json }").is_err());
    }
}
