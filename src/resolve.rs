//! Key-path resolution through the ordered fallback cascade.
//!
//! The cascade is fixed: active language, then the default language, then
//! the host editor's built-in labels, then the key itself. Returning the key
//! on a total miss is deliberate - a missing translation shows up as the key
//! literal in the rendered UI instead of a silently blank label.

use crate::registry::LanguageRegistry;

/// Optional fourth-tier lookup supplied by the host editor.
///
/// The host stores this capability as a typed optional value; when it is
/// absent, that tier of the cascade is skipped with no error. What content
/// the editor exposes here is entirely its own concern.
pub trait CoreLabels {
    /// Returns the editor's built-in text for `key`, if it has one.
    fn core_label_text(&self, key: &str) -> Option<String>;
}

/// Resolve a dotted key path to the best available string.
///
/// Pure read over the registry; no caching, every call re-walks the
/// dictionaries (they are small, bounded by UI string count).
///
/// # Arguments
/// * `registry` - per-language dictionaries plus the default language code
/// * `active_language` - the language to try first
/// * `key` - dot-separated path, e.g. `"editor.blockOptions.delete"`
/// * `core_labels` - the host's built-in labels, if it exposes any
pub fn resolve(
    registry: &LanguageRegistry,
    active_language: &str,
    key: &str,
    core_labels: Option<&dyn CoreLabels>,
) -> String {
    // Defensive short-circuit, not a cascade outcome.
    if key.is_empty() {
        return String::new();
    }

    if let Some(dict) = registry.dictionary(active_language)
        && let Some(text) = dict.lookup(key)
    {
        return text.to_string();
    }

    let default_language = registry.default_language();
    if active_language != default_language
        && let Some(dict) = registry.dictionary(default_language)
        && let Some(text) = dict.lookup(key)
    {
        return text.to_string();
    }

    if let Some(core) = core_labels
        && let Some(text) = core.core_label_text(key)
    {
        return text;
    }

    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> LanguageRegistry {
        let mut registry = LanguageRegistry::new("en");
        registry.register(
            "en",
            Dictionary::from_value(json!({
                "editor": {
                    "blockOptions": {"delete": "Delete", "duplicate": "Duplicate"}
                }
            }))
            .unwrap(),
        );
        registry.register(
            "es",
            Dictionary::from_value(json!({
                "editor": {
                    "blockOptions": {"delete": "Eliminar"}
                }
            }))
            .unwrap(),
        );
        registry
    }

    struct FixedCoreLabels;

    impl CoreLabels for FixedCoreLabels {
        fn core_label_text(&self, key: &str) -> Option<String> {
            (key == "editor.core.only").then(|| "Built-in".to_string())
        }
    }

    #[test]
    fn active_language_takes_precedence() {
        let r = registry();
        assert_eq!(
            resolve(&r, "es", "editor.blockOptions.delete", None),
            "Eliminar"
        );
    }

    #[test]
    fn missing_key_cascades_to_default() {
        let r = registry();
        assert_eq!(
            resolve(&r, "es", "editor.blockOptions.duplicate", None),
            "Duplicate"
        );
    }

    #[test]
    fn unknown_active_language_cascades_to_default() {
        let r = registry();
        assert_eq!(
            resolve(&r, "fr", "editor.blockOptions.delete", None),
            "Delete"
        );
    }

    #[test]
    fn total_miss_returns_key_verbatim() {
        let r = registry();
        assert_eq!(
            resolve(&r, "es", " editor.BlockOptions.Delete ", None),
            " editor.BlockOptions.Delete "
        );
    }

    #[test]
    fn empty_key_returns_empty_string() {
        let r = registry();
        assert_eq!(resolve(&r, "es", "", None), "");
    }

    #[test]
    fn interior_node_counts_as_miss() {
        let r = registry();
        // "editor.blockOptions" exists in both languages but is a subtree.
        assert_eq!(
            resolve(&r, "es", "editor.blockOptions", None),
            "editor.blockOptions"
        );
    }

    #[test]
    fn core_labels_consulted_after_both_dictionaries() {
        let r = registry();
        let core = FixedCoreLabels;
        assert_eq!(
            resolve(&r, "es", "editor.core.only", Some(&core)),
            "Built-in"
        );
        // Dictionary hits win over the core tier.
        assert_eq!(
            resolve(&r, "es", "editor.blockOptions.delete", Some(&core)),
            "Eliminar"
        );
    }

    #[test]
    fn core_labels_miss_falls_through_to_key() {
        let r = registry();
        let core = FixedCoreLabels;
        assert_eq!(resolve(&r, "es", "nope", Some(&core)), "nope");
    }

    #[test]
    fn active_equal_to_default_walks_once() {
        let r = registry();
        assert_eq!(
            resolve(&r, "en", "editor.blockOptions.delete", None),
            "Delete"
        );
        assert_eq!(resolve(&r, "en", "missing.key", None), "missing.key");
    }
}
