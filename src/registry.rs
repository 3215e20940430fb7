//! Language registry: maps language codes to dictionaries.
//!
//! One code is designated the default language. Its dictionary is the
//! terminal fallback before returning the raw key, so it should cover every
//! key the host ever looks up - the registry does not enforce this, but the
//! `lingua check` diagnostics surface the gaps.

use std::collections::HashMap;

use crate::dictionary::Dictionary;

/// Mapping from language code (e.g. `"en"`, `"zh-CN"`) to that language's
/// dictionary. Codes are opaque identifiers; no format is enforced.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    dictionaries: HashMap<String, Dictionary>,
    default_language: String,
}

impl LanguageRegistry {
    /// Create an empty registry with the given default language.
    ///
    /// The default language does not need a dictionary yet; until one is
    /// registered, its tier of the cascade simply never matches.
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            dictionaries: HashMap::new(),
            default_language: default_language.into(),
        }
    }

    /// Register (or replace) a language's dictionary.
    ///
    /// Only the owning editor's setup path should call this; readers always
    /// see the live membership.
    pub fn register(&mut self, code: impl Into<String>, dictionary: Dictionary) {
        self.dictionaries.insert(code.into(), dictionary);
    }

    pub fn dictionary(&self, code: &str) -> Option<&Dictionary> {
        self.dictionaries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.dictionaries.contains_key(code)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Snapshot of the available language codes, sorted for deterministic
    /// output.
    pub fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.dictionaries.keys().cloned().collect();
        codes.sort();
        codes
    }
}
