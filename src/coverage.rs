//! Dictionary completeness diagnostics.
//!
//! The default language is the terminal fallback before the raw key, so its
//! dictionary should cover every key the host looks up. Resolution never
//! enforces this; these checks surface the gaps so they can be fixed in the
//! dictionaries instead of appearing as raw keys in a rendered UI.

use std::fmt;

use crate::registry::LanguageRegistry;

/// Which completeness invariant a gap violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GapKind {
    /// Key exists in the default language but not in this one; lookups in
    /// this language fall back to the default.
    MissingKey,
    /// Key exists in this language but not in the default; it resolves only
    /// while this language is active.
    OrphanKey,
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapKind::MissingKey => write!(f, "missing-key"),
            GapKind::OrphanKey => write!(f, "orphan-key"),
        }
    }
}

/// One key absent from one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    pub language: String,
    pub key: String,
    pub kind: GapKind,
}

/// Find keys present in the default dictionary but missing from another
/// language. Results are sorted by language, then key.
pub fn missing_keys(registry: &LanguageRegistry) -> Vec<CoverageGap> {
    let default_language = registry.default_language();
    let Some(default_dict) = registry.dictionary(default_language) else {
        return Vec::new();
    };

    let default_keys = default_dict.flatten();
    let mut gaps = Vec::new();

    for language in registry.languages() {
        if language == default_language {
            continue;
        }
        // Registered languages always have a dictionary.
        let Some(dict) = registry.dictionary(&language) else {
            continue;
        };
        for key in &default_keys {
            if dict.lookup(key).is_none() {
                gaps.push(CoverageGap {
                    language: language.clone(),
                    key: key.clone(),
                    kind: GapKind::MissingKey,
                });
            }
        }
    }

    sort_gaps(&mut gaps);
    gaps
}

/// Find keys present in a non-default language but absent from the default
/// dictionary. Results are sorted by language, then key.
pub fn orphan_keys(registry: &LanguageRegistry) -> Vec<CoverageGap> {
    let default_language = registry.default_language();
    let default_dict = registry.dictionary(default_language);
    let mut gaps = Vec::new();

    for language in registry.languages() {
        if language == default_language {
            continue;
        }
        let Some(dict) = registry.dictionary(&language) else {
            continue;
        };
        for key in dict.flatten() {
            let covered = default_dict.is_some_and(|d| d.lookup(&key).is_some());
            if !covered {
                gaps.push(CoverageGap {
                    language: language.clone(),
                    key,
                    kind: GapKind::OrphanKey,
                });
            }
        }
    }

    sort_gaps(&mut gaps);
    gaps
}

/// Run both checks. Missing keys come first, then orphans, each sorted.
pub fn check_coverage(registry: &LanguageRegistry) -> Vec<CoverageGap> {
    let mut gaps = missing_keys(registry);
    gaps.extend(orphan_keys(registry));
    gaps
}

fn sort_gaps(gaps: &mut [CoverageGap]) {
    gaps.sort_by(|a, b| {
        a.language
            .cmp(&b.language)
            .then_with(|| a.key.cmp(&b.key))
    });
}
