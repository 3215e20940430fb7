//! Registry construction from a directory of `<code>.json` files.
//!
//! Each file in the messages directory holds one language's dictionary; the
//! file stem is the language code (`en.json` -> `"en"`, `zh-CN.json` ->
//! `"zh-CN"`). Unreadable or structurally invalid files produce per-file
//! warnings instead of aborting the scan.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::dictionary::Dictionary;
use crate::registry::LanguageRegistry;

/// Result of scanning a messages directory.
#[derive(Debug)]
pub struct LoadResult {
    pub registry: LanguageRegistry,
    pub warnings: Vec<String>,
}

/// Parse one language's dictionary file.
pub fn parse_dictionary_file(path: &Path) -> Result<Dictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {:?}", path))?;
    Dictionary::parse(&content)
        .with_context(|| format!("Failed to parse dictionary file: {:?}", path))
}

/// Extracts the language code from a dictionary filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_language_code(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Build a registry from every `<code>.json` file in `messages_dir`.
///
/// A missing or non-directory path is a hard error. Individual files that
/// fail to read or parse are reported in `warnings` and skipped, as is a
/// default language with no dictionary file.
pub fn load_registry(messages_dir: impl AsRef<Path>, default_language: &str) -> Result<LoadResult> {
    let messages_dir = messages_dir.as_ref();

    if !messages_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .linguarc.json 'messagesDir' setting.",
            messages_dir.display()
        );
    }

    if !messages_dir.is_dir() {
        bail!("'{}' is not a directory.", messages_dir.display());
    }

    let mut registry = LanguageRegistry::new(default_language);
    let mut warnings = Vec::new();

    for entry in fs::read_dir(messages_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(code) = extract_language_code(&path)
        {
            match parse_dictionary_file(&path) {
                Ok(dictionary) => registry.register(code, dictionary),
                Err(e) => warnings.push(format!("Failed to load {:?}: {:#}", path, e)),
            }
        }
    }

    if !registry.contains(default_language) {
        warnings.push(format!(
            "Default language '{}' has no dictionary file in '{}'; every lookup \
             will skip its cascade tier.",
            default_language,
            messages_dir.display()
        ));
    }

    Ok(LoadResult { registry, warnings })
}
