//! Configuration file loading and parsing for the `lingua` CLI.
//!
//! The config lives in `.linguarc.json` at the project root. Every field has
//! a default, so an absent file is equivalent to an empty one; command-line
//! flags override whatever the file says.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".linguarc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one `<code>.json` dictionary per language.
    #[serde(default = "default_messages_dir")]
    pub messages_dir: String,
    /// The terminal-fallback language; its dictionary should be complete.
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_messages_dir() -> String {
    "./messages".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_dir: default_messages_dir(),
            default_language: default_language(),
        }
    }
}

impl Config {
    /// Load `.linguarc.json` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

/// Pretty-printed default config, written by `lingua init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json + "\n")
}
