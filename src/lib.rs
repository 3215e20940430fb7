//! Lingua - runtime-switchable translation for rich-text editor components
//!
//! Lingua resolves dotted key paths (e.g. `"editor.blockOptions.delete"`) to
//! human-readable strings for the currently active language, with a
//! deterministic fallback cascade when a translation is missing, and notifies
//! registered observers whenever the active language changes so dependent UI
//! can re-render.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`lingua check` dictionary linting)
//! - `config`: Configuration file loading and parsing
//! - `coverage`: Dictionary completeness diagnostics
//! - `dictionary`: Translation dictionary tree and key-path walks
//! - `extension`: Host-facing translation capability for an editor instance
//! - `loader`: Registry construction from a directory of `<code>.json` files
//! - `notify`: Active-language state and the change notification channel
//! - `registry`: Language code to dictionary mapping with a default language
//! - `resolve`: The ordered fallback cascade

pub mod cli;
pub mod config;
pub mod coverage;
pub mod dictionary;
pub mod extension;
pub mod loader;
pub mod notify;
pub mod registry;
pub mod resolve;

pub use dictionary::Dictionary;
pub use extension::TranslationExtension;
pub use notify::{LanguageChanged, LanguageNotifier, LanguageSwitch, ObserverId};
pub use registry::LanguageRegistry;
pub use resolve::{CoreLabels, resolve};
