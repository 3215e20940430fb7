//! Host-facing translation capability for an editor instance.
//!
//! The host editor stores a [`TranslationExtension`] as a typed optional
//! field (`Option<TranslationExtension>`); call sites branch on its presence
//! rather than probing at runtime whether an instance "has" translation
//! support. The extension owns the registry and the notifier and wires the
//! resolver between them.

use crate::dictionary::Dictionary;
use crate::notify::{LanguageChanged, LanguageNotifier, LanguageSwitch, ObserverId};
use crate::registry::LanguageRegistry;
use crate::resolve::{CoreLabels, resolve};

/// Runtime-switchable translation attached to one editor instance.
///
/// Owns the [`LanguageRegistry`] for the editor's whole lifetime and the
/// active-language state; lives exactly as long as the editor it extends.
pub struct TranslationExtension {
    registry: LanguageRegistry,
    notifier: LanguageNotifier,
    core_labels: Option<Box<dyn CoreLabels>>,
}

impl TranslationExtension {
    /// Create the extension over a prepared registry.
    ///
    /// `initial_language` becomes the active language; it does not have to
    /// exist in the registry (a host may construct the extension before all
    /// dictionaries are registered).
    pub fn new(registry: LanguageRegistry, initial_language: impl Into<String>) -> Self {
        Self {
            registry,
            notifier: LanguageNotifier::new(initial_language),
            core_labels: None,
        }
    }

    /// Attach the editor's built-in labels as the cascade's fourth tier.
    pub fn with_core_labels(mut self, core_labels: impl CoreLabels + 'static) -> Self {
        self.core_labels = Some(Box::new(core_labels));
        self
    }

    /// Resolve `key` for the active language through the full cascade.
    /// Never fails: a total miss returns the key itself.
    pub fn get_label_text(&self, key: &str) -> String {
        resolve(
            &self.registry,
            self.notifier.active_language(),
            key,
            self.core_labels.as_deref(),
        )
    }

    /// Switch the active language, notifying every subscriber on success.
    pub fn set_language(&mut self, code: &str) -> LanguageSwitch {
        self.notifier.set_language(&self.registry, code)
    }

    /// The currently active language code.
    pub fn language(&self) -> &str {
        self.notifier.active_language()
    }

    /// Snapshot of the available language codes at time of read.
    pub fn languages(&self) -> Vec<String> {
        self.registry.languages()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&LanguageChanged) + 'static) -> ObserverId {
        self.notifier.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Register another language after construction. The available-language
    /// snapshot reflects it immediately.
    pub fn register_language(&mut self, code: impl Into<String>, dictionary: Dictionary) {
        self.registry.register(code, dictionary);
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }
}
