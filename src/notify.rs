//! Active-language state and the change notification channel.
//!
//! The notifier owns the single mutable piece of state in the engine: which
//! language is active. Everything else is a pure read. Observers are invoked
//! synchronously, in registration order, on the same call that changed the
//! language; there is no batching, debouncing, or async dispatch.

use std::fmt;

use crate::registry::LanguageRegistry;

/// Payload delivered to every observer on a language change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChanged {
    /// The newly active language code.
    pub language: String,
    /// The code that was active before the change. Equal to `language` when
    /// the host re-set the current language to force a refresh.
    pub previous_language: String,
}

/// Outcome of a [`LanguageNotifier::set_language`] call.
///
/// A rejection is not an error: an unknown code leaves the active language
/// untouched and notifies no one, so a UI control bound to a stale language
/// list cannot corrupt editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSwitch {
    /// The active language was set and all observers were notified.
    Changed(LanguageChanged),
    /// The requested code is not in the registry; nothing happened.
    Rejected {
        requested: String,
        available: Vec<String>,
    },
}

impl LanguageSwitch {
    pub fn is_changed(&self) -> bool {
        matches!(self, LanguageSwitch::Changed(_))
    }
}

impl fmt::Display for LanguageSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageSwitch::Changed(change) => write!(
                f,
                "language changed from \"{}\" to \"{}\"",
                change.previous_language, change.language
            ),
            LanguageSwitch::Rejected {
                requested,
                available,
            } => write!(
                f,
                "unknown language \"{}\" (available: {})",
                requested,
                available.join(", ")
            ),
        }
    }
}

/// Handle returned by [`LanguageNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Handler = Box<dyn FnMut(&LanguageChanged)>;

/// Tracks the active language and fans change notifications out to
/// registered observers.
///
/// Single-threaded and synchronous throughout. Reentrancy is rejected at
/// compile time: [`set_language`](Self::set_language) holds `&mut self` for
/// the duration of the notify loop, so a handler cannot call back into the
/// notifier it is being invoked from.
pub struct LanguageNotifier {
    active: String,
    observers: Vec<(ObserverId, Handler)>,
    next_id: u64,
}

impl LanguageNotifier {
    /// Create a notifier with the given initial language.
    ///
    /// The initial code need not exist in the registry yet; the cascade
    /// simply skips its tier until a dictionary is registered for it.
    pub fn new(initial_language: impl Into<String>) -> Self {
        Self {
            active: initial_language.into(),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn active_language(&self) -> &str {
        &self.active
    }

    /// Register an observer. It receives every subsequent notification until
    /// it is unsubscribed.
    pub fn subscribe(&mut self, handler: impl FnMut(&LanguageChanged) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(handler)));
        id
    }

    /// Remove an observer. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Switch the active language.
    ///
    /// If `code` is not in the registry, state is unchanged, no observer is
    /// invoked, and the returned rejection names the requested code and the
    /// currently available codes.
    ///
    /// On success every observer is invoked synchronously in registration
    /// order with the same payload. Setting the already-active code still
    /// runs the full notify cycle (with `previous_language == language`) so
    /// hosts can force a refresh.
    pub fn set_language(&mut self, registry: &LanguageRegistry, code: &str) -> LanguageSwitch {
        if !registry.contains(code) {
            return LanguageSwitch::Rejected {
                requested: code.to_string(),
                available: registry.languages(),
            };
        }

        let change = LanguageChanged {
            language: code.to_string(),
            previous_language: std::mem::replace(&mut self.active, code.to_string()),
        };
        for (_, handler) in &mut self.observers {
            handler(&change);
        }
        LanguageSwitch::Changed(change)
    }
}
