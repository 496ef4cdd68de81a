//! View-state controller: theme resolution, persistence, and the résumé
//! preview's cancel-key listener.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rendering layer dispatches [`Action`]s here and reads back a
//! [`ViewState`]. Environment access goes through two seams so the controller
//! runs unchanged in the browser and in native tests:
//!
//! - [`ThemeHost`]: preference store, OS color-scheme signal, document theme.
//! - [`CancelKeys`]: attaches a key listener and hands back a guard that
//!   detaches it on drop.
//!
//! INVARIANTS
//! ==========
//! - The theme is resolved and applied at most once by initialization.
//! - A cancel-key guard is held iff the résumé preview is open. The guard is
//!   reconciled after every transition and released when the controller drops.
//! - Storage failures are logged and never propagate.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::state::view::{Action, Theme, ViewState};

/// Key name that dismisses the résumé preview.
pub const CANCEL_KEY: &str = "Escape";

/// Failure reported by a preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No store exists in this environment.
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The store exists but refused the operation.
    #[error("preference storage rejected the operation: {0}")]
    Rejected(String),
}

/// Environment the theme is read from and applied to.
pub trait ThemeHost {
    /// Read the persisted preference, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be read.
    fn read_stored(&self) -> Result<Option<String>, StorageError>;

    /// Persist the preference.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be written.
    fn write_stored(&self, value: &str) -> Result<(), StorageError>;

    /// Whether the OS prefers a dark color scheme, or `None` when unknown.
    fn prefers_dark(&self) -> Option<bool>;

    /// Set the global dark-mode flag consumed by styling.
    fn apply(&self, theme: Theme);
}

/// Source of cancel-key listeners.
pub trait CancelKeys {
    /// Guard for one attached listener. Dropping it detaches the listener.
    type Handle;

    fn subscribe(&mut self) -> Self::Handle;
}

/// Resolve the startup theme: stored preference, then OS signal, then dark.
#[must_use]
pub fn resolve_theme(stored: Result<Option<String>, StorageError>, prefers_dark: Option<bool>) -> Theme {
    let stored = match stored {
        Ok(value) => value.as_deref().and_then(Theme::from_stored),
        Err(err) => {
            log::warn!("theme preference unreadable, using system preference: {err}");
            None
        }
    };
    stored.unwrap_or_else(|| match prefers_dark {
        Some(false) => Theme::Light,
        Some(true) | None => Theme::Dark,
    })
}

/// Owns [`ViewState`] and every side effect attached to it.
pub struct ViewController<H, K: CancelKeys> {
    state: ViewState,
    host: H,
    keys: K,
    cancel: Option<K::Handle>,
    initialized: bool,
}

impl<H: ThemeHost, K: CancelKeys> ViewController<H, K> {
    pub fn new(host: H, keys: K) -> Self {
        Self { state: ViewState::default(), host, keys, cancel: None, initialized: false }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[cfg(test)]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether a cancel-key listener is currently held.
    #[must_use]
    pub fn cancel_listener_attached(&self) -> bool {
        self.cancel.is_some()
    }

    /// Resolve, apply, and persist the startup theme.
    ///
    /// Runs once. Later calls return the current theme untouched.
    pub fn initialize_theme(&mut self) -> Theme {
        if self.initialized {
            return self.state.theme;
        }
        self.initialized = true;
        let theme = resolve_theme(self.host.read_stored(), self.host.prefers_dark());
        self.state.theme = theme;
        self.host.apply(theme);
        self.persist(theme);
        log::debug!("theme initialized: {}", theme.as_str());
        theme
    }

    /// Flip the theme, apply it, and persist it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.initialize_theme();
        let theme = self.state.toggle_theme();
        self.host.apply(theme);
        self.persist(theme);
        theme
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.state.toggle_menu()
    }

    pub fn close_menu(&mut self) {
        self.state.close_menu();
    }

    /// Record an in-page navigation selection. Always leaves the menu closed.
    pub fn navigate(&mut self, anchor: &str) {
        log::trace!("navigate to {anchor}");
        self.close_menu();
    }

    pub fn open_resume_preview(&mut self) {
        self.state.open_resume();
        self.sync_cancel_listener();
    }

    pub fn close_resume_preview(&mut self) {
        self.state.close_resume();
        self.sync_cancel_listener();
    }

    /// Handle a key press. Returns `true` when the key closed the preview.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != CANCEL_KEY || !self.state.resume_open {
            return false;
        }
        self.close_resume_preview();
        true
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ToggleTheme => {
                self.toggle_theme();
            }
            Action::ToggleMenu => {
                self.toggle_menu();
            }
            Action::CloseMenu => self.close_menu(),
            Action::Navigate(anchor) => self.navigate(&anchor),
            Action::OpenResumePreview => self.open_resume_preview(),
            Action::CloseResumePreview => self.close_resume_preview(),
            Action::Key(key) => {
                self.handle_key(&key);
            }
        }
    }

    fn sync_cancel_listener(&mut self) {
        match (self.state.resume_open, self.cancel.is_some()) {
            (true, false) => self.cancel = Some(self.keys.subscribe()),
            (false, true) => self.cancel = None,
            _ => {}
        }
    }

    fn persist(&self, theme: Theme) {
        if let Err(err) = self.host.write_stored(theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
    }
}
