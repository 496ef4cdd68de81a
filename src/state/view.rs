//! Transient view state: theme, mobile menu, and résumé preview.
//!
//! DESIGN
//! ======
//! Transitions here are pure. Side effects (persistence, document theme,
//! key listeners) belong to `crate::controller`, which wraps this record.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Binary presentation mode, persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Interpret a stored preference value.
    ///
    /// An empty value counts as no preference. Any non-empty value other than
    /// `"dark"` reads as light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "dark" => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// UI flags that are independent of the profile record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    /// Mobile navigation drawer. Never persisted.
    pub menu_open: bool,
    /// Résumé preview overlay. Never persisted.
    pub resume_open: bool,
}

impl ViewState {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn open_resume(&mut self) {
        self.resume_open = true;
    }

    pub fn close_resume(&mut self) {
        self.resume_open = false;
    }
}

/// User interactions the rendering layer hands to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    /// An in-page navigation link was selected; carries the anchor target.
    Navigate(String),
    OpenResumePreview,
    CloseResumePreview,
    /// A key was pressed while a key listener was attached.
    Key(String),
}
