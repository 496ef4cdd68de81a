//! Theme preference storage and application.
//!
//! Reads the preference from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and applies a `data-theme` attribute to
//! the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Outside the browser the store reports
//! [`StorageError::Unavailable`] and `apply` is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::controller::{StorageError, ThemeHost};
use crate::state::view::Theme;

pub use crate::site::THEME_STORAGE_KEY as STORAGE_KEY;

/// Attribute on `<html>` that stylesheets key dark mode on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// [`ThemeHost`] backed by the current browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|err| StorageError::Rejected(format!("{err:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl ThemeHost for BrowserHost {
    fn read_stored(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(STORAGE_KEY)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn write_stored(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, value)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no preference store; dropping {value:?}");
            Err(StorageError::Unavailable)
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window()?;
            match window.match_media(DARK_QUERY) {
                Ok(query) => query.map(|mq| mq.matches()),
                Err(err) => {
                    log::warn!("media query {DARK_QUERY} failed: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no window to evaluate {DARK_QUERY}");
            None
        }
    }

    fn apply(&self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            else {
                return;
            };
            if let Err(err) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::warn!("could not set {THEME_ATTRIBUTE}: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no document; {THEME_ATTRIBUTE}={}", theme.as_str());
        }
    }
}
