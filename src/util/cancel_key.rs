//! Window-level key listener used while the résumé preview is open.
//!
//! The listener forwards every `keydown` to the controller as
//! [`Action::Key`]; the controller decides whether the key cancels. Each
//! subscription returns a [`KeyListener`] guard that removes the listener when
//! dropped, so the controller's guard slot is the only owner.

#[cfg(test)]
#[path = "cancel_key_test.rs"]
mod cancel_key_test;

use leptos::prelude::*;

use crate::controller::CancelKeys;
use crate::state::view::Action;

/// Attached listener. Dropping it detaches the listener.
pub struct KeyListener {
    #[cfg(feature = "csr")]
    remove: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl KeyListener {
    /// Whether this guard holds a live browser listener.
    #[cfg(test)]
    pub fn is_live(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.remove.is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        #[cfg(feature = "csr")]
        {
            if let Some(remove) = self.remove.take() {
                remove();
                log::debug!("cancel key listener detached");
            }
        }
    }
}

/// [`CancelKeys`] source backed by the browser window.
pub struct WindowKeys {
    #[cfg(feature = "csr")]
    dispatch: Callback<Action>,
}

impl WindowKeys {
    #[cfg(feature = "csr")]
    pub fn new(dispatch: Callback<Action>) -> Self {
        Self { dispatch }
    }

    #[cfg(not(feature = "csr"))]
    pub fn new(_dispatch: Callback<Action>) -> Self {
        Self {}
    }
}

impl CancelKeys for WindowKeys {
    type Handle = KeyListener;

    fn subscribe(&mut self) -> KeyListener {
        #[cfg(feature = "csr")]
        {
            let dispatch = self.dispatch;
            let handle = window_event_listener(leptos::ev::keydown, move |ev| {
                dispatch.run(Action::Key(ev.key()));
            });
            log::debug!("cancel key listener attached");
            KeyListener { remove: Some(Box::new(move || handle.remove())) }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no window; cancel key listener is inert");
            KeyListener {}
        }
    }
}
