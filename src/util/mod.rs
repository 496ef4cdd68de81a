//! Browser glue behind the controller seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here and compiles only under the
//! `csr` feature. Native builds get inert fallbacks so the rest of the crate
//! stays testable without a browser.

pub mod cancel_key;
pub mod dark_mode;
