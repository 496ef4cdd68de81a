//! # folio
//!
//! Leptos + WASM single-page portfolio site. Renders the static record from
//! the `profile` crate and manages the handful of transient UI flags (theme,
//! mobile menu, résumé preview) through [`controller::ViewController`].
//!
//! Browser-only code is gated on the `csr` feature; everything else builds and
//! tests natively.

pub mod app;
pub mod components;
pub mod controller;
pub mod page_model;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// Install logging, load the profile, and mount the app on `<body>`.
///
/// A profile configuration error is logged and nothing is mounted.
#[cfg(feature = "csr")]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("console logger unavailable: {err}");
    }

    let profile = match profile::profile() {
        Ok(profile) => profile,
        Err(err) => {
            log::error!("profile configuration error: {err}");
            return;
        }
    };
    for dup in profile.duplicate_keys() {
        log::warn!("duplicate key {:?} in {}; list rendering may misbehave", dup.key, dup.scope);
    }

    log::info!("mounting portfolio for {}", profile.name);
    leptos::mount::mount_to_body(move || view! { <app::App profile/> });
}
