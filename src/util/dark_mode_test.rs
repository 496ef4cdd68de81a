#![cfg(not(feature = "csr"))]

use super::*;
use crate::controller::resolve_theme;

#[test]
fn storage_is_unavailable_outside_the_browser() {
    assert_eq!(BrowserHost.read_stored(), Err(StorageError::Unavailable));
    assert_eq!(BrowserHost.write_stored("dark"), Err(StorageError::Unavailable));
}

#[test]
fn no_color_scheme_signal_outside_the_browser() {
    assert_eq!(BrowserHost.prefers_dark(), None);
}

#[test]
fn native_host_resolves_to_dark() {
    assert_eq!(resolve_theme(BrowserHost.read_stored(), BrowserHost.prefers_dark()), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    BrowserHost.apply(Theme::Dark);
    BrowserHost.apply(Theme::Light);
}

#[test]
fn storage_key_is_theme() {
    assert_eq!(STORAGE_KEY, "theme");
}
