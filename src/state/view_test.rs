use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_storage_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

#[test]
fn theme_from_stored_reads_known_values() {
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
}

#[test]
fn theme_from_stored_treats_empty_as_absent() {
    assert_eq!(Theme::from_stored(""), None);
}

#[test]
fn theme_from_stored_reads_unknown_values_as_light() {
    assert_eq!(Theme::from_stored("solarized"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("DARK"), Some(Theme::Light));
}

#[test]
fn theme_toggled_is_an_involution() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// ViewState
// =============================================================

#[test]
fn view_state_default_is_dark_with_everything_closed() {
    let state = ViewState::default();
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.menu_open);
    assert!(!state.resume_open);
}

#[test]
fn toggle_menu_flips_and_close_menu_clears() {
    let mut state = ViewState::default();
    assert!(state.toggle_menu());
    assert!(!state.toggle_menu());
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
}

#[test]
fn resume_open_and_close_are_idempotent() {
    let mut state = ViewState::default();
    state.open_resume();
    state.open_resume();
    assert!(state.resume_open);
    state.close_resume();
    state.close_resume();
    assert!(!state.resume_open);
}

#[test]
fn flags_are_independent() {
    let mut state = ViewState::default();
    state.toggle_menu();
    state.open_resume();
    state.toggle_theme();
    assert_eq!(state, ViewState { theme: Theme::Light, menu_open: true, resume_open: true });
    state.close_resume();
    assert!(state.menu_open);
    assert_eq!(state.theme, Theme::Light);
}
