use super::*;

#[test]
fn ui_state_default_sidebar_closed() {
    assert!(!UiState::default().sidebar_open);
}

#[test]
fn toggle_sidebar_flips_open_state() {
    let mut ui = UiState::default();
    ui.toggle_sidebar();
    assert!(ui.sidebar_open);
    ui.toggle_sidebar();
    assert!(!ui.sidebar_open);
}

#[test]
fn close_sidebar_is_idempotent() {
    let mut ui = UiState { sidebar_open: true };
    ui.close_sidebar();
    ui.close_sidebar();
    assert!(!ui.sidebar_open);
}
