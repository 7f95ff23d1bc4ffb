use super::*;

#[test]
fn page_state_default_is_quiet() {
    let state = PageState::default();
    assert!(!state.keyboard_mode);
    assert!(!state.nav.is_open());
    assert_eq!(state.accordion.open_panel(), None);
    assert!(!state.modals.scroll_locked());
}

#[test]
fn first_tab_enters_keyboard_mode() {
    let mut state = PageState::default();
    assert!(state.note_key("Tab"));
    assert!(state.keyboard_mode);
}

#[test]
fn keyboard_mode_is_reported_once() {
    let mut state = PageState::default();
    assert!(state.note_key("Tab"));
    assert!(!state.note_key("Tab"));
    assert!(state.keyboard_mode);
}

#[test]
fn other_keys_are_ignored() {
    let mut state = PageState::default();
    assert!(!state.note_key("Enter"));
    assert!(!state.note_key("tab"));
    assert!(!state.keyboard_mode);
}
