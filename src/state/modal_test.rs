use super::*;

fn registry() -> ModalState {
    let mut state = ModalState::default();
    state.register(Some("project-1"), false);
    state.register(Some("project-2"), false);
    state
}

#[test]
fn register_returns_positions_in_order() {
    let mut state = ModalState::default();
    assert_eq!(state.register(Some("a"), false), 0);
    assert_eq!(state.register(None, false), 1);
    assert_eq!(state.modals().len(), 2);
}

#[test]
fn open_known_modal_locks_scroll() {
    let mut state = registry();
    assert_eq!(state.open("project-2"), ModalLookup::Found(1));
    assert!(state.is_open("project-2"));
    assert!(state.scroll_locked());
}

#[test]
fn open_unknown_modal_mutates_nothing() {
    let mut state = registry();
    let before = state.clone();
    assert_eq!(state.open("nope"), ModalLookup::NotFound);
    assert_eq!(state, before);
}

#[test]
fn close_unlocks_scroll() {
    let mut state = registry();
    state.open("project-1");
    assert_eq!(state.close_at(0), ModalLookup::Found(0));
    assert!(!state.is_open("project-1"));
    assert!(!state.scroll_locked());
}

#[test]
fn closing_one_of_two_open_modals_still_unlocks_scroll() {
    let mut state = registry();
    state.open("project-1");
    state.open("project-2");
    state.close_at(0);
    assert!(state.is_open("project-2"));
    assert!(!state.scroll_locked());
}

#[test]
fn visibility_and_lock_move_together_on_single_modal() {
    let mut state = registry();
    for _ in 0..3 {
        state.open("project-2");
        assert_eq!(state.is_open_at(1), state.scroll_locked());
        state.close_at(1);
        assert_eq!(state.is_open_at(1), state.scroll_locked());
    }
}

// =============================================================
// Modals without an id
// =============================================================

#[test]
fn modal_without_id_shipped_open_can_be_closed() {
    let mut state = ModalState::default();
    let index = state.register(None, true);
    assert!(state.is_open_at(index));

    assert_eq!(state.close_at(index), ModalLookup::Found(index));
    assert!(!state.is_open_at(index));
    assert!(!state.scroll_locked());
}

#[test]
fn modal_without_id_is_not_reachable_by_opener() {
    let mut state = ModalState::default();
    state.register(None, false);
    assert_eq!(state.open(""), ModalLookup::NotFound);
    assert!(!state.scroll_locked());
}

#[test]
fn close_out_of_range_still_unlocks_scroll() {
    let mut state = registry();
    state.open("project-1");
    assert_eq!(state.close_at(9), ModalLookup::NotFound);
    assert!(!state.scroll_locked());
}
