//! In-memory page state.
//!
//! DESIGN
//! ======
//! State is split per widget so each invariant (one accordion panel open,
//! modal visibility and scroll lock moving together, nav trigger and menu
//! agreeing) is enforced by a small type and tested without a browser. The
//! `dom` layer owns a single `PageState` and re-renders the affected widget
//! after every mutation.

pub mod accordion;
pub mod contact;
pub mod modal;
pub mod nav;
pub mod theme;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use accordion::AccordionState;
use contact::ContactForm;
use modal::ModalState;
use nav::NavState;
use theme::ThemeState;

/// Everything the page behavior remembers between events.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub theme: ThemeState,
    pub nav: NavState,
    pub accordion: AccordionState,
    pub modals: ModalState,
    pub contact: ContactForm,
    pub keyboard_mode: bool,
}

impl PageState {
    /// Record a key press. Returns `true` only on the press that first
    /// switches the page into keyboard-navigation mode.
    pub fn note_key(&mut self, key: &str) -> bool {
        if key != "Tab" || self.keyboard_mode {
            return false;
        }
        log::debug!("keyboard navigation detected");
        self.keyboard_mode = true;
        true
    }
}
