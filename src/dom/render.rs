//! Projection of [`PageState`](crate::state::PageState) onto the document.
//!
//! Each function rewrites every attribute its widget owns from the current
//! state, so calling one twice is harmless. DOM write failures are logged;
//! there is nothing useful to do about them mid-event.

use web_sys::{Element, HtmlElement};

use super::Elements;
use crate::state::accordion::AccordionState;
use crate::state::contact::ContactForm;
use crate::state::modal::ModalState;
use crate::state::nav::{NavState, bool_attr};
use crate::state::theme::ThemeState;

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("failed to set {name}={value} on #{}: {err:?}", el.id());
    }
}

fn remove_attr(el: &Element, name: &str) {
    if let Err(err) = el.remove_attribute(name) {
        log::warn!("failed to remove {name} from #{}: {err:?}", el.id());
    }
}

fn set_style(el: &HtmlElement, property: &str, value: Option<&str>) {
    let style = el.style();
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_previous| ()),
    };
    if let Err(err) = result {
        log::warn!("failed to set style {property} on #{}: {err:?}", el.id());
    }
}

pub fn text(el: &Element, value: &str) {
    el.set_text_content(Some(value));
}

pub fn theme(els: &Elements, state: &ThemeState) {
    if state.theme.is_dark() {
        set_attr(&els.root, "data-theme", "dark");
    } else {
        remove_attr(&els.root, "data-theme");
    }
    set_attr(&els.theme_toggle, "aria-pressed", bool_attr(state.pressed()));
}

pub fn nav(els: &Elements, state: NavState) {
    set_attr(&els.nav_toggle, "aria-expanded", state.expanded_attr());
    set_attr(&els.nav_menu, "aria-hidden", state.hidden_attr());
}

pub fn accordion(els: &Elements, state: &AccordionState) {
    for (index, panel) in els.panels.iter().enumerate() {
        let open = state.is_open_at(index);
        set_style(panel, "display", Some(if open { "block" } else { "none" }));
        set_attr(panel, "aria-hidden", bool_attr(!open));
    }
}

/// Render the modal at `index` together with the page scroll lock.
pub fn modal(els: &Elements, index: usize, state: &ModalState) {
    if let Some(modal) = els.modals.get(index) {
        set_attr(&modal.el, "aria-hidden", bool_attr(!state.is_open_at(index)));
    }
    let overflow = if state.scroll_locked() { Some("hidden") } else { None };
    set_style(&els.body, "overflow", overflow);
}

pub fn status(els: &Elements, form: &ContactForm) {
    text(&els.status, &form.status_text());
}

pub fn keyboard_mode(els: &Elements) {
    if let Err(err) = els.body.class_list().add_1(crate::config::TABBING_CLASS) {
        log::warn!("failed to mark keyboard navigation: {err:?}");
    }
}
