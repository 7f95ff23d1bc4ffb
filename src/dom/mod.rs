//! Browser wiring.
//!
//! ARCHITECTURE
//! ============
//! `mount` resolves every element the page behavior touches, seeds
//! [`PageState`] from storage and markup, renders it once, and attaches one
//! listener per trigger. Listeners share a cloned `Page` handle; each one
//! mutates state through the core types and then calls the matching
//! [`render`] function. Listener closures live for the page lifetime and are
//! leaked with `Closure::forget`.

pub mod render;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    KeyboardEvent, NodeList,
};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig, selectors};
use crate::error::MountError;
use crate::state::PageState;
use crate::state::accordion::AccordionState;
use crate::state::contact::{ContactFields, SendTicket};
use crate::state::modal::ModalLookup;
use crate::state::theme::ThemeState;
use crate::util::clock::{current_year, year_text};
use storage::LocalStorage;

/// A modal dialog element and the id openers address it by, if it has one.
pub struct ModalElement {
    pub id: Option<String>,
    pub el: Element,
    /// Whether the element carries the `.modal` class (and so gets closers).
    pub has_closers: bool,
}

/// Every element the page behavior reads or writes, resolved once at mount.
pub struct Elements {
    pub document: Document,
    pub root: Element,
    pub body: HtmlElement,
    pub theme_toggle: Element,
    pub nav_toggle: Element,
    pub nav_menu: Element,
    pub year: Element,
    pub form: HtmlFormElement,
    pub status: Element,
    pub panels: Vec<HtmlElement>,
    pub accordion_triggers: Vec<Element>,
    pub modals: Vec<ModalElement>,
    pub modal_openers: Vec<Element>,
    pub nav_links: Vec<Element>,
}

impl Elements {
    fn collect(document: Document, config: &PageConfig) -> Result<Self, MountError> {
        let root = document.document_element().ok_or(MountError::NoDocument)?;
        let body = document.body().ok_or(MountError::NoDocument)?;
        let form_el = required(&document, &config.contact_form_id)?;
        let form = form_el.dyn_into::<HtmlFormElement>().map_err(|_| MountError::WrongElementType {
            id: config.contact_form_id.clone(),
            expected: "form",
        })?;

        let panels = query_all(&document, selectors::ACCORDION_PANEL)?
            .into_iter()
            .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
            .collect();

        let modal_openers = query_all(&document, selectors::MODAL_OPENER)?;
        let mut modals: Vec<ModalElement> = query_all(&document, selectors::MODAL)?
            .into_iter()
            .map(|el| ModalElement { id: element_id(&el), el, has_closers: true })
            .collect();
        // Openers may name any element by id, not only `.modal` ones.
        for opener in &modal_openers {
            let Some(target) = opener.get_attribute("data-modal") else {
                continue;
            };
            if modals.iter().any(|m| m.id.as_deref() == Some(target.as_str())) {
                continue;
            }
            if let Some(el) = document.get_element_by_id(&target) {
                modals.push(ModalElement { id: Some(target), el, has_closers: false });
            }
        }

        Ok(Self {
            theme_toggle: required(&document, &config.theme_toggle_id)?,
            nav_toggle: required(&document, &config.nav_toggle_id)?,
            nav_menu: required(&document, &config.nav_menu_id)?,
            year: required(&document, &config.year_id)?,
            status: required(&document, &config.form_status_id)?,
            accordion_triggers: query_all(&document, selectors::ACCORDION_TRIGGER)?,
            nav_links: query_all(&document, selectors::NAV_LINK)?,
            panels,
            modals,
            modal_openers,
            form,
            root,
            body,
            document,
        })
    }
}

fn element_id(el: &Element) -> Option<String> {
    let id = el.id();
    if id.is_empty() { None } else { Some(id) }
}

fn required(document: &Document, id: &str) -> Result<Element, MountError> {
    document.get_element_by_id(id).ok_or_else(|| MountError::MissingElement(id.to_owned()))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, MountError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| MountError::InvalidSelector(selector.to_owned()))?;
    Ok(node_elements(&list))
}

fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => node_elements(&list),
        Err(err) => {
            log::warn!("query {selector:?} in #{} failed: {err:?}", parent.id());
            Vec::new()
        }
    }
}

fn node_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Shared handle captured by every listener.
#[derive(Clone)]
struct Page {
    config: Rc<PageConfig>,
    els: Rc<Elements>,
    state: Rc<RefCell<PageState>>,
    store: Rc<RefCell<LocalStorage>>,
    send_timer: Rc<RefCell<Option<Timeout>>>,
}

/// Read the optional JSON override block, falling back to defaults.
///
/// Runs before the logger exists, so problems go straight to the console.
#[must_use]
pub fn read_config() -> PageConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("#{CONFIG_ELEMENT_ID} ignored: {err}").into());
            PageConfig::default()
        }
    }
}

/// Attach the page behavior to the current document.
///
/// # Errors
///
/// Returns [`MountError`] when a required element is missing or has the
/// wrong type. Nothing is wired in that case.
pub fn mount(config: PageConfig) -> Result<(), MountError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(MountError::NoDocument)?;
    let els = Elements::collect(document, &config)?;
    let store = LocalStorage::open();

    let mut state = PageState::default();
    state.theme = ThemeState::load(&store, &config.theme_storage_key);
    let panel_ids = els.panels.iter().map(|panel| element_id(panel)).collect();
    let initially_open = els.panels.iter().position(|panel| is_shown(panel));
    state.accordion = AccordionState::new(panel_ids, initially_open);
    // Registration order matches `els.modals`, so positions are shared.
    for modal in &els.modals {
        state.modals.register(modal.id.as_deref(), is_shown(&modal.el));
    }

    render::theme(&els, &state.theme);
    render::nav(&els, state.nav);
    render::text(&els.year, &year_text(current_year()));

    let page = Page {
        config: Rc::new(config),
        els: Rc::new(els),
        state: Rc::new(RefCell::new(state)),
        store: Rc::new(RefCell::new(store)),
        send_timer: Rc::new(RefCell::new(None)),
    };

    wire_theme(&page);
    wire_nav(&page);
    wire_accordion(&page);
    wire_modals(&page);
    wire_contact_form(&page);
    wire_keyboard_mode(&page);

    log::info!(
        "portfolio mounted: {} accordion panels, {} modals, {} nav links",
        page.els.panels.len(),
        page.els.modals.len(),
        page.els.nav_links.len()
    );
    Ok(())
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to attach {event} listener: {err:?}");
    }
    closure.forget();
}

fn wire_theme(page: &Page) {
    let page = page.clone();
    let toggle = page.els.theme_toggle.clone();
    listen(&toggle, "click", move |_| {
        let mut state = page.state.borrow_mut();
        let theme = state.theme.toggle(&mut *page.store.borrow_mut(), &page.config.theme_storage_key);
        log::debug!("theme toggled to {}", theme.as_str());
        render::theme(&page.els, &state.theme);
    });
}

fn wire_nav(page: &Page) {
    let toggle_page = page.clone();
    listen(&page.els.nav_toggle, "click", move |_| {
        let mut state = toggle_page.state.borrow_mut();
        state.nav.toggle();
        render::nav(&toggle_page.els, state.nav);
    });

    for link in &page.els.nav_links {
        let link_page = page.clone();
        listen(link, "click", move |_| {
            let mut state = link_page.state.borrow_mut();
            if state.nav.close_for_link() {
                render::nav(&link_page.els, state.nav);
            }
        });
    }
}

fn wire_accordion(page: &Page) {
    for trigger in &page.els.accordion_triggers {
        let Some(target) = trigger.get_attribute("data-target") else {
            log::warn!("accordion trigger without data-target ignored");
            continue;
        };
        let page = page.clone();
        listen(trigger, "click", move |_| {
            let mut state = page.state.borrow_mut();
            if state.accordion.click(&target) {
                render::accordion(&page.els, &state.accordion);
            }
        });
    }
}

fn is_shown(el: &Element) -> bool {
    el.get_attribute("aria-hidden").as_deref() == Some("false")
}

fn open_modal(page: &Page, id: &str) {
    let mut state = page.state.borrow_mut();
    if let ModalLookup::Found(index) = state.modals.open(id) {
        render::modal(&page.els, index, &state.modals);
    }
}

fn close_modal(page: &Page, index: usize) {
    let mut state = page.state.borrow_mut();
    state.modals.close_at(index);
    render::modal(&page.els, index, &state.modals);
}

fn wire_modals(page: &Page) {
    for opener in &page.els.modal_openers {
        let Some(id) = opener.get_attribute("data-modal") else {
            continue;
        };
        let page = page.clone();
        listen(opener, "click", move |_| open_modal(&page, &id));
    }

    for (index, modal) in page.els.modals.iter().enumerate().filter(|(_, m)| m.has_closers) {
        let overlay_page = page.clone();
        let overlay = modal.el.clone();
        listen(&modal.el, "click", move |ev| {
            let on_backdrop = ev.target().is_some_and(|t| js_sys::Object::is(&t, &overlay));
            if on_backdrop {
                close_modal(&overlay_page, index);
            }
        });

        for closer in query_all_in(&modal.el, selectors::MODAL_CLOSER) {
            let closer_page = page.clone();
            listen(&closer, "click", move |_| close_modal(&closer_page, index));
        }
    }
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(item) = form.elements().named_item(name) else {
        return String::new();
    };
    if let Some(input) = item.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = item.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn read_fields(form: &HtmlFormElement) -> ContactFields {
    ContactFields::new(field_value(form, "name"), field_value(form, "email"), field_value(form, "message"))
}

fn wire_contact_form(page: &Page) {
    let page = page.clone();
    let form = page.els.form.clone();
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let fields = read_fields(&page.els.form);
        let outcome = {
            let mut state = page.state.borrow_mut();
            let outcome = state.contact.submit(&fields);
            render::status(&page.els, &state.contact);
            outcome
        };
        // Dropping a pending Timeout cancels it.
        drop(page.send_timer.borrow_mut().take());
        if let Ok(ticket) = outcome {
            schedule_send_completion(&page, ticket);
        }
    });
}

fn schedule_send_completion(page: &Page, ticket: SendTicket) {
    let completion_page = page.clone();
    let timeout = Timeout::new(page.config.send_delay_ms, move || {
        let mut state = completion_page.state.borrow_mut();
        if state.contact.complete(ticket) {
            render::status(&completion_page.els, &state.contact);
            completion_page.els.form.reset();
        }
    });
    *page.send_timer.borrow_mut() = Some(timeout);
}

fn wire_keyboard_mode(page: &Page) {
    let page = page.clone();
    let document = page.els.document.clone();
    listen(&document, "keydown", move |ev| {
        let Some(key_event) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if page.state.borrow_mut().note_key(&key_event.key()) {
            render::keyboard_mode(&page.els);
        }
    });
}
