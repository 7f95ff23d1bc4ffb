//! Modal dialogs and the page scroll lock.
//!
//! Modals are tracked by registration order, which the host keeps equal to
//! its element list, so a modal without an id can still be closed. Openers
//! address modals by id. Modals do not stack: opening any modal locks
//! scrolling and closing any modal unlocks it, even if another modal is
//! still marked open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Result of looking a modal up. A missing modal is not an error; the caller
/// simply has nothing to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalLookup {
    /// Position of the modal in registration order.
    Found(usize),
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalEntry {
    pub id: Option<String>,
    pub open: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    modals: Vec<ModalEntry>,
    scroll_locked: bool,
}

impl ModalState {
    /// Append a modal and return its position.
    pub fn register(&mut self, id: Option<&str>, open: bool) -> usize {
        self.modals.push(ModalEntry { id: id.map(str::to_owned), open });
        self.modals.len() - 1
    }

    #[must_use]
    pub fn modals(&self) -> &[ModalEntry] {
        &self.modals
    }

    /// Position of the first modal with id `id`.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.modals.iter().position(|m| m.id.as_deref() == Some(id))
    }

    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.position(id).is_some_and(|i| self.is_open_at(i))
    }

    #[must_use]
    pub fn is_open_at(&self, index: usize) -> bool {
        self.modals.get(index).is_some_and(|m| m.open)
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Show modal `id` and lock page scrolling. Unknown ids change nothing.
    pub fn open(&mut self, id: &str) -> ModalLookup {
        let Some(index) = self.position(id) else {
            log::debug!("modal {id:?} not found; ignoring open");
            return ModalLookup::NotFound;
        };
        self.modals[index].open = true;
        self.scroll_locked = true;
        ModalLookup::Found(index)
    }

    /// Hide the modal at `index` and unlock page scrolling unconditionally.
    pub fn close_at(&mut self, index: usize) -> ModalLookup {
        self.scroll_locked = false;
        match self.modals.get_mut(index) {
            Some(entry) => {
                entry.open = false;
                ModalLookup::Found(index)
            }
            None => ModalLookup::NotFound,
        }
    }
}
