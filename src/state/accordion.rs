//! Skills accordion.
//!
//! Panels are tracked by document position; triggers address them by element
//! id. A panel without an id can never be opened by a trigger but is still
//! closed by every click. `open` is an index into `panels`, so "at most one
//! panel open" holds by construction.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    panels: Vec<Option<String>>,
    open: Option<usize>,
}

impl AccordionState {
    /// Build from the panel ids in document order (`None` for a panel with
    /// no id). `initially_open` is the position of a panel the markup ships
    /// expanded, if any; out-of-range positions are ignored.
    #[must_use]
    pub fn new(panels: Vec<Option<String>>, initially_open: Option<usize>) -> Self {
        let open = initially_open.filter(|&i| i < panels.len());
        Self { panels, open }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Position of the open panel, if any.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Id of the open panel, if it is open and has one.
    #[must_use]
    pub fn open_panel(&self) -> Option<&str> {
        self.open.and_then(|i| self.panels.get(i)).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn is_open_at(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open_panel() == Some(id)
    }

    /// Trigger click for panel `target`.
    ///
    /// Closes every panel, then reopens `target` unless it was the one open.
    /// Returns `false` (and changes nothing) when no panel has id `target`.
    pub fn click(&mut self, target: &str) -> bool {
        let Some(index) = self.panels.iter().position(|p| p.as_deref() == Some(target)) else {
            log::warn!("accordion trigger targets unknown panel {target:?}");
            return false;
        };
        let was_open = self.open == Some(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
        log::debug!("accordion open panel: {:?}", self.open);
        true
    }
}
