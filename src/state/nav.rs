//! Mobile navigation menu.
//!
//! One boolean drives both the trigger's `aria-expanded` and the menu's
//! `aria-hidden`, so the two can never disagree.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Set the menu state. Returns `true` if it changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    /// Trigger click.
    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.open);
        self.open
    }

    /// Navigation link click. Closes the menu if it is open; returns whether
    /// anything needs re-rendering.
    pub fn close_for_link(&mut self) -> bool {
        self.set_open(false)
    }

    /// `aria-expanded` value for the trigger.
    #[must_use]
    pub fn expanded_attr(self) -> &'static str {
        bool_attr(self.open)
    }

    /// `aria-hidden` value for the menu panel.
    #[must_use]
    pub fn hidden_attr(self) -> &'static str {
        bool_attr(!self.open)
    }
}

/// ARIA boolean attribute text.
#[must_use]
pub fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
