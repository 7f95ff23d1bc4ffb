//! Page configuration.
//!
//! Every element id, the storage key, and the simulated send delay live here
//! so the markup contract is stated in one place. The defaults match the
//! shipped `index.html`; a page may override any subset by embedding
//!
//! ```html
//! <script type="application/json" id="portfolioConfig">{"send_delay_ms": 500}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "portfolioConfig";

/// Element ids, selectors, and timing the page behavior depends on.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_storage_key: String,
    pub theme_toggle_id: String,
    pub nav_toggle_id: String,
    pub nav_menu_id: String,
    pub year_id: String,
    pub contact_form_id: String,
    pub form_status_id: String,
    pub send_delay_ms: u32,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            theme_toggle_id: "themeToggle".to_owned(),
            nav_toggle_id: "navToggle".to_owned(),
            nav_menu_id: "navMenu".to_owned(),
            year_id: "year".to_owned(),
            contact_form_id: "contactForm".to_owned(),
            form_status_id: "formStatus".to_owned(),
            send_delay_ms: 900,
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse an override block. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(self.log_level.trim()).unwrap_or(log::Level::Info)
    }
}

/// CSS selectors for the repeated widgets. These are part of the stylesheet
/// contract and are not configurable.
pub mod selectors {
    pub const ACCORDION_TRIGGER: &str = ".accordion__btn";
    pub const ACCORDION_PANEL: &str = ".accordion__panel";
    pub const MODAL_OPENER: &str = "[data-modal]";
    pub const MODAL: &str = ".modal";
    pub const MODAL_CLOSER: &str = "[data-close]";
    pub const NAV_LINK: &str = ".nav__link";
}

/// Class added to `<body>` once the visitor navigates with Tab.
pub const TABBING_CLASS: &str = "user-is-tabbing";
