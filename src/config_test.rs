use super::*;

#[test]
fn defaults_match_markup_contract() {
    let config = PageConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.theme_toggle_id, "themeToggle");
    assert_eq!(config.nav_toggle_id, "navToggle");
    assert_eq!(config.nav_menu_id, "navMenu");
    assert_eq!(config.year_id, "year");
    assert_eq!(config.contact_form_id, "contactForm");
    assert_eq!(config.form_status_id, "formStatus");
    assert_eq!(config.send_delay_ms, 900);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{"send_delay_ms": 250, "year_id": "copyright"}"#).expect("config");
    assert_eq!(config.send_delay_ms, 250);
    assert_eq!(config.year_id, "copyright");
    assert_eq!(config.nav_menu_id, "navMenu");
}

#[test]
fn malformed_override_is_an_error() {
    assert!(PageConfig::from_json("{not json").is_err());
    assert!(PageConfig::from_json(r#"{"send_delay_ms": "soon"}"#).is_err());
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = PageConfig { log_level: "DEBUG".to_owned(), ..PageConfig::default() };
    assert_eq!(config.log_level(), log::Level::Debug);
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = PageConfig { log_level: "chatty".to_owned(), ..PageConfig::default() };
    assert_eq!(config.log_level(), log::Level::Info);
}
