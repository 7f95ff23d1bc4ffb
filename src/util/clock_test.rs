#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_year_is_plausible() {
    let year = current_year();
    assert!(year >= 2024, "clock returned {year}");
}

#[test]
fn year_text_is_plain_digits() {
    assert_eq!(year_text(2026), "2026");
}
