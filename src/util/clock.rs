//! Wall-clock helpers.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year from the system clock.
///
/// In the browser this is the visitor's local year (`Date.getFullYear`);
/// natively it is the UTC year.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Text written into the year stamp element.
#[must_use]
pub fn year_text(year: i32) -> String {
    year.to_string()
}
