//! Email shape check for the contact form.
//!
//! Deliberately loose: one `@`, no whitespace, and a dotted domain whose last
//! label is at least two characters. Deliverability is not checked.
//!
//! "Whitespace" is the browser's set (ECMAScript `WhiteSpace` and
//! `LineTerminator`), which includes U+FEFF and excludes U+0085, and label
//! length is counted in UTF-16 code units, so the page accepts exactly what a
//! browser-side `<input type="email">` pattern check would.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Minimum length, in UTF-16 code units, of the label after the dot.
const MIN_TLD_UNITS: usize = 2;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let pattern = format!(r"^[^@{BROWSER_WHITESPACE}]+@([^@{BROWSER_WHITESPACE}]+)$");
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::error!("email pattern failed to compile: {err}");
            None
        }
    }
});

/// Whether `email` (already trimmed) looks like an address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some(re) = EMAIL_RE.as_ref() else {
        return false;
    };
    re.captures(email)
        .and_then(|caps| caps.get(1))
        .is_some_and(|domain| has_dotted_label(domain.as_str()))
}

/// A dot preceded by at least one character and followed by a long enough
/// label. The earliest such dot leaves the longest tail, so it is the only
/// one worth checking.
fn has_dotted_label(domain: &str) -> bool {
    let mut chars = domain.char_indices();
    chars.next();
    chars
        .find(|&(_, c)| c == '.')
        .is_some_and(|(dot, _)| domain[dot + 1..].encode_utf16().count() >= MIN_TLD_UNITS)
}
