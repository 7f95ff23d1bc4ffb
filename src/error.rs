//! Error types.
//!
//! `FormError` doubles as the user-facing status text: its `Display` output
//! is written verbatim into the form status element.

/// Contact form validation failure. Recoverable by correcting the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// One or more of name, email, message is empty after trimming.
    #[error("Please fill name, email and message.")]
    MissingField,
    /// The email does not look like `local@domain.tld`.
    #[error("Please enter a valid email.")]
    InvalidEmail,
}

/// Startup failure: the document does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// No browser `window`/`document` (e.g. running in a worker).
    #[error("no browser document available")]
    NoDocument,
    /// A required element id is absent from the document.
    #[error("missing element #{0}")]
    MissingElement(String),
    /// The element exists but is not of the expected HTML type.
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    /// A selector query was rejected by the browser.
    #[error("invalid selector {0:?}")]
    InvalidSelector(String),
}

/// The preference store rejected a read or write (quota, privacy mode).
#[derive(Debug, thiserror::Error)]
#[error("preference storage unavailable: {0}")]
pub struct StorageError(pub String);
