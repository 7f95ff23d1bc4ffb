//! Contact form validation and simulated send.
//!
//! Nothing leaves the browser. An accepted submission moves to `Sending` and
//! hands back a [`SendTicket`]; the host schedules a timer and calls
//! [`ContactForm::complete`] with that ticket when it fires. Every submission
//! bumps the generation, so a ticket from an earlier submission can never
//! complete a later one.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::error::FormError;
use crate::util::email::is_valid_email;

pub const SENDING_STATUS: &str = "Sending...";
pub const THANKS_STATUS: &str = "Thanks! Your message has been prepared (demo).";

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    /// Check the trimmed fields: all present first, then the email shape.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingField`] if any field is blank,
    /// [`FormError::InvalidEmail`] if the email does not match.
    pub fn validate(&self) -> Result<(), FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FormError::MissingField);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// Handle for one scheduled completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SendTicket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Rejected(FormError),
    Sending(SendTicket),
    Completed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    phase: FormPhase,
    generation: u64,
}

impl ContactForm {
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Ticket of the completion still waiting to fire, if any.
    #[must_use]
    pub fn pending(&self) -> Option<SendTicket> {
        match self.phase {
            FormPhase::Sending(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Handle a submit. Any pending completion is superseded, whether the
    /// new submission is accepted or rejected.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the form is then `Rejected`.
    pub fn submit(&mut self, fields: &ContactFields) -> Result<SendTicket, FormError> {
        self.generation += 1;
        if let Err(err) = fields.validate() {
            log::debug!("contact form rejected: {err:?}");
            self.phase = FormPhase::Rejected(err);
            return Err(err);
        }
        let ticket = SendTicket(self.generation);
        self.phase = FormPhase::Sending(ticket);
        log::info!("contact form accepted; simulating send");
        Ok(ticket)
    }

    /// Timer fired for `ticket`. Returns `true` if it was still current and
    /// the form should be reset; stale tickets are ignored.
    pub fn complete(&mut self, ticket: SendTicket) -> bool {
        if self.pending() != Some(ticket) {
            log::debug!("ignoring stale send completion {ticket:?}");
            return false;
        }
        self.phase = FormPhase::Completed;
        true
    }

    /// Text for the status element.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.phase {
            FormPhase::Idle => String::new(),
            FormPhase::Rejected(err) => err.to_string(),
            FormPhase::Sending(_) => SENDING_STATUS.to_owned(),
            FormPhase::Completed => THANKS_STATUS.to_owned(),
        }
    }
}
