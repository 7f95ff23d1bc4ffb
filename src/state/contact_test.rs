use super::*;

// =============================================================
// Validation
// =============================================================

#[test]
fn blank_name_prompts_for_all_fields() {
    let mut form = ContactForm::default();
    let result = form.submit(&ContactFields::new("", "a@b.com", "hi"));
    assert_eq!(result, Err(FormError::MissingField));
    assert_eq!(form.status_text(), "Please fill name, email and message.");
    assert_eq!(form.pending(), None);
}

#[test]
fn whitespace_only_counts_as_blank() {
    let fields = ContactFields::new("A", "a@b.com", "   \n\t");
    assert_eq!(fields.validate(), Err(FormError::MissingField));
}

#[test]
fn missing_field_is_checked_before_email_shape() {
    let fields = ContactFields::new("", "not-an-email", "hi");
    assert_eq!(fields.validate(), Err(FormError::MissingField));
}

#[test]
fn malformed_email_is_rejected() {
    let mut form = ContactForm::default();
    let result = form.submit(&ContactFields::new("A", "not-an-email", "hi"));
    assert_eq!(result, Err(FormError::InvalidEmail));
    assert_eq!(form.status_text(), "Please enter a valid email.");
    assert_eq!(form.pending(), None);
}

#[test]
fn email_is_trimmed_before_validation() {
    let fields = ContactFields::new(" A ", "  a@b.co  ", " hi ");
    assert_eq!(fields.validate(), Ok(()));
}

// =============================================================
// Simulated send
// =============================================================

#[test]
fn idle_form_has_no_status() {
    let form = ContactForm::default();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.status_text(), "");
}

#[test]
fn valid_submission_sends_then_thanks() {
    let mut form = ContactForm::default();
    let ticket = form.submit(&ContactFields::new("A", "a@b.co", "hi")).expect("accepted");
    assert_eq!(form.status_text(), SENDING_STATUS);
    assert_eq!(form.pending(), Some(ticket));

    assert!(form.complete(ticket));
    assert_eq!(form.phase(), FormPhase::Completed);
    assert_eq!(form.status_text(), THANKS_STATUS);
    assert_eq!(form.pending(), None);
}

#[test]
fn completion_fires_only_once() {
    let mut form = ContactForm::default();
    let ticket = form.submit(&ContactFields::new("A", "a@b.co", "hi")).expect("accepted");
    assert!(form.complete(ticket));
    assert!(!form.complete(ticket));
}

#[test]
fn resubmission_supersedes_pending_send() {
    let mut form = ContactForm::default();
    let first = form.submit(&ContactFields::new("A", "a@b.co", "hi")).expect("accepted");
    let second = form.submit(&ContactFields::new("B", "b@c.de", "again")).expect("accepted");
    assert_ne!(first, second);

    assert!(!form.complete(first));
    assert_eq!(form.status_text(), SENDING_STATUS);
    assert!(form.complete(second));
    assert_eq!(form.status_text(), THANKS_STATUS);
}

#[test]
fn rejected_resubmission_cancels_pending_send() {
    let mut form = ContactForm::default();
    let ticket = form.submit(&ContactFields::new("A", "a@b.co", "hi")).expect("accepted");
    assert!(form.submit(&ContactFields::default()).is_err());
    assert!(!form.complete(ticket));
    assert_eq!(form.status_text(), "Please fill name, email and message.");
}

#[test]
fn form_can_be_reused_after_completion() {
    let mut form = ContactForm::default();
    let first = form.submit(&ContactFields::new("A", "a@b.co", "hi")).expect("accepted");
    form.complete(first);
    let second = form.submit(&ContactFields::new("A", "a@b.co", "hi")).expect("accepted");
    assert_eq!(form.status_text(), SENDING_STATUS);
    assert!(form.complete(second));
}
