// Host-side tests for the contact form state machine.

#![allow(dead_code)]
mod contact {
    include!("../src/core/contact.rs");
}

use contact::*;

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "ada@example.com");
    form.set_field(Field::Subject, "Dashboards");
    form.set_field(Field::Message, "Hello");
    form
}

#[test]
fn successful_submission_clears_fields_and_acknowledges() {
    let mut form = filled_form();
    let sent = form.begin_submit().expect("all fields present");
    assert_eq!(sent.get(Field::Name), "Ada");
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert_eq!(form.submit_label(), SUBMIT_LABEL_BUSY);

    let outcome = form.finish_submit(Ok(()));
    assert_eq!(
        outcome,
        SubmitOutcome::Acknowledged("Thank you for your message! I'll get back to you soon.")
    );
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.submit_label(), SUBMIT_LABEL_IDLE);
    for field in Field::ALL {
        assert_eq!(form.fields().get(field), "");
    }
}

#[test]
fn second_submit_while_sending_is_rejected() {
    let mut form = filled_form();
    form.begin_submit().expect("first submit");
    assert_eq!(form.begin_submit().unwrap_err(), FormError::Busy);
    assert!(form.is_submitting());
}

#[test]
fn missing_field_blocks_submission() {
    let mut form = filled_form();
    form.set_field(Field::Subject, "");
    let err = form.begin_submit().unwrap_err();
    assert_eq!(err, FormError::MissingField(Field::Subject));
    assert_eq!(err.to_string(), "subject is required");
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn failed_delivery_keeps_fields_for_retry() {
    let mut form = filled_form();
    form.begin_submit().expect("submit");
    let outcome = form.finish_submit(Err(SubmitError("offline".into())));
    assert!(matches!(outcome, SubmitOutcome::Failed(ref m) if m.contains("offline")));
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.fields().get(Field::Message), "Hello");
    assert!(form.begin_submit().is_ok());
}

#[test]
fn field_ids_round_trip() {
    for field in Field::ALL {
        assert_eq!(Field::from_id(field.id()), Some(field));
    }
    assert_eq!(Field::from_id("phone"), None);
}

#[test]
fn fields_read_from_the_page_at_submit_are_accepted() {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "stale");
    form.sync_fields(|field| match field {
        Field::Name => "Ada".to_string(),
        Field::Email => "ada@example.com".to_string(),
        Field::Subject => "Dashboards".to_string(),
        Field::Message => "Hello".to_string(),
    });
    let sent = form.begin_submit().expect("every control has a value");
    assert_eq!(sent.get(Field::Name), "Ada");
    assert_eq!(sent.get(Field::Message), "Hello");
}

#[test]
fn control_emptied_before_submit_is_reported_missing() {
    let mut form = filled_form();
    form.sync_fields(|field| {
        if field == Field::Email {
            String::new()
        } else {
            "x".to_string()
        }
    });
    assert_eq!(form.begin_submit().unwrap_err(), FormError::MissingField(Field::Email));
}
