//! Form controller behavior: blur/focus/input reactions, the submission
//! workflow, and success panel timing.

mod common;

use common::{Effect, Page};
use contact_form::validation::ViolationKind;
use contact_form::{
    Config, FieldId, FormEvent, FormSnapshot, HideTicket, SubmissionOutcome,
};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn valid_snapshot() -> FormSnapshot {
    FormSnapshot::new("Jo", "jo@example.com", "1234567890", "Hello there!")
}

#[test]
fn test_valid_submission_shows_success_and_resets() {
    let mut page = Page::new();
    for (field, value) in valid_snapshot().iter() {
        page.fill(field, value);
    }

    let snapshot = page.snapshot();
    let outcome = page.form.submit(snapshot);

    assert_eq!(outcome, SubmissionOutcome::Success(valid_snapshot()));
    assert!(page.form.is_success_visible());
    assert!(page.form.errors().is_clear());

    let view = page.view();
    assert!(view.success_visible);
    assert_eq!(view.echoed, Some(valid_snapshot()));
    assert!(view.values.is_empty(), "form inputs should be reset");
    assert!(view.error_text.is_empty());
    assert!(view.effects.contains(&Effect::Schedule(
        Duration::from_millis(10_000),
        HideTicket(1)
    )));
}

#[test]
fn test_invalid_submission_reports_each_field_and_focuses_first() {
    let mut page = Page::new();
    let snapshot = FormSnapshot::new("", "bad", "123", "hi");

    let outcome = page.form.submit(snapshot);

    let SubmissionOutcome::Invalid { first_invalid, errors } = outcome else {
        panic!("expected an invalid submission");
    };
    assert_eq!(first_invalid, FieldId::Name);
    assert_eq!(
        errors.iter().map(|e| e.reason).collect::<Vec<_>>(),
        vec![
            ViolationKind::Required,
            ViolationKind::PatternMismatch,
            ViolationKind::TooShort,
            ViolationKind::TooShort,
        ]
    );

    let view = page.view();
    assert_eq!(view.error(FieldId::Name), Some("Name is required"));
    assert_eq!(view.error(FieldId::Email), Some("Please enter a valid email address"));
    assert_eq!(view.error(FieldId::Phone), Some("Phone number must be at least 10 digits"));
    assert_eq!(view.error(FieldId::Message), Some("Message must be at least 10 characters"));
    assert_eq!(view.focused, Some(FieldId::Name));
    assert!(!view.success_visible);
    assert!(!view.effects.contains(&Effect::ResetForm));
    assert!(view.timers.pending() == 0);
}

#[test]
fn test_focus_goes_to_first_invalid_in_field_order() {
    let mut page = Page::new();
    let snapshot = FormSnapshot::new("Jo", "jo@example.com", "12", "short");

    let outcome = page.form.submit(snapshot);

    assert!(matches!(
        outcome,
        SubmissionOutcome::Invalid { first_invalid: FieldId::Phone, .. }
    ));
    assert_eq!(page.view().focused, Some(FieldId::Phone));
    assert_eq!(page.view().error(FieldId::Name), None);
}

#[test]
fn test_invalid_submission_keeps_values() {
    let mut page = Page::new();
    page.type_value(FieldId::Name, "Jo");
    page.type_value(FieldId::Email, "jo@");

    let snapshot = page.snapshot();
    page.form.submit(snapshot);

    assert_eq!(page.view().value(FieldId::Name), "Jo");
    assert_eq!(page.view().value(FieldId::Email), "jo@");
}

#[test]
fn test_resubmit_clears_fixed_fields() {
    let mut page = Page::new();
    page.form.submit(FormSnapshot::new("", "bad", "1234567890", "Hello there!"));
    assert_eq!(page.form.errors().fields(), vec![FieldId::Name, FieldId::Email]);

    page.form.submit(FormSnapshot::new("Jo", "bad", "1234567890", "Hello there!"));
    assert_eq!(page.form.errors().fields(), vec![FieldId::Email]);
    assert_eq!(page.view().error(FieldId::Name), None);
    assert_eq!(page.view().focused, Some(FieldId::Email));
}

#[test]
fn test_success_echoes_raw_values() {
    let mut page = Page::new();
    let snapshot = FormSnapshot::new("  Jo  ", " jo@example.com", "1234567890 ", "Hello there!");

    let outcome = page.form.submit(snapshot.clone());

    assert_eq!(outcome, SubmissionOutcome::Success(snapshot.clone()));
    assert_eq!(page.view().echoed, Some(snapshot));
}

#[test]
fn test_invalid_submission_announces_first_error() {
    let mut page = Page::new();
    page.form.submit(FormSnapshot::new("Jo", "", "", ""));

    let announced: Vec<_> = page
        .view()
        .effects
        .iter()
        .filter_map(|e| match e {
            Effect::Announce(message) => Some(message.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(announced, vec!["Email is required"]);
}

#[test]
fn test_announcements_can_be_disabled() {
    let mut config = Config::default();
    config.announce.enabled = false;
    let mut page = Page::with_config(&config);

    page.form.submit(FormSnapshot::default());

    assert!(!page
        .view()
        .effects
        .iter()
        .any(|e| matches!(e, Effect::Announce(_))));
}

#[test]
fn test_blur_shows_first_message() {
    let mut page = Page::new();
    page.type_value(FieldId::Name, "1");
    page.blur(FieldId::Name);

    assert_eq!(
        page.view().error(FieldId::Name),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(
        page.form.errors().message(FieldId::Name),
        Some("Name must be at least 2 characters")
    );
}

#[test]
fn test_blur_valid_clears_error() {
    let mut page = Page::new();
    page.blur(FieldId::Email);
    assert_eq!(page.view().error(FieldId::Email), Some("Email is required"));

    page.type_value(FieldId::Email, "jo@example.com");
    page.blur(FieldId::Email);
    assert_eq!(page.view().error(FieldId::Email), None);
}

#[test]
fn test_focus_clears_without_revalidating() {
    let mut page = Page::new();
    page.blur(FieldId::Message);
    assert!(page.form.errors().has_error(FieldId::Message));
    page.clear_effects();

    page.form.focus(FieldId::Message);

    assert!(!page.form.errors().has_error(FieldId::Message));
    assert_eq!(page.view().effects, vec![Effect::ClearError(FieldId::Message)]);
}

#[test]
fn test_input_revalidates_only_when_error_visible() {
    let mut page = Page::new();

    // No error showing: typing an invalid value shows nothing
    page.type_value(FieldId::Email, "jo@");
    assert_eq!(page.view().error(FieldId::Email), None);
    assert!(!page
        .view()
        .effects
        .iter()
        .any(|e| matches!(e, Effect::ShowError(..))));

    // Blur reveals the error, then typing fixes it live
    page.blur(FieldId::Email);
    assert_eq!(
        page.view().error(FieldId::Email),
        Some("Please enter a valid email address")
    );

    page.type_value(FieldId::Email, "jo@example.c");
    assert_eq!(page.view().error(FieldId::Email), None);
    assert!(page.form.errors().is_clear());

    // The error is gone, so invalid typing no longer shows anything
    page.type_value(FieldId::Email, "jo@");
    assert_eq!(page.view().error(FieldId::Email), None);
}

#[test]
fn test_input_updates_visible_message() {
    let mut page = Page::new();
    page.blur(FieldId::Name);
    assert_eq!(page.view().error(FieldId::Name), Some("Name is required"));

    page.type_value(FieldId::Name, "J");
    assert_eq!(
        page.view().error(FieldId::Name),
        Some("Name must be at least 2 characters")
    );
}

#[test]
fn test_phone_is_formatted_while_typing() {
    let mut page = Page::new();
    page.type_value(FieldId::Phone, "5551234567");

    assert_eq!(page.view().value(FieldId::Phone), "(555) 123-4567");
    assert!(page.view().effects.contains(&Effect::SetValue(
        FieldId::Phone,
        "(555) 123-4567".to_string()
    )));
}

#[test]
fn test_phone_formatting_skips_unchanged_values() {
    let mut page = Page::new();
    page.type_value(FieldId::Phone, "555");
    assert!(!page
        .view()
        .effects
        .iter()
        .any(|e| matches!(e, Effect::SetValue(..))));
}

#[test]
fn test_phone_formatting_can_be_disabled() {
    let mut config = Config::default();
    config.phone.auto_format = false;
    let mut page = Page::with_config(&config);

    page.type_value(FieldId::Phone, "5551234567");

    assert_eq!(page.view().value(FieldId::Phone), "5551234567");
}

#[test]
fn test_phone_live_validation_uses_formatted_value() {
    let mut page = Page::new();
    page.type_value(FieldId::Phone, "555");
    page.blur(FieldId::Phone);
    assert_eq!(
        page.view().error(FieldId::Phone),
        Some("Phone number must be at least 10 digits")
    );

    // Seven digits format to "(555) 123-4", eleven characters
    page.type_value(FieldId::Phone, "5551234");
    assert_eq!(page.view().value(FieldId::Phone), "(555) 123-4");
    assert_eq!(page.view().error(FieldId::Phone), None);
}

#[test]
fn test_success_hides_after_delay() {
    let mut page = Page::new();
    page.form.submit(valid_snapshot());

    page.wait(9_999);
    assert!(page.view().success_visible);

    page.wait(1);
    assert!(!page.view().success_visible);
    assert!(!page.form.is_success_visible());
}

#[test]
fn test_retriggered_success_restarts_delay() {
    let mut page = Page::new();
    page.form.submit(valid_snapshot());
    page.wait(5_000);

    page.form.submit(valid_snapshot());
    page.wait(5_000);
    assert!(page.view().success_visible, "first timer is superseded");

    page.wait(5_000);
    assert!(!page.view().success_visible);
}

#[test]
fn test_custom_auto_hide_delay() {
    let mut config = Config::default();
    config.success.auto_hide_ms = 250;
    let mut page = Page::with_config(&config);

    page.form.submit(valid_snapshot());
    page.wait(250);

    assert!(!page.view().success_visible);
}

#[test]
fn test_stale_expiry_is_ignored() {
    let mut page = Page::new();
    assert!(!page.form.expire_success(HideTicket(1)));

    page.form.submit(valid_snapshot());
    page.form.submit(valid_snapshot());

    assert!(!page.form.expire_success(HideTicket(1)));
    assert!(page.form.expire_success(HideTicket(2)));
    assert!(!page.view().success_visible);
}

#[test]
fn test_dispatch_routes_events() {
    let mut page = Page::new();

    assert_eq!(
        page.form.dispatch(FormEvent::Blur {
            field: FieldId::Name,
            value: String::new(),
        }),
        None
    );
    assert!(page.form.errors().has_error(FieldId::Name));

    page.form.dispatch(FormEvent::Focus { field: FieldId::Name });
    assert!(!page.form.errors().has_error(FieldId::Name));

    let outcome = page.form.dispatch(FormEvent::Submit(valid_snapshot()));
    assert!(outcome.is_some_and(|o| o.is_success()));

    page.form.dispatch(FormEvent::SuccessExpired { ticket: HideTicket(1) });
    assert!(!page.view().success_visible);
}

#[test]
fn test_displayed_error_is_always_first_message() {
    let mut page = Page::new();
    for (field, raw) in [
        (FieldId::Name, "1"),
        (FieldId::Phone, "abc"),
        (FieldId::Email, "x"),
        (FieldId::Message, " "),
    ] {
        page.type_value(field, raw);
        page.blur(field);
        let current = page.view().value(field).to_string();
        let expected = contact_form::validation::validate_field(field, &current).first_message();
        assert_eq!(page.view().error(field), expected);
        assert_eq!(page.form.errors().message(field), expected);
    }
}
