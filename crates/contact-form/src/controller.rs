// File: src/controller.rs
// Purpose: Field-level reactions and the submission workflow

use crate::config::Config;
use crate::event::FormEvent;
use crate::phone::format_phone;
use crate::snapshot::FormSnapshot;
use crate::state::FieldErrorState;
use crate::timer::HideTicket;
use crate::view::FormView;
use contact_form_validation::{validate_field, FieldId, FieldInvalid};
use std::time::Duration;

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every field passed. Holds the raw values that were echoed.
    Success(FormSnapshot),
    /// At least one field failed. `errors` holds the first violation of each
    /// invalid field in submission order.
    Invalid {
        first_invalid: FieldId,
        errors: Vec<FieldInvalid>,
    },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}

/// Drives a [`FormView`] from discrete form events.
///
/// The controller owns the per-field error state; the view only mirrors it.
pub struct FormController<V: FormView> {
    view: V,
    errors: FieldErrorState,
    /// Ticket of the currently visible success panel
    success: Option<HideTicket>,
    next_ticket: u64,
    auto_hide: Duration,
    auto_format_phone: bool,
    announce: bool,
}

impl<V: FormView> FormController<V> {
    pub fn new(view: V, config: &Config) -> Self {
        Self {
            view,
            errors: FieldErrorState::new(),
            success: None,
            next_ticket: 0,
            auto_hide: config.success.auto_hide(),
            auto_format_phone: config.phone.auto_format,
            announce: config.announce.enabled,
        }
    }

    /// Process one event. Returns the outcome for submissions.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<SubmissionOutcome> {
        match event {
            FormEvent::Blur { field, value } => self.blur(field, &value),
            FormEvent::Focus { field } => self.focus(field),
            FormEvent::Input { field, value } => self.input(field, &value),
            FormEvent::Submit(snapshot) => return Some(self.submit(snapshot)),
            FormEvent::SuccessExpired { ticket } => {
                self.expire_success(ticket);
            }
        }
        None
    }

    /// Leaving a field validates it
    pub fn blur(&mut self, field: FieldId, value: &str) {
        self.revalidate(field, value);
    }

    /// Entering a field hides its error without re-validating
    pub fn focus(&mut self, field: FieldId) {
        self.clear_error(field);
    }

    /// Keystrokes only re-validate a field that already shows an error
    pub fn input(&mut self, field: FieldId, value: &str) {
        let formatted;
        let value = if field == FieldId::Phone && self.auto_format_phone {
            formatted = format_phone(value);
            if formatted != value {
                self.view.set_value(field, &formatted);
            }
            formatted.as_str()
        } else {
            value
        };

        if self.errors.has_error(field) {
            self.revalidate(field, value);
        }
    }

    /// Validate every field and either accept the submission or point the
    /// user at the first invalid field.
    pub fn submit(&mut self, snapshot: FormSnapshot) -> SubmissionOutcome {
        let mut failed: Vec<FieldInvalid> = Vec::new();

        for (field, value) in snapshot.iter() {
            let result = validate_field(field, value);
            match result.violations.into_iter().next() {
                Some(first) => {
                    self.show_error(field, first.message);
                    failed.push(first);
                }
                None => self.clear_error(field),
            }
        }

        let Some(first) = failed.first() else {
            return self.accept(snapshot);
        };

        let first_invalid = first.field;
        tracing::warn!(
            fields = ?failed.iter().map(|f| f.field).collect::<Vec<_>>(),
            "form submission rejected"
        );

        self.view.focus_field(first_invalid);
        if self.announce {
            self.view.announce(first.message);
        }

        SubmissionOutcome::Invalid {
            first_invalid,
            errors: failed,
        }
    }

    /// Hide the success panel if `ticket` belongs to its latest showing.
    ///
    /// Returns whether the panel was hidden.
    pub fn expire_success(&mut self, ticket: HideTicket) -> bool {
        if self.success != Some(ticket) {
            tracing::debug!(ticket = ticket.0, "ignoring superseded success timer");
            return false;
        }

        self.success = None;
        self.view.hide_success();
        true
    }

    pub fn errors(&self) -> &FieldErrorState {
        &self.errors
    }

    pub fn is_success_visible(&self) -> bool {
        self.success.is_some()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn accept(&mut self, snapshot: FormSnapshot) -> SubmissionOutcome {
        // Nothing is transmitted; the submission only surfaces locally
        tracing::info!(
            name = %snapshot.name,
            email = %snapshot.email,
            phone = %snapshot.phone,
            body = %snapshot.message,
            "form submitted successfully"
        );

        self.next_ticket += 1;
        let ticket = HideTicket(self.next_ticket);

        self.view.show_success(&snapshot);
        self.success = Some(ticket);
        self.view.reset_form();
        self.view.schedule_success_hide(self.auto_hide, ticket);

        SubmissionOutcome::Success(snapshot)
    }

    fn revalidate(&mut self, field: FieldId, value: &str) {
        match validate_field(field, value).first_message() {
            Some(message) => self.show_error(field, message),
            None => self.clear_error(field),
        }
    }

    fn show_error(&mut self, field: FieldId, message: &str) {
        tracing::debug!(%field, error = message, "showing field error");
        self.errors.show(field, message);
        self.view.show_error(field, message);
    }

    fn clear_error(&mut self, field: FieldId) {
        if self.errors.clear(field) {
            tracing::debug!(%field, "cleared field error");
        }
        self.view.clear_error(field);
    }
}
