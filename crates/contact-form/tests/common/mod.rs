//! Shared test view: an in-memory model of the contact page

#![allow(dead_code)]

use contact_form::{
    Config, FieldId, FormController, FormSnapshot, FormView, HideTicket, TimerQueue,
};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowError(FieldId, String),
    ClearError(FieldId),
    ShowSuccess,
    HideSuccess,
    ResetForm,
    Focus(FieldId),
    Schedule(Duration, HideTicket),
    SetValue(FieldId, String),
    Announce(String),
}

/// Records every effect and keeps the resulting page state
#[derive(Debug, Default)]
pub struct PageView {
    pub values: HashMap<FieldId, String>,
    pub error_text: HashMap<FieldId, String>,
    pub success_visible: bool,
    pub echoed: Option<FormSnapshot>,
    pub focused: Option<FieldId>,
    pub timers: TimerQueue,
    pub effects: Vec<Effect>,
}

impl PageView {
    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.error_text.get(&field).map(String::as_str)
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl FormView for PageView {
    fn show_error(&mut self, field: FieldId, message: &str) {
        self.error_text.insert(field, message.to_string());
        self.effects.push(Effect::ShowError(field, message.to_string()));
    }

    fn clear_error(&mut self, field: FieldId) {
        self.error_text.remove(&field);
        self.effects.push(Effect::ClearError(field));
    }

    fn show_success(&mut self, submission: &FormSnapshot) {
        self.success_visible = true;
        self.echoed = Some(submission.clone());
        self.effects.push(Effect::ShowSuccess);
    }

    fn hide_success(&mut self) {
        self.success_visible = false;
        self.effects.push(Effect::HideSuccess);
    }

    fn reset_form(&mut self) {
        self.values.clear();
        self.effects.push(Effect::ResetForm);
    }

    fn focus_field(&mut self, field: FieldId) {
        self.focused = Some(field);
        self.effects.push(Effect::Focus(field));
    }

    fn schedule_success_hide(&mut self, after: Duration, ticket: HideTicket) {
        self.timers.schedule(after, ticket);
        self.effects.push(Effect::Schedule(after, ticket));
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        self.values.insert(field, value.to_string());
        self.effects.push(Effect::SetValue(field, value.to_string()));
    }

    fn announce(&mut self, message: &str) {
        self.effects.push(Effect::Announce(message.to_string()));
    }
}

/// A controller bound to a [`PageView`], with browser-like helpers
pub struct Page {
    pub form: FormController<PageView>,
}

impl Page {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            form: FormController::new(PageView::default(), config),
        }
    }

    pub fn view(&self) -> &PageView {
        self.form.view()
    }

    /// Set a value without firing events, like autofill
    pub fn fill(&mut self, field: FieldId, value: &str) {
        self.form.view_mut().values.insert(field, value.to_string());
    }

    /// Replace the field's value and fire an input event
    pub fn type_value(&mut self, field: FieldId, value: &str) {
        self.form.view_mut().values.insert(field, value.to_string());
        self.form.input(field, value);
    }

    pub fn blur(&mut self, field: FieldId) {
        let value = self.view().value(field).to_string();
        self.form.blur(field, &value);
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        for field in FieldId::ALL {
            snapshot.set(field, self.view().value(field));
        }
        snapshot
    }

    /// Advance the clock and deliver any timers that fired
    pub fn wait(&mut self, ms: u64) {
        let fired = self.form.view_mut().timers.advance(Duration::from_millis(ms));
        for ticket in fired {
            self.form.expire_success(ticket);
        }
    }

    pub fn clear_effects(&mut self) {
        self.form.view_mut().effects.clear();
    }
}
