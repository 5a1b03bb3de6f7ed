// File: src/view.rs
// Purpose: FormView backed by the page's existing contact form markup

use crate::dom::{self, TextControl};
use contact_form::{FieldId, FormController, FormSnapshot, FormView, HideTicket};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

pub type SharedForm = Rc<RefCell<FormController<DomView>>>;

/// Elements for one field: the control, its error slot, and its echo in the
/// success panel
pub struct FieldElements {
    pub control: TextControl,
    pub error: Element,
    pub display: Element,
}

impl FieldElements {
    pub fn lookup(document: &Document, field: FieldId) -> Result<Self, JsValue> {
        Ok(Self {
            control: TextControl::from_element(dom::element_by_id(document, field.as_str())?)?,
            error: dom::element_by_id(document, &field.error_element_id())?,
            display: dom::element_by_id(document, field.display_element_id())?,
        })
    }
}

pub struct DomView {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    success_panel: Element,
    /// Indexed in `FieldId::ALL` order
    fields: Vec<FieldElements>,
    controller: Weak<RefCell<FormController<DomView>>>,
    announce_for: Duration,
}

impl DomView {
    pub fn new(
        window: Window,
        document: Document,
        form: HtmlFormElement,
        success_panel: Element,
        fields: Vec<FieldElements>,
        controller: Weak<RefCell<FormController<DomView>>>,
        announce_for: Duration,
    ) -> Self {
        Self {
            window,
            document,
            form,
            success_panel,
            fields,
            controller,
            announce_for,
        }
    }

    fn field(&self, field: FieldId) -> &FieldElements {
        &self.fields[field as usize]
    }

    /// Current raw values of all four inputs
    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        for field in FieldId::ALL {
            snapshot.set(field, self.field(field).control.value());
        }
        snapshot
    }

    fn console_log_submission(submission: &FormSnapshot) {
        match serde_wasm_bindgen::to_value(submission) {
            Ok(data) => web_sys::console::log_2(&"Form submitted successfully:".into(), &data),
            Err(e) => tracing::warn!(error = %e, "could not serialize submission for console"),
        }
    }
}

impl FormView for DomView {
    fn show_error(&mut self, field: FieldId, message: &str) {
        let elements = self.field(field);
        dom::log_failure(elements.control.html().class_list().add_1("error"), "add error class");
        elements.error.set_text_content(Some(message));
    }

    fn clear_error(&mut self, field: FieldId) {
        let elements = self.field(field);
        dom::log_failure(
            elements.control.html().class_list().remove_1("error"),
            "remove error class",
        );
        elements.error.set_text_content(Some(""));
    }

    fn show_success(&mut self, submission: &FormSnapshot) {
        Self::console_log_submission(submission);
        for (field, value) in submission.iter() {
            self.field(field).display.set_text_content(Some(value));
        }
        dom::log_failure(self.success_panel.class_list().add_1("show"), "show success panel");
    }

    fn hide_success(&mut self) {
        dom::log_failure(self.success_panel.class_list().remove_1("show"), "hide success panel");
    }

    fn reset_form(&mut self) {
        self.form.reset();
    }

    fn focus_field(&mut self, field: FieldId) {
        let element = self.field(field).control.html();

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);

        dom::log_failure(element.focus(), "focus field");
    }

    fn schedule_success_hide(&mut self, after: Duration, ticket: HideTicket) {
        let controller = self.controller.clone();
        let scheduled = dom::set_timeout(&self.window, after, move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            // Timers run from the event loop, never inside another handler
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.expire_success(ticket);
                }
                Err(_) => tracing::warn!(?ticket, "form busy, success hide skipped"),
            };
        });
        dom::log_failure(scheduled.map(|_| ()), "schedule success hide");
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        self.field(field).control.set_value(value);
    }

    fn announce(&mut self, message: &str) {
        let Some(body) = self.document.body() else {
            return;
        };

        let announcement = match self.document.create_element("div") {
            Ok(element) => element,
            Err(e) => {
                tracing::warn!(error = ?e, "could not create announcement");
                return;
            }
        };
        dom::log_failure(announcement.set_attribute("role", "alert"), "set alert role");
        dom::log_failure(announcement.set_attribute("aria-live", "assertive"), "set aria-live");
        announcement.set_class_name("sr-only");
        announcement.set_text_content(Some(message));

        dom::log_failure(body.append_child(&announcement).map(|_| ()), "append announcement");

        let removal = dom::set_timeout(&self.window, self.announce_for, move || {
            announcement.remove();
        });
        dom::log_failure(removal.map(|_| ()), "schedule announcement removal");
    }
}
