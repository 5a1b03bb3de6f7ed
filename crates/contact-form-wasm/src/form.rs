// File: src/form.rs
// Purpose: Mount the contact form controller on the DOM

use crate::dom::{self, TextControl};
use crate::parse_config;
use crate::view::{DomView, FieldElements, SharedForm};
use contact_form::{FieldId, FormController};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

/// Attach blur/focus/input/submit handling to `#contactForm`.
///
/// Every `.form-input` must carry the name of a known field and every
/// element the controller writes to must exist; otherwise mounting fails and
/// no listener is attached.
#[wasm_bindgen(js_name = mountContactForm)]
pub fn mount_contact_form(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let form: HtmlFormElement =
        dom::cast(dom::element_by_id(&document, "contactForm")?, "a form")?;
    let success_panel = dom::element_by_id(&document, "successMessage")?;

    let fields = FieldId::ALL
        .into_iter()
        .map(|field| FieldElements::lookup(&document, field))
        .collect::<Result<Vec<_>, _>>()?;

    let inputs = registered_inputs(&form)?;

    let announce_for = Duration::from_millis(config.announce.clear_after_ms);
    let shared: SharedForm = Rc::new_cyclic(|controller| {
        let view = DomView::new(
            window,
            document,
            form.clone(),
            success_panel,
            fields,
            controller.clone(),
            announce_for,
        );
        RefCell::new(FormController::new(view, &config))
    });

    for (field, control) in inputs {
        attach_field_listeners(&shared, field, control)?;
    }

    let submit_form = Rc::clone(&shared);
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        with_form(&submit_form, |form| {
            let snapshot = form.view().snapshot();
            form.submit(snapshot);
        });
    })?;

    tracing::debug!("contact form mounted");
    Ok(())
}

/// Every `.form-input` in the form, resolved to its field
fn registered_inputs(form: &HtmlFormElement) -> Result<Vec<(FieldId, TextControl)>, JsValue> {
    let nodes = form.query_selector_all(".form-input")?;
    let mut inputs = Vec::with_capacity(nodes.length() as usize);

    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let element: Element = node
            .dyn_into()
            .map_err(|_| JsValue::from_str(".form-input is not an element"))?;
        let name = element.get_attribute("name").unwrap_or_default();
        let field: FieldId = name
            .parse()
            .map_err(|e: contact_form::ValidationError| JsValue::from_str(&e.to_string()))?;

        inputs.push((field, TextControl::from_element(element)?));
    }

    Ok(inputs)
}

fn attach_field_listeners(
    shared: &SharedForm,
    field: FieldId,
    control: TextControl,
) -> Result<(), JsValue> {
    let target = control.target().clone();

    let form = Rc::clone(shared);
    let blur_control = control.clone();
    dom::listen(&target, "blur", move |_| {
        with_form(&form, |form| form.blur(field, &blur_control.value()));
    })?;

    let form = Rc::clone(shared);
    dom::listen(&target, "focus", move |_| {
        with_form(&form, |form| form.focus(field));
    })?;

    let form = Rc::clone(shared);
    dom::listen(&target, "input", move |_| {
        with_form(&form, |form| form.input(field, &control.value()));
    })?;

    Ok(())
}

/// Run a handler against the controller.
///
/// Focusing a field while handling a submit fires `focus` (and `blur` on the
/// previous field) synchronously. Those nested events are dropped so the
/// errors the submit just displayed stay visible.
fn with_form(form: &SharedForm, handler: impl FnOnce(&mut FormController<DomView>)) {
    match form.try_borrow_mut() {
        Ok(mut form) => handler(&mut form),
        Err(_) => tracing::trace!("nested form event ignored"),
    }
}
