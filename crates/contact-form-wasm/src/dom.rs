// File: src/dom.rs
// Purpose: Element lookup and small DOM helpers

use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Look up a required element; a missing one is a markup defect
pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

pub fn cast<T: JsCast>(element: Element, expected: &str) -> Result<T, JsValue> {
    element
        .dyn_into::<T>()
        .map_err(|el| JsValue::from_str(&format!("#{} is not {}", el.id(), expected)))
}

/// An `<input>` or `<textarea>`
#[derive(Clone)]
pub enum TextControl {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextControl {
    pub fn from_element(element: Element) -> Result<Self, JsValue> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(TextControl::Input(input)),
            Err(element) => element,
        };
        cast::<HtmlTextAreaElement>(element, "a text control").map(TextControl::TextArea)
    }

    pub fn value(&self) -> String {
        match self {
            TextControl::Input(input) => input.value(),
            TextControl::TextArea(area) => area.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            TextControl::Input(input) => input.set_value(value),
            TextControl::TextArea(area) => area.set_value(value),
        }
    }

    pub fn html(&self) -> &HtmlElement {
        match self {
            TextControl::Input(input) => input,
            TextControl::TextArea(area) => area,
        }
    }

    pub fn target(&self) -> &EventTarget {
        self.html()
    }
}

/// Register an event listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

/// One-shot `setTimeout`
pub fn set_timeout<F>(window: &Window, after: Duration, callback: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    let millis = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<js_sys::Function>(),
        millis,
    )
}

/// DOM writes rarely fail; when one does, log it and keep handling events
pub fn log_failure(result: Result<(), JsValue>, action: &str) {
    if let Err(e) = result {
        tracing::warn!(action, error = ?e, "DOM update failed");
    }
}
