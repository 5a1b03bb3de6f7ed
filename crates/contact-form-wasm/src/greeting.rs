// File: src/greeting.rs
// Purpose: Name prompt backed by localStorage

use crate::dom::{self, TextControl};
use crate::parse_config;
use contact_form::{Greeter, GreetingError, GreetingState, NameStore};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, Storage, Window};

/// Stores the visitor's name under a single `localStorage` key
pub struct LocalStorageNameStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageNameStore {
    pub fn new(window: &Window, key: impl Into<String>) -> Self {
        // Storage is unavailable in some private browsing modes
        let storage = window.local_storage().ok().flatten();
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl NameStore for LocalStorageNameStore {
    fn load(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(&self.key).ok().flatten()
    }

    fn save(&mut self, name: &str) -> Result<(), GreetingError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| GreetingError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(&self.key, name)
            .map_err(|e| GreetingError::Storage(format!("{:?}", e)))
    }
}

struct GreetingElements {
    input: TextControl,
    wrapper: HtmlElement,
    welcome: HtmlElement,
    display: HtmlElement,
}

impl GreetingElements {
    fn lookup(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            input: TextControl::from_element(dom::element_by_id(document, "userName")?)?,
            wrapper: dom::cast(dom::element_by_id(document, "nameInputWrapper")?, "an HTML element")?,
            welcome: dom::cast(dom::element_by_id(document, "welcomeMessage")?, "an HTML element")?,
            display: dom::cast(dom::element_by_id(document, "userNameDisplay")?, "an HTML element")?,
        })
    }

    fn show_welcome(&self, name: &str) {
        dom::log_failure(self.wrapper.style().set_property("display", "none"), "hide name prompt");
        dom::log_failure(self.welcome.style().set_property("display", "block"), "show welcome");
        self.display.set_text_content(Some(name));
    }

    /// Focus the empty input and outline it for a moment
    fn flag_empty(&self, window: &Window, highlight_for: Duration) {
        let input = self.input.html().clone();
        dom::log_failure(input.focus(), "focus name input");
        dom::log_failure(
            input.style().set_property("border-color", "var(--accent-color)"),
            "highlight name input",
        );

        let reset = dom::set_timeout(window, highlight_for, move || {
            dom::log_failure(input.style().set_property("border-color", ""), "reset name input");
        });
        dom::log_failure(reset.map(|_| ()), "schedule highlight reset");
    }
}

/// Restore the stored greeting and wire the name prompt.
///
/// Pages without a `#submitName` button have no greeting; that is not an error.
#[wasm_bindgen(js_name = mountGreeting)]
pub fn mount_greeting(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let Some(button) = document.get_element_by_id("submitName") else {
        return Ok(());
    };
    let button: HtmlElement = dom::cast(button, "an HTML element")?;

    let elements = Rc::new(GreetingElements::lookup(&document)?);
    let store = LocalStorageNameStore::new(&window, config.greeting.storage_key.clone());
    let greeter = Rc::new(RefCell::new(Greeter::new(store)));

    if let GreetingState::Welcome(name) = greeter.borrow().restore() {
        elements.show_welcome(&name);
    }

    let highlight_for = Duration::from_millis(config.greeting.highlight_ms);
    let click_elements = Rc::clone(&elements);
    dom::listen(&button, "click", move |_| {
        let raw = click_elements.input.value();
        match greeter.borrow_mut().submit(&raw) {
            Ok(GreetingState::Welcome(name)) => click_elements.show_welcome(&name),
            Ok(GreetingState::Prompt) => {}
            Err(GreetingError::EmptyName) => click_elements.flag_empty(&window, highlight_for),
            Err(e) => tracing::warn!(error = %e, "could not store visitor name"),
        }
    })?;

    // Enter in the name input submits
    let enter_button = button.clone();
    dom::listen(elements.input.target(), "keypress", move |event| {
        let is_enter = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Enter");
        if is_enter {
            enter_button.click();
        }
    })?;

    Ok(())
}
