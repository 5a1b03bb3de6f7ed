//! Contact Form WASM
//!
//! WebAssembly bindings for the contact form. Exposes the validation engine to
//! JavaScript and mounts the form controller on the page's existing markup.
//!
//! ```javascript
//! import init, { mountContactForm, mountGreeting } from './contact_form_wasm.js';
//!
//! await init();
//! mountGreeting();
//! mountContactForm({ success: { auto_hide_ms: 10000 } });
//! ```

use contact_form::validation;
use contact_form::Config;
use wasm_bindgen::prelude::*;

mod dom;
mod form;
mod greeting;
mod view;

pub use form::mount_contact_form;
pub use greeting::{mount_greeting, LocalStorageNameStore};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate a single field value
///
/// # Returns
/// Array of messages in rule order (empty if valid). Throws for a field name
/// that has no rule.
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateField('email', 'jo@');
/// // ["Please enter a valid email address"]
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(field_name: &str, value: &str) -> Result<JsValue, JsValue> {
    let result = validation::validate_named(field_name, value)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(serde_wasm_bindgen::to_value(&result.messages())?)
}

/// Quick phone formatting, `(XXX) XXX-XXXX`
#[wasm_bindgen(js_name = formatPhone)]
pub fn format_phone_js(value: &str) -> String {
    contact_form::format_phone(value)
}

/// Accepts `undefined`/`null` for the defaults or an object shaped like
/// `contact-form.toml`
fn parse_config(value: JsValue) -> Result<Config, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Config::default());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}
