//! Contact Form Validation
//!
//! Pure validation for the four contact-form fields. Each field has one immutable
//! [`FieldRule`]; [`validate_field`] turns a raw input string into an ordered
//! [`ValidationResult`].
//!
//! Used by the native form controller and by the WASM client adapter alike.

pub mod engine;
pub mod error;
pub mod field;
pub mod rule;
pub mod string;

pub use engine::{validate_field, validate_named, ValidationResult};
pub use error::{FieldInvalid, ValidationError};
pub use field::FieldId;
pub use rule::{Check, FieldRule, ViolationKind};
