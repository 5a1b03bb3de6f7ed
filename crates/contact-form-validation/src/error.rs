// File: src/error.rs
// Purpose: Domain and integration errors for field validation

use crate::field::FieldId;
use crate::rule::ViolationKind;
use serde::Serialize;

/// A single failed check on one field.
///
/// These are always recovered locally: the controller shows `message` next to
/// the field and never propagates the error further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldInvalid {
    pub field: FieldId,
    pub reason: ViolationKind,
    pub message: &'static str,
}

/// Integration errors. These indicate a wiring defect, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field name that has no entry in the rule table
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}
