// File: src/field.rs
// Purpose: Closed set of contact-form field identifiers

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one contact-form field.
///
/// Declaration order is the order fields are checked on submit and the order
/// used to pick which invalid field receives focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldId {
    /// All fields in submission order
    pub const ALL: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Phone, FieldId::Message];

    /// The `name`/`id` attribute used for this field in markup
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
        }
    }

    /// Id of the element that holds this field's error text (e.g. `emailError`)
    pub fn error_element_id(self) -> String {
        format!("{}Error", self.as_str())
    }

    /// Id of the success-panel element echoing this field (e.g. `displayEmail`)
    pub fn display_element_id(self) -> &'static str {
        match self {
            FieldId::Name => "displayName",
            FieldId::Email => "displayEmail",
            FieldId::Phone => "displayPhone",
            FieldId::Message => "displayMessage",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldId::Name),
            "email" => Ok(FieldId::Email),
            "phone" => Ok(FieldId::Phone),
            "message" => Ok(FieldId::Message),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}
