// File: src/snapshot.rs
// Purpose: Raw field values captured at submission time

use contact_form_validation::{FieldId, ValidationError};
use serde::{Deserialize, Serialize};

/// The four raw, untrimmed values of the form at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl FormSnapshot {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Build from `(field name, value)` pairs such as a form's entries.
    ///
    /// Unknown names are a wiring defect and fail immediately. Fields that are
    /// not mentioned stay empty.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut snapshot = Self::default();
        for (name, value) in pairs {
            let field: FieldId = name.parse()?;
            snapshot.set(field, value);
        }
        Ok(snapshot)
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Values in submission order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
