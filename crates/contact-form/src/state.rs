// File: src/state.rs
// Purpose: Per-field visible error state

use contact_form_validation::FieldId;
use std::collections::HashMap;

/// Which fields currently display an error, and the message shown.
///
/// A field is either showing exactly one message or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorState {
    errors: HashMap<FieldId, String>,
}

impl FieldErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Returns true if an error was visible before clearing
    pub fn clear(&mut self, field: FieldId) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// Check if field has a visible error
    pub fn has_error(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Get the displayed message for a field
    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    pub fn is_clear(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errored fields in submission order
    pub fn fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|field| self.has_error(*field))
            .collect()
    }
}
