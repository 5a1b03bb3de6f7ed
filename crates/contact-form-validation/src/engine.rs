// File: src/engine.rs
// Purpose: Evaluate a raw field value against its rule

use crate::error::{FieldInvalid, ValidationError};
use crate::field::FieldId;
use crate::rule::{FieldRule, ViolationKind};
use crate::string::{matches_pattern, meets_min_length, within_max_length};
use serde::Serialize;

/// Ordered violations for one evaluation of one field. Empty means valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub field: FieldId,
    pub violations: Vec<FieldInvalid>,
}

impl ValidationResult {
    fn new(field: FieldId) -> Self {
        Self {
            field,
            violations: Vec::new(),
        }
    }

    fn push(&mut self, reason: ViolationKind, message: &'static str) {
        self.violations.push(FieldInvalid {
            field: self.field,
            reason,
            message,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The message a form shows next to the field
    pub fn first_message(&self) -> Option<&'static str> {
        self.violations.first().map(|v| v.message)
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.message).collect()
    }

    pub fn reasons(&self) -> Vec<ViolationKind> {
        self.violations.iter().map(|v| v.reason).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldInvalid> {
        self.violations.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a FieldInvalid;
    type IntoIter = std::slice::Iter<'a, FieldInvalid>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Validate a single raw value.
///
/// Checks run on the trimmed value. A missing required value short-circuits;
/// the length and pattern checks are independent and all reported, in order
/// min length, max length, pattern.
pub fn validate_field(field: FieldId, raw: &str) -> ValidationResult {
    let rule = FieldRule::for_field(field);
    let value = raw.trim();
    let mut result = ValidationResult::new(field);

    if value.is_empty() {
        if let Some(message) = rule.required {
            result.push(ViolationKind::Required, message);
        }
        tracing::debug!(%field, valid = result.is_valid(), "validated empty value");
        return result;
    }

    if let Some(ref min) = rule.min_length {
        if !meets_min_length(value, min.limit) {
            result.push(ViolationKind::TooShort, min.message);
        }
    }

    if let Some(ref max) = rule.max_length {
        if !within_max_length(value, max.limit) {
            result.push(ViolationKind::TooLong, max.message);
        }
    }

    if let Some(ref pattern) = rule.pattern {
        if !matches_pattern(value, &pattern.limit) {
            result.push(ViolationKind::PatternMismatch, pattern.message);
        }
    }

    tracing::debug!(%field, violations = result.violations.len(), "validated value");
    result
}

/// Validate by markup name, failing on names with no rule
pub fn validate_named(name: &str, raw: &str) -> Result<ValidationResult, ValidationError> {
    let field: FieldId = name.parse()?;
    Ok(validate_field(field, raw))
}
