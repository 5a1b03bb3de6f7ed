// File: src/rule.rs
// Purpose: Declarative rule table, one immutable FieldRule per field

use crate::field::FieldId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Kind of check that failed, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    Required,
    TooShort,
    TooLong,
    PatternMismatch,
}

/// A limit (or pattern) and the message shown when a value breaks it
#[derive(Debug, Clone)]
pub struct Check<T> {
    pub limit: T,
    pub message: &'static str,
}

impl<T> Check<T> {
    fn new(limit: T, message: &'static str) -> Self {
        Self { limit, message }
    }
}

/// Constraints for one named field. A check that is present always carries
/// its message.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Message for an empty value; `None` means the field is optional
    pub required: Option<&'static str>,
    pub min_length: Option<Check<usize>>,
    pub max_length: Option<Check<usize>>,
    pub pattern: Option<Check<Regex>>,
}

impl FieldRule {
    /// The rule for `field`. The match keeps the table exhaustive.
    pub fn for_field(field: FieldId) -> &'static FieldRule {
        match field {
            FieldId::Name => &NAME_RULE,
            FieldId::Email => &EMAIL_RULE,
            FieldId::Phone => &PHONE_RULE,
            FieldId::Message => &MESSAGE_RULE,
        }
    }
}

fn pattern(source: &'static str, message: &'static str) -> Option<Check<Regex>> {
    Some(Check::new(
        Regex::new(source).expect("built-in pattern compiles"),
        message,
    ))
}

fn length(limit: usize, message: &'static str) -> Option<Check<usize>> {
    Some(Check::new(limit, message))
}

static NAME_RULE: Lazy<FieldRule> = Lazy::new(|| FieldRule {
    required: Some("Name is required"),
    min_length: length(2, "Name must be at least 2 characters"),
    max_length: length(50, "Name must not exceed 50 characters"),
    pattern: pattern(r"^[a-zA-Z\s]+$", "Name can only contain letters and spaces"),
});

static EMAIL_RULE: Lazy<FieldRule> = Lazy::new(|| FieldRule {
    required: Some("Email is required"),
    min_length: None,
    max_length: None,
    pattern: pattern(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
        "Please enter a valid email address",
    ),
});

static PHONE_RULE: Lazy<FieldRule> = Lazy::new(|| FieldRule {
    required: Some("Phone number is required"),
    min_length: length(10, "Phone number must be at least 10 digits"),
    max_length: length(20, "Phone number must not exceed 20 characters"),
    pattern: pattern(r"^[0-9\s\-+()]+$", "Please enter a valid phone number"),
});

static MESSAGE_RULE: Lazy<FieldRule> = Lazy::new(|| FieldRule {
    required: Some("Message is required"),
    min_length: length(10, "Message must be at least 10 characters"),
    max_length: length(500, "Message must not exceed 500 characters"),
    pattern: None,
});
