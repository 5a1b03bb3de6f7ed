//! String checks shared by the rule evaluator

use regex::Regex;

/// Length in Unicode scalar values, not bytes
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn meets_min_length(s: &str, min: usize) -> bool {
    char_len(s) >= min
}

pub fn within_max_length(s: &str, max: usize) -> bool {
    char_len(s) <= max
}

/// Whole-string match; patterns in the rule table are anchored
pub fn matches_pattern(s: &str, pattern: &Regex) -> bool {
    pattern.is_match(s)
}
