// File: src/phone.rs
// Purpose: As-you-type phone number formatting

/// Format digits as a US number: `(XXX) XXX-XXXX`.
///
/// Everything that is not an ASCII digit is dropped first. Up to three digits
/// are left as they are, up to six become `(XXX) YYY`, and anything longer is
/// cut to ten digits.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        len => format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..len.min(10)]
        ),
    }
}
