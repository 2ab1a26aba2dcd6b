//! Hexadecimal string validation.

/// Returns true if `s` is non-empty and every character is a hex digit.
/// Both cases are accepted; catalogue ids preserve whatever case the
/// service sent.
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}
