//! Hex color validation for palette values.

/// Returns true when `value` is `#` followed by 3, 4, 6, or 8 hex digits.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
