//! Extended hexadecimal digits
//!
//! Profile fields are single characters drawn from `0-9` then `A-Z` with
//! `I` and `O` left out, so a digit can never be mistaken for `1` or `0`.

/// Digit alphabet, indexed by value
pub const EHEX_DIGITS: &str = "0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Value of one digit, `None` for characters outside the alphabet
pub fn digit_value(c: char) -> Option<i32> {
    EHEX_DIGITS.find(c).map(|idx| idx as i32)
}

/// Digit for a value; values outside the alphabet encode as `?`
pub fn encoded_value(value: i32) -> char {
    usize::try_from(value)
        .ok()
        .and_then(|idx| EHEX_DIGITS.chars().nth(idx))
        .unwrap_or('?')
}

/// True when the encoded form of `value` appears in `codes`
///
/// # Example
/// ```
/// use planetary::in_code_list;
///
/// assert!(in_code_list(10, "9ABC"));
/// assert!(!in_code_list(4, "9ABC"));
/// ```
pub fn in_code_list(value: i32, codes: &str) -> bool {
    let digit = encoded_value(value);
    digit != '?' && codes.contains(digit)
}
