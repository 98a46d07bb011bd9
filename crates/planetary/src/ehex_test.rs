use proptest::prelude::*;

use crate::ehex::{EHEX_DIGITS, digit_value, encoded_value, in_code_list};

#[test]
fn decimal_digits() {
    assert_eq!(digit_value('0'), Some(0));
    assert_eq!(digit_value('9'), Some(9));
}

#[test]
fn letters_skip_i_and_o() {
    assert_eq!(digit_value('A'), Some(10));
    assert_eq!(digit_value('H'), Some(17));
    assert_eq!(digit_value('J'), Some(18));
    assert_eq!(digit_value('N'), Some(22));
    assert_eq!(digit_value('P'), Some(23));
    assert_eq!(digit_value('Z'), Some(33));
    assert_eq!(digit_value('I'), None);
    assert_eq!(digit_value('O'), None);
}

#[test]
fn unknown_characters() {
    assert_eq!(digit_value('?'), None);
    assert_eq!(digit_value('a'), None);
    assert_eq!(digit_value('-'), None);
}

#[test]
fn out_of_range_encodes_as_question_mark() {
    assert_eq!(encoded_value(-1), '?');
    assert_eq!(encoded_value(34), '?');
    assert_eq!(encoded_value(33), 'Z');
}

#[test]
fn code_list_membership() {
    assert!(in_code_list(0, "0"));
    assert!(in_code_list(12, "ABC"));
    assert!(!in_code_list(13, "ABC"));
    assert!(!in_code_list(-1, "0123"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_digit_decodes_to_its_position(value in 0i32..34) {
        let digit = encoded_value(value);
        prop_assert_eq!(digit_value(digit), Some(value));
        prop_assert!(EHEX_DIGITS.contains(digit));
    }
}
