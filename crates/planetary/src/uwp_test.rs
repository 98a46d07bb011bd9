use crate::starport::Starport;
use crate::uwp::{ProfileError, UwpElements};

const NO_NOTES: [&str; 0] = [];

#[test]
fn parse_reads_every_field() {
    let uwp = UwpElements::parse("B7A5873-D", ["Hi", "In"]).unwrap();

    assert_eq!(uwp.starport, Starport::B);
    assert_eq!(uwp.size, 7);
    assert_eq!(uwp.atmosphere, 10);
    assert_eq!(uwp.hydrographics, 5);
    assert_eq!(uwp.population, 8);
    assert_eq!(uwp.government, 7);
    assert_eq!(uwp.law_level, 3);
    assert_eq!(uwp.tech_level, 13);
    assert!(uwp.has_note("Hi"));
    assert!(uwp.has_note("In"));
}

#[test]
fn encode_round_trips() {
    for profile in ["A788899-C", "X000000-0", "E9C4A6B-8", "H200000-0"] {
        let uwp = UwpElements::parse(profile, NO_NOTES).unwrap();
        assert_eq!(uwp.encode(), profile);
        assert_eq!(uwp.to_string(), profile);
    }
}

#[test]
fn encode_marks_out_of_range_fields() {
    let uwp = UwpElements {
        size: 40,
        ..UwpElements::default()
    };
    assert_eq!(uwp.encode(), "X?00000-0");
}

#[test]
fn parse_rejects_wrong_length() {
    assert_eq!(
        UwpElements::parse("A788899", NO_NOTES),
        Err(ProfileError::Length(7))
    );
}

#[test]
fn parse_rejects_bad_starport() {
    assert_eq!(
        UwpElements::parse("Q788899-C", NO_NOTES),
        Err(ProfileError::Starport('Q'))
    );
}

#[test]
fn parse_rejects_bad_digit() {
    assert_eq!(
        UwpElements::parse("A78O899-C", NO_NOTES),
        Err(ProfileError::Digit {
            position: 3,
            found: 'O'
        })
    );
}

#[test]
fn parse_rejects_missing_separator() {
    assert_eq!(
        UwpElements::parse("A7888990C", NO_NOTES),
        Err(ProfileError::Separator('0'))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        ProfileError::Length(3).to_string(),
        "profile must be 9 characters, got 3"
    );
    assert_eq!(
        ProfileError::Starport('Q').to_string(),
        "unknown starport grade 'Q'"
    );
}

#[test]
fn government_helpers() {
    let mut uwp = UwpElements::parse("C566677-8", NO_NOTES).unwrap();
    assert!(uwp.is_populated());
    assert!(uwp.is_captive());
    uwp.government = 7;
    assert!(uwp.is_balkanized());
}

#[test]
fn notes_are_a_set() {
    let mut uwp = UwpElements::default();
    uwp.add_note("Hz");
    uwp.add_note("Hz");
    uwp.add_note("Ag");
    assert_eq!(uwp.note_list(), vec!["Ag".to_string(), "Hz".to_string()]);
    assert!(uwp.remove_note("Hz"));
    assert!(!uwp.remove_note("Hz"));
}

#[test]
fn lenient_parse_defaults_unknown_fields() {
    let (uwp, problem) = UwpElements::parse_lenient("X??????-?", ["Ba"]);

    assert_eq!(uwp.starport, Starport::X);
    assert_eq!(uwp.encode(), "X000000-0");
    assert!(uwp.has_note("Ba"));
    assert_eq!(
        problem,
        Some(ProfileError::Digit {
            position: 1,
            found: '?'
        })
    );
}

#[test]
fn lenient_parse_keeps_readable_fields() {
    let (uwp, problem) = UwpElements::parse_lenient("Q78?899-C", NO_NOTES);

    assert_eq!(uwp.starport, Starport::X);
    assert_eq!(uwp.size, 7);
    assert_eq!(uwp.hydrographics, 0);
    assert_eq!(uwp.population, 8);
    assert_eq!(uwp.tech_level, 12);
    assert_eq!(problem, Some(ProfileError::Starport('Q')));
}

#[test]
fn lenient_parse_pads_short_profiles() {
    let (uwp, problem) = UwpElements::parse_lenient("B7", NO_NOTES);
    assert_eq!(uwp.encode(), "B700000-0");
    assert_eq!(problem, Some(ProfileError::Length(2)));

    let (empty, _) = UwpElements::parse_lenient("", NO_NOTES);
    assert_eq!(empty.starport, Starport::X);
}

#[test]
fn lenient_parse_agrees_with_strict_on_valid_input() {
    let (uwp, problem) = UwpElements::parse_lenient("B7A5873-D", ["Hi"]);
    assert_eq!(problem, None);
    assert_eq!(uwp, UwpElements::parse("B7A5873-D", ["Hi"]).unwrap());
}
