use planetary::UwpElements;
use stellar::DriveLimits;

use crate::climate::{apply_climate_notes, climate_notes};

fn limits(habitable_zone: i32) -> DriveLimits {
    DriveLimits {
        maneuver: 6,
        jump: 2,
        gravity: 0,
        precluded: -1,
        habitable_zone,
    }
}

fn temperate() -> UwpElements {
    UwpElements {
        size: 7,
        atmosphere: 6,
        hydrographics: 5,
        ..UwpElements::default()
    }
}

fn barren() -> UwpElements {
    UwpElements::default()
}

#[test]
fn inner_orbits_are_tidally_locked() {
    assert_eq!(climate_notes(0, &limits(3), &barren()), vec!["Tz"]);
    assert_eq!(climate_notes(1, &limits(3), &barren()), vec!["Tz"]);
}

#[test]
fn habitable_zone() {
    assert_eq!(climate_notes(3, &limits(3), &barren()), vec!["Hz"]);
    assert_eq!(climate_notes(0, &limits(0), &barren()), vec!["Tz", "Hz"]);
}

#[test]
fn one_step_inward() {
    assert_eq!(climate_notes(2, &limits(3), &temperate()), vec!["Tr"]);
    assert_eq!(climate_notes(2, &limits(3), &barren()), vec!["Ho"]);
}

#[test]
fn one_step_outward() {
    assert_eq!(climate_notes(4, &limits(3), &temperate()), vec!["Tu"]);
    assert_eq!(climate_notes(4, &limits(3), &barren()), vec!["Co"]);
    assert_eq!(climate_notes(1, &limits(0), &barren()), vec!["Tz", "Co"]);
}

#[test]
fn far_orbits_are_frozen() {
    assert_eq!(climate_notes(5, &limits(3), &temperate()), vec!["Fr"]);
    assert_eq!(climate_notes(19, &limits(3), &barren()), vec!["Fr"]);
}

#[test]
fn apply_adds_to_existing_notes() {
    let mut profile = temperate();
    profile.add_note("Ri");
    apply_climate_notes(3, &limits(3), &mut profile);
    assert!(profile.has_note("Ri"));
    assert!(profile.has_note("Hz"));
}
