use dice::{ChaChaFlux, ScriptedFlux};
use planetary::{GOVERNMENT_CAPTIVE, Starport, UwpElements};
use proptest::prelude::*;
use star_system::{BodyId, PlanetParams, StarParams, StarSystem};

use crate::colony::*;
use crate::error::{Diagnostics, GenerationError};
use crate::synthesis::{UwpModifiers, make_world};

/// Three placed bodies to stand in as owners
fn owners() -> Vec<BodyId> {
    let mut system = StarSystem::new(StarParams {
        name: "Sol".to_string(),
        spectral: "G2 V".to_string(),
        capacity: 20,
    });
    let root = system.root();
    (0..3)
        .map(|orbit| {
            system
                .place_planet(
                    root,
                    orbit,
                    PlanetParams {
                        name: format!("Sol-{}", orbit),
                        profile: UwpElements::default(),
                        capacity: 0,
                        primary: false,
                    },
                )
                .unwrap()
        })
        .collect()
}

fn owner() -> UwpElements {
    let mut owner = UwpElements::parse("A788899-C", Vec::<String>::new()).unwrap();
    owner.population_digit = 5;
    owner
}

fn colony(stream: &mut ScriptedFlux) -> (UwpElements, Diagnostics) {
    let mut diagnostics = Diagnostics::new("1910");
    let colony = make_colony(
        stream,
        &UwpModifiers::default(),
        &owner(),
        "O:1910",
        8,
        &mut diagnostics,
    );
    (colony, diagnostics)
}

// ============================================================================
// Owners
// ============================================================================

#[test]
fn no_candidates_no_owner() {
    let mut stream = ScriptedFlux::constant(1);
    assert_eq!(choose_owner(&mut stream, &[], &[]), None);
    assert_eq!(stream.rolls_consumed(), 0);
}

#[test]
fn single_owner_needs_a_one() {
    let ids = owners();
    assert_eq!(
        choose_owner(&mut ScriptedFlux::constant(1), &ids[..1], &[]),
        Some(ids[0])
    );
    assert_eq!(choose_owner(&mut ScriptedFlux::constant(2), &ids[..1], &[]), None);
}

#[test]
fn more_owners_raise_the_odds() {
    let ids = owners();
    // d6 = 3 passes against three candidates, then d3 = 3 picks the last
    assert_eq!(choose_owner(&mut ScriptedFlux::constant(3), &ids, &[]), Some(ids[2]));
}

#[test]
fn excluded_owner_is_skipped() {
    let ids = owners();
    let pick = choose_owner(&mut ScriptedFlux::constant(1), &ids[..2], &ids[..1]);
    assert_eq!(pick, Some(ids[1]));
    assert_eq!(choose_owner(&mut ScriptedFlux::constant(1), &ids[..1], &ids[..1]), None);
}

#[test]
fn tag_names_the_owner() {
    assert_eq!(ownership_tag(&owner(), "1910-3"), "O:1910-3");
}

#[test]
fn tag_is_transitive() {
    let mut owner = owner();
    owner.add_note("O:1910");
    assert_eq!(ownership_tag(&owner, "1910-3"), "O:1910");
}

// ============================================================================
// Colony profiles
// ============================================================================

#[test]
fn open_ended_roll_adds_sixes() {
    let mut diagnostics = Diagnostics::new("1910");
    let mut stream = ScriptedFlux::new(vec![6, 6, 2], 1);
    assert_eq!(open_ended_d6(&mut stream, 8, &mut diagnostics), 14);
    assert!(diagnostics.is_empty());
}

#[test]
fn open_ended_roll_is_capped() {
    let mut diagnostics = Diagnostics::new("1910");
    let mut stream = ScriptedFlux::constant(6);
    assert_eq!(open_ended_d6(&mut stream, 3, &mut diagnostics), 24);
    assert!(matches!(
        diagnostics.entries(),
        [GenerationError::RerollLimit { limit: 3, .. }]
    ));
}

#[test]
fn captive_colony() {
    let (colony, diagnostics) = colony(&mut ScriptedFlux::constant(3));
    // Status roll 3 is captive; tech is owner +d3-2
    assert_eq!(colony.encode(), "G666469-D");
    assert_eq!(colony.government, GOVERNMENT_CAPTIVE);
    assert!(colony.has_note(COLONY_NOTE));
    assert!(colony.has_note("O:1910"));
    assert!(!colony.has_note(ABANDONED_NOTE));
    assert!(diagnostics.is_empty());
}

#[test]
fn independent_colony_shares_owner_institutions() {
    let (colony, _) = colony(&mut ScriptedFlux::constant(5));
    assert_eq!(colony.encode(), "FAA6889-C");
    // Equal population keeps the mantissa under the owner's
    assert_eq!(colony.population_digit, 5);
}

#[test]
fn colony_without_people_is_abandoned() {
    let (colony, _) = colony(&mut ScriptedFlux::constant(1));
    assert_eq!(colony.starport, Starport::X);
    assert_eq!(colony.population, 0);
    assert_eq!(colony.government, 0);
    assert_eq!(colony.law_level, 0);
    assert_eq!(colony.tech_level, 0);
    assert!(colony.has_note(ABANDONED_NOTE));
    assert!(colony.has_note(COLONY_NOTE));
}

#[test]
fn low_tech_colony_dies_back() {
    let mut owner = UwpElements::parse("C5656A4-1", Vec::<String>::new()).unwrap();
    owner.population_digit = 3;
    let mut diagnostics = Diagnostics::new("1910");
    // Status roll 5 is independent at TL 1; a threshold roll of 6 beats it
    let colony = make_colony(
        &mut ScriptedFlux::new(vec![3, 3, 3, 3, 3, 3, 3, 3, 4, 5, 3, 6], 3),
        &UwpModifiers::default(),
        &owner,
        "O:1910",
        8,
        &mut diagnostics,
    );
    assert!(colony.has_note(ABANDONED_NOTE));
    assert_eq!(colony.population, 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn colony_never_outgrows_its_owner(seed in 0u32..10_000) {
        let mut stream = ChaChaFlux::new(format!("colony/{}", seed));
        let owner = make_world(&mut stream, &UwpModifiers::default());
        let mut diagnostics = Diagnostics::new("1910");
        let colony = make_colony(
            &mut stream,
            &UwpModifiers::default(),
            &owner,
            "O:1910",
            64,
            &mut diagnostics,
        );

        prop_assert!(colony.population <= owner.population);
        prop_assert!(colony.starport <= owner.starport);
        prop_assert!(colony.has_note(COLONY_NOTE));
        if !colony.has_note(ABANDONED_NOTE) {
            prop_assert!(colony.population > 0);
            prop_assert!(
                colony.government == GOVERNMENT_CAPTIVE || colony.government == owner.government
            );
            prop_assert_eq!(colony.law_level, owner.law_level);
        }
    }
}
