use dice::{ChaChaFlux, ScriptedFlux};
use planetary::{Starport, UwpElements};
use proptest::prelude::*;

use crate::synthesis::*;

// ============================================================================
// Fresh worlds
// ============================================================================

#[test]
fn middling_rolls() {
    let world = make_world(&mut ScriptedFlux::constant(3), &UwpModifiers::default());
    assert_eq!(world.encode(), "G666444-7");
    assert_eq!(world.population_digit, 3);
    assert!(world.notes.is_empty());
}

#[test]
fn high_rolls_explode_population() {
    // 2d6-2 = 10 is replaced by 2d6+3
    let world = make_world(&mut ScriptedFlux::constant(6), &UwpModifiers::default());
    assert_eq!(world.encode(), "FCC8FFF-J");
}

#[test]
fn low_rolls_leave_world_empty() {
    let world = make_world(&mut ScriptedFlux::constant(1), &UwpModifiers::default());
    assert_eq!(world.encode(), "H222000-0");
    assert_eq!(world.population_digit, 0);
}

#[test]
fn population_is_capped() {
    let mods = UwpModifiers {
        max_population: 4,
        ..UwpModifiers::default()
    };
    let world = make_world(&mut ScriptedFlux::constant(6), &mods);
    assert_eq!(world.population, 4);
}

#[test]
fn size_respects_cap_and_forced_size() {
    let capped = UwpModifiers {
        max_size: 5,
        ..UwpModifiers::default()
    };
    assert_eq!(roll_size(&mut ScriptedFlux::constant(6), &capped), 5);

    let mut stream = ScriptedFlux::constant(6);
    let forced = belt_modifiers(MAX_POPULATION);
    assert_eq!(roll_size(&mut stream, &forced), 0);
    assert_eq!(stream.rolls_consumed(), 0);
}

#[test]
fn belt_keeps_its_note() {
    let world = make_world(&mut ScriptedFlux::constant(3), &belt_modifiers(MAX_POPULATION));
    assert_eq!(world.size, 0);
    assert_eq!(world.hydrographics, 0);
    assert!(world.has_note("As"));
}

#[test]
fn small_world_is_dry_but_rolls_flux() {
    let mut stream = ScriptedFlux::constant(6);
    assert_eq!(roll_hydrographics(&mut stream, 1, 8, 0), 0);
    assert_eq!(stream.rolls_consumed(), 2);
}

#[test]
fn exotic_atmosphere_dries_world() {
    let mut stream = ScriptedFlux::constant(3);
    assert_eq!(roll_hydrographics(&mut stream, 8, 10, 0), 6);
    assert_eq!(roll_hydrographics(&mut stream, 8, 5, 0), 5);
}

// ============================================================================
// Starports
// ============================================================================

#[test]
fn starport_table() {
    assert_eq!(roll_starport(&mut ScriptedFlux::constant(4), 0, None), Starport::F);
    assert_eq!(roll_starport(&mut ScriptedFlux::constant(3), 0, None), Starport::G);
    assert_eq!(roll_starport(&mut ScriptedFlux::constant(2), 0, None), Starport::H);
    assert_eq!(roll_starport(&mut ScriptedFlux::constant(2), -2, None), Starport::X);
}

#[test]
fn starport_is_capped() {
    assert_eq!(
        roll_starport(&mut ScriptedFlux::constant(6), 0, Some(Starport::X)),
        Starport::X
    );
    assert_eq!(
        roll_starport(&mut ScriptedFlux::constant(6), 0, Some(Starport::A)),
        Starport::F
    );
}

#[test]
fn low_cap_may_improvise() {
    let kept = roll_starport(&mut ScriptedFlux::new(vec![6, 3], 1), 0, Some(Starport::G));
    assert_eq!(kept, Starport::G);

    let improvised = roll_starport(&mut ScriptedFlux::new(vec![6, 1], 1), 0, Some(Starport::G));
    assert_eq!(improvised, Starport::H);
}

// ============================================================================
// Tech level
// ============================================================================

#[test]
fn unpopulated_world_has_no_tech() {
    let profile = UwpElements::parse("A788000-0", Vec::<String>::new()).unwrap();
    let mut stream = ScriptedFlux::constant(6);
    assert_eq!(roll_tech_level(&mut stream, &profile, 3), 0);
    assert_eq!(stream.rolls_consumed(), 0);
}

#[test]
fn tech_level_modifiers() {
    // A +6, size 1 +2, atm 0 +1, pop 9 +2, gov 13 -2
    let profile = UwpElements::parse("A1009D0-0", Vec::<String>::new()).unwrap();
    assert_eq!(roll_tech_level(&mut ScriptedFlux::constant(1), &profile, 0), 2 + 9);

    let profile = UwpElements::parse("X667500-0", Vec::<String>::new()).unwrap();
    assert_eq!(roll_tech_level(&mut ScriptedFlux::constant(1), &profile, 0), 2 - 4 + 1 + 1);
}

#[test]
fn tech_level_is_floored() {
    let profile = UwpElements::parse("X667800-0", Vec::<String>::new()).unwrap();
    assert_eq!(roll_tech_level(&mut ScriptedFlux::constant(1), &profile, -10), 0);
}

// ============================================================================
// Other modes
// ============================================================================

#[test]
fn empty_world_has_no_society() {
    let world = make_empty(&mut ScriptedFlux::constant(6), &UwpModifiers::default());
    assert_eq!(world.encode(), "XCC8000-0");
}

#[test]
fn gas_giant() {
    let giant = make_gas_giant(&mut ScriptedFlux::constant(3));
    assert_eq!(giant.encode(), "XRE0000-0");
    assert!(giant.has_note("GG"));
}

#[test]
fn gas_giant_offset_depends_on_size() {
    assert_eq!(gas_giant_offset(&mut ScriptedFlux::constant(3), 25), 1);
    assert_eq!(gas_giant_offset(&mut ScriptedFlux::constant(3), 21), 2);
}

#[test]
fn ring() {
    assert_eq!(make_ring().encode(), "X010000-0");
}

// ============================================================================
// Zones
// ============================================================================

#[test]
fn inner_zone_table() {
    let roll = |face| ZoneProfile::roll(&mut ScriptedFlux::constant(face), 0, false);
    assert_eq!(roll(1), ZoneProfile::Inferno);
    assert_eq!(roll(2), ZoneProfile::Inner);
    assert_eq!(roll(3), ZoneProfile::Big);
    assert_eq!(roll(4), ZoneProfile::Storm);
    assert_eq!(roll(5), ZoneProfile::Rad);
    assert_eq!(roll(6), ZoneProfile::Hospitable);
}

#[test]
fn outer_zone_depends_on_satellite() {
    assert_eq!(
        ZoneProfile::roll(&mut ScriptedFlux::constant(4), 3, false),
        ZoneProfile::Ice
    );
    assert_eq!(
        ZoneProfile::roll(&mut ScriptedFlux::constant(4), 3, true),
        ZoneProfile::Storm
    );
    assert_eq!(
        ZoneProfile::roll(&mut ScriptedFlux::constant(1), 1, true),
        ZoneProfile::Worldlet
    );
}

#[test]
fn zone_modifiers() {
    let inferno = ZoneProfile::Inferno.modifiers();
    assert_eq!(inferno.size_dice, 1);
    assert_eq!(inferno.size, 6);
    assert_eq!(inferno.notes, vec!["Inf"]);

    let storm = ZoneProfile::Storm.modifiers();
    assert_eq!((storm.atmosphere, storm.hydrographics, storm.population), (4, -4, -6));

    assert_eq!(ZoneProfile::Big.modifiers().size, 8);
    assert_eq!(ZoneProfile::Hospitable.modifiers().notes, vec!["Hsp"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fresh_worlds_stay_in_range(seed in 0u32..10_000, zone in 0usize..8) {
        let zones = [
            ZoneProfile::Inferno,
            ZoneProfile::Inner,
            ZoneProfile::Big,
            ZoneProfile::Storm,
            ZoneProfile::Rad,
            ZoneProfile::Hospitable,
            ZoneProfile::Worldlet,
            ZoneProfile::Ice,
        ];
        let mut stream = ChaChaFlux::new(format!("synthesis/{}", seed));
        let world = make_world(&mut stream, &zones[zone].modifiers());

        prop_assert!((0..=MAX_WORLD_SIZE).contains(&world.size));
        prop_assert!((0..=15).contains(&world.atmosphere));
        prop_assert!((0..=10).contains(&world.hydrographics));
        prop_assert!((0..=MAX_POPULATION).contains(&world.population));
        prop_assert!((0..=15).contains(&world.government));
        prop_assert!((0..=18).contains(&world.law_level));
        prop_assert!(world.tech_level >= 0);
        prop_assert!(world.starport.is_spaceport() || world.starport == Starport::X);
        if world.population == 0 {
            prop_assert_eq!(world.government, 0);
            prop_assert_eq!(world.law_level, 0);
            prop_assert_eq!(world.tech_level, 0);
            prop_assert_eq!(world.population_digit, 0);
        }
    }
}
