use planetary::UwpElements;
use star_system::{Faction, PlanetParams, StarParams, StarSystem};

use crate::overlay::{OverlayWorld, faction_suffix, flatten};

fn world(profile: &str, population_digit: i32) -> UwpElements {
    let mut world = UwpElements::parse(profile, ["Ri"]).unwrap();
    world.population_digit = population_digit;
    world
}

fn planet(name: &str, profile: UwpElements, capacity: usize) -> PlanetParams {
    PlanetParams {
        name: name.to_string(),
        profile,
        capacity,
        primary: false,
    }
}

/// Regina's primary with one companion, one world and its moon
fn regina() -> StarSystem {
    let mut system = StarSystem::new(StarParams {
        name: "Regina".to_string(),
        spectral: "G2 V".to_string(),
        capacity: 20,
    });
    let root = system.root();
    let world_id = system
        .place_planet(root, 3, planet("Regina-3", world("A788899-C", 7), 4))
        .unwrap();
    system
        .place_planet(world_id, 1, planet("Regina-3-1", world("X200000-0", 0), 0))
        .unwrap();
    system
        .place_star(
            root,
            9,
            StarParams {
                name: "Regina-9".to_string(),
                spectral: "M3 V".to_string(),
                capacity: 7,
            },
        )
        .unwrap();
    system
}

#[test]
fn self_record_leads() {
    let records = flatten("1910", &regina(), vec!["Ri".to_string(), "Hz".to_string()]);
    assert_eq!(
        records[0],
        OverlayWorld {
            hex: "1910".to_string(),
            notes: Some(vec!["Ri".to_string(), "Hz".to_string()]),
            ..OverlayWorld::default()
        }
    );
}

#[test]
fn one_record_per_occupied_orbit_in_depth_first_order() {
    let system = regina();
    let records = flatten("1910", &system, Vec::new());
    let hexes: Vec<&str> = records.iter().map(|record| record.hex.as_str()).collect();

    assert_eq!(hexes, vec!["1910", "1910-3", "1910-3-1", "1910-9"]);
    assert_eq!(records.len(), 1 + system.occupied_orbit_count());
}

#[test]
fn planet_record_carries_profile() {
    let records = flatten("1910", &regina(), Vec::new());
    let world = &records[1];
    assert_eq!(world.name.as_deref(), Some("Regina-3"));
    assert_eq!(world.uwp.as_deref(), Some("A788899-C"));
    assert_eq!(world.pbg.as_deref(), Some("700"));
    assert!(world.notes.as_ref().unwrap().contains(&"Ri".to_string()));
    assert!(world.stars.is_none());
}

#[test]
fn star_record_carries_class() {
    let records = flatten("1910", &regina(), Vec::new());
    let star = &records[3];
    assert_eq!(star.name.as_deref(), Some("Regina-9 [M3 V]"));
    assert_eq!(star.stars.as_deref(), Some("M3 V"));
    assert!(star.uwp.is_none());
}

#[test]
fn placeholders_are_skipped() {
    let system = StarSystem::new(StarParams {
        name: "Deneb".to_string(),
        spectral: "A2 Ia".to_string(),
        capacity: 20,
    });
    let records = flatten("0101", &system, Vec::new());
    assert_eq!(records.len(), 1);
}

#[test]
fn factions_follow_their_world() {
    let mut system = regina();
    let world_id = system.body(system.root()).unwrap().orbits[3].unwrap();
    let faction = |profile: &str, best_starport| Faction {
        profile: world(profile, 5),
        best_starport,
    };
    system.planet_mut(world_id).unwrap().factions = vec![
        faction("D788879-8", false),
        faction("C788459-9", true),
    ];

    let records = flatten("1910", &system, Vec::new());
    let hexes: Vec<&str> = records.iter().map(|record| record.hex.as_str()).collect();
    assert_eq!(
        hexes,
        vec!["1910", "1910-3", "1910-3a", "1910-3b", "1910-3-1", "1910-9"]
    );
    assert_eq!(records[3].uwp.as_deref(), Some("C788459-9"));
    assert_eq!(records[2].name.as_deref(), Some("Regina-3 a"));
}

#[test]
fn faction_letters() {
    assert_eq!(faction_suffix(0), 'a');
    assert_eq!(faction_suffix(4), 'e');
}

#[test]
fn json_omits_absent_fields() {
    let records = flatten("1910", &regina(), vec!["Ri".to_string()]);
    let json = serde_json::to_value(&records).unwrap();

    assert_eq!(json[0], serde_json::json!({ "hex": "1910", "notes": ["Ri"] }));
    assert_eq!(json[3]["stars"], "M3 V");
    assert!(json[3].get("uwp").is_none());
    assert_eq!(json[1]["pbg"], "700");
}
