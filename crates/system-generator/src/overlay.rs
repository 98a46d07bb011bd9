//! Flattening a generated system into overlay records

use serde::{Deserialize, Serialize};
use star_system::{BodyId, BodyKind, StarSystem};

/// One record folded back into the sector data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayWorld {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uwp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pbg: Option<String>,
}

/// Letter suffix for the faction at `idx`
pub fn faction_suffix(idx: usize) -> char {
    (b'a' + (idx % 26) as u8) as char
}

/// Flatten `system` into records keyed under `hex`
///
/// The first record refreshes the source world's notes. After it comes
/// one record per occupied orbit in depth-first order, with any factions
/// following their world as lettered siblings.
///
/// # Example
/// ```
/// use star_system::{StarParams, StarSystem};
/// use system_generator::overlay::flatten;
///
/// let system = StarSystem::new(StarParams {
///     name: "Regina".to_string(),
///     spectral: "F7 V".to_string(),
///     capacity: 20,
/// });
/// let records = flatten("1910", &system, vec!["Ri".to_string()]);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].hex, "1910");
/// ```
pub fn flatten(hex: &str, system: &StarSystem, self_notes: Vec<String>) -> Vec<OverlayWorld> {
    let mut records = vec![OverlayWorld {
        hex: hex.to_string(),
        notes: Some(self_notes),
        ..OverlayWorld::default()
    }];

    for id in system.walk(system.root()) {
        if id == system.root() {
            continue;
        }
        flatten_body(hex, system, id, &mut records);
    }
    records
}

fn flatten_body(hex: &str, system: &StarSystem, id: BodyId, records: &mut Vec<OverlayWorld>) {
    let Some(body) = system.body(id) else {
        return;
    };
    if body.orbit.is_none() {
        return;
    }

    let key = format!("{}{}", hex, system.suffix(id));
    match &body.kind {
        BodyKind::NoOrbit => {}
        BodyKind::Star(star) => records.push(OverlayWorld {
            hex: key,
            name: Some(format!("{} [{}]", body.name, star.spectral)),
            stars: Some(star.spectral.clone()),
            ..OverlayWorld::default()
        }),
        BodyKind::Planet(planet) => {
            records.push(OverlayWorld {
                hex: key.clone(),
                name: Some(body.name.clone()),
                uwp: Some(planet.profile.encode()),
                notes: Some(planet.profile.note_list()),
                pbg: Some(format!("{}00", planet.profile.population_digit)),
                ..OverlayWorld::default()
            });
            for (idx, faction) in planet.factions.iter().enumerate() {
                let letter = faction_suffix(idx);
                records.push(OverlayWorld {
                    hex: format!("{}{}", key, letter),
                    name: Some(format!("{} {}", body.name, letter)),
                    uwp: Some(faction.profile.encode()),
                    notes: Some(faction.profile.note_list()),
                    pbg: Some(format!("{}00", faction.profile.population_digit)),
                    ..OverlayWorld::default()
                });
            }
        }
    }
}
