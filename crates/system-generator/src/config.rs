//! Generator tuning knobs

use serde::{Deserialize, Serialize};

/// Bounds and feature switches for one generation run
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
///
/// # Example
/// ```
/// use system_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json_str(r#"{"maxRerolls": 8, "factions": false}"#).unwrap();
/// assert_eq!(config.max_rerolls, 8);
/// assert!(!config.factions);
/// assert_eq!(config.primary_orbits, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Cap on every reroll-until loop
    pub max_rerolls: u32,
    /// Failed placements tolerated per body category before its budget is dropped
    pub max_placement_attempts: u32,
    /// Orbit slots around the primary star
    pub primary_orbits: usize,
    /// Derive secondary worlds from an owner world
    pub colonies: bool,
    /// Split balkanized worlds into factions
    pub factions: bool,
    /// Add tech and law detail notes to populated bodies
    pub enrichment: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_rerolls: 64,
            max_placement_attempts: 32,
            primary_orbits: 20,
            colonies: true,
            factions: true,
            enrichment: true,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
