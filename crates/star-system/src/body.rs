//! Body variants stored in the system arena

use serde::{Deserialize, Serialize};

use planetary::UwpElements;
use stellar::DriveLimits;

/// Index into the body arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(u32);

impl BodyId {
    /// The root star of every system
    pub const ROOT: BodyId = BodyId(0);

    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "BodyId overflow");
        BodyId(index as u32)
    }

    /// Returns the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A star and the limits derived from its classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub spectral: String,
    pub drive_limits: DriveLimits,
}

/// One political faction of a balkanized world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub profile: UwpElements,
    /// Exempt from the starport downgrade every other faction takes
    pub best_starport: bool,
}

/// A planet, belt, gas giant, satellite or ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub profile: UwpElements,
    /// Empty unless the world is balkanized
    pub factions: Vec<Faction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    Star(Star),
    Planet(Planet),
    /// Placeholder filling an orbit inside the star
    NoOrbit,
}

/// A node in the system arena.
///
/// Parent links are only read upward (suffix, ancestor star); children are
/// held by orbit index in `orbits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub name: String,
    /// Slot index within the parent, `None` for the root
    pub orbit: Option<usize>,
    /// Fixed-capacity orbit slots
    pub orbits: Vec<Option<BodyId>>,
    /// True for the main world only
    pub primary: bool,
    pub parent: Option<BodyId>,
    pub kind: BodyKind,
}

impl Body {
    pub fn capacity(&self) -> usize {
        self.orbits.len()
    }

    pub fn star(&self) -> Option<&Star> {
        match &self.kind {
            BodyKind::Star(star) => Some(star),
            _ => None,
        }
    }

    pub fn planet(&self) -> Option<&Planet> {
        match &self.kind {
            BodyKind::Planet(planet) => Some(planet),
            _ => None,
        }
    }

    pub fn planet_mut(&mut self) -> Option<&mut Planet> {
        match &mut self.kind {
            BodyKind::Planet(planet) => Some(planet),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&UwpElements> {
        self.planet().map(|planet| &planet.profile)
    }

    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star(_))
    }

    pub fn is_no_orbit(&self) -> bool {
        matches!(self.kind, BodyKind::NoOrbit)
    }

    /// First empty slot
    pub fn min_orbit(&self) -> Option<usize> {
        self.orbits.iter().position(Option::is_none)
    }

    /// Last empty slot
    pub fn max_orbit(&self) -> Option<usize> {
        self.orbits.iter().rposition(Option::is_none)
    }

    pub fn has_available_orbits(&self) -> bool {
        self.max_orbit().is_some()
    }

    /// Allocate a slot near `target`
    ///
    /// The target is clamped into `[min_orbit, max_orbit]` and the first
    /// empty slot at or after it is returned. `None` when every slot is
    /// taken. The caller must occupy the slot before allocating again.
    pub fn orbital_position(&self, target: i32) -> Option<usize> {
        let (min, max) = (self.min_orbit()?, self.max_orbit()?);
        let base = usize::try_from(target).unwrap_or(0).clamp(min, max);
        (base..=max).find(|&idx| self.orbits[idx].is_none())
    }

    /// Occupied slots in orbit order
    pub fn children(&self) -> impl Iterator<Item = (usize, BodyId)> + '_ {
        self.orbits
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|child| (idx, child)))
    }
}

/// Construction parameters for a star
#[derive(Debug, Clone)]
pub struct StarParams {
    pub name: String,
    pub spectral: String,
    pub capacity: usize,
}

/// Construction parameters for a planet
#[derive(Debug, Clone)]
pub struct PlanetParams {
    pub name: String,
    pub profile: UwpElements,
    pub capacity: usize,
    pub primary: bool,
}
