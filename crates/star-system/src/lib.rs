//! Stellar body tree for one star system
//!
//! Stars, planets and precluded-orbit placeholders live in a single arena
//! and reference each other by `BodyId`. Each body owns a fixed number of
//! orbit slots; placing a child validates and commits one slot.

pub mod body;
pub mod capacity;
pub mod climate;
pub mod error;
pub mod system;

// Re-export main types at crate root
pub use body::{Body, BodyId, BodyKind, Faction, Planet, PlanetParams, Star, StarParams};
pub use capacity::{max_orbits_for_orbit, max_satellite_orbits_for_orbit, world_size_mult};
pub use climate::{apply_climate_notes, climate_notes};
pub use error::OrbitError;
pub use system::StarSystem;

// Re-export for convenience
pub use planetary::UwpElements;
pub use stellar::DriveLimits;

#[cfg(test)]
mod capacity_test;
#[cfg(test)]
mod climate_test;
