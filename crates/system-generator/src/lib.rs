//! Star system generation for a Traveller-style atlas
//!
//! Given one canonical world record, [`WorldGen`] builds the rest of its
//! star system: companion stars, the main world, gas giants, belts, other
//! planets, satellites and rings. Each body gets a trade profile and trade
//! codes, and populated bodies get tech and law detail notes. The result is
//! flattened into [`OverlayWorld`] records.
//!
//! Output is a pure function of the record: every roll comes from a dice
//! stream seeded by the world's sector and hex.

pub mod colony;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod factions;
pub mod generation;
pub mod overlay;
pub mod stars;
pub mod synthesis;
pub mod world;

pub use config::GeneratorConfig;
pub use error::{Diagnostics, GenerationError};
pub use generation::{WorldGen, enrich_planets};
pub use overlay::OverlayWorld;
pub use stars::{StarSlots, StarTree};
pub use synthesis::{UwpModifiers, ZoneProfile};
pub use world::{Pbg, WorldRecord};

#[cfg(test)]
mod colony_test;
#[cfg(test)]
mod overlay_test;
#[cfg(test)]
mod synthesis_test;
