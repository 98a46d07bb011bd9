use std::fmt;

use crate::body::BodyId;

/// Rejected orbit placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrbitError {
    /// No body with this id in the arena
    UnknownBody(BodyId),
    /// Slot index beyond the host's capacity
    OutOfRange {
        body: String,
        orbit: usize,
        capacity: usize,
    },
    /// Slot already holds a body
    Occupied { body: String, orbit: usize },
    /// Stars orbit stars only
    StarInPlanetOrbit { body: String },
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBody(id) => write!(f, "unknown body {}", id.index()),
            Self::OutOfRange {
                body,
                orbit,
                capacity,
            } => write!(
                f,
                "orbit {} on {} is out of range (max {})",
                orbit, body, capacity
            ),
            Self::Occupied { body, orbit } => {
                write!(f, "orbit {} on {} already has something present", orbit, body)
            }
            Self::StarInPlanetOrbit { body } => {
                write!(f, "star added to planetary orbit of {}", body)
            }
        }
    }
}

impl std::error::Error for OrbitError {}
