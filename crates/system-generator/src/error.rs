//! Generation failures and the per-run diagnostics log
//!
//! Nothing here aborts a run. Failures are logged through `tracing`,
//! recorded, and generation carries on with whatever it has.

use std::fmt;

use planetary::ProfileError;
use star_system::OrbitError;
use tracing::{error, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No free slot for a body
    OrbitExhausted { body: String, category: &'static str },
    /// A reroll-until loop hit its cap
    RerollLimit { what: &'static str, limit: u32 },
    /// The main world could not go where the habitable zone says
    InconsistentPrimary { orbit: i32, reason: &'static str },
    /// Slot validation refused a placement
    Orbit(OrbitError),
    /// The source profile does not parse
    InvalidProfile { hex: String, source: ProfileError },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrbitExhausted { body, category } => {
                write!(f, "unable to place {} on {}: no free orbit", category, body)
            }
            Self::RerollLimit { what, limit } => {
                write!(f, "{} still unresolved after {} rerolls", what, limit)
            }
            Self::InconsistentPrimary { orbit, reason } => {
                write!(f, "primary orbit {} {}", orbit, reason)
            }
            Self::Orbit(err) => write!(f, "{}", err),
            Self::InvalidProfile { hex, source } => {
                write!(f, "invalid profile for {}: {}", hex, source)
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Orbit(err) => Some(err),
            Self::InvalidProfile { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<OrbitError> for GenerationError {
    fn from(err: OrbitError) -> Self {
        Self::Orbit(err)
    }
}

/// Non-fatal failures collected during one run
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    hex: String,
    entries: Vec<GenerationError>,
}

impl Diagnostics {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            entries: Vec::new(),
        }
    }

    /// Log and keep a failure
    pub fn report(&mut self, err: GenerationError) {
        match &err {
            GenerationError::RerollLimit { .. } => {
                warn!(hex = %self.hex, error = %err, "reroll cap reached");
            }
            _ => {
                error!(hex = %self.hex, error = %err, "generation degraded");
            }
        }
        self.entries.push(err);
    }

    pub fn entries(&self) -> &[GenerationError] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
