//! ChaCha-backed dice stream seeded from a path string.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use uuid::Uuid;

use crate::stream::FluxStream;

/// Derive a u64 seed from a structural path
///
/// Uses a v5 UUID over the path bytes and keeps the first 8 bytes, so the
/// same path always produces the same seed.
///
/// # Example
/// ```
/// use dice::seed_from_path;
///
/// assert_eq!(seed_from_path("PBG/Core/0140"), seed_from_path("PBG/Core/0140"));
/// assert_ne!(seed_from_path("PBG/Core/0140"), seed_from_path("PBG/Core/0141"));
/// ```
pub fn seed_from_path(path: &str) -> u64 {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, path.as_bytes())
        .as_u64_pair()
        .0
}

/// Production dice stream
///
/// # Example
/// ```
/// use dice::{ChaChaFlux, FluxStream};
///
/// let mut a = ChaChaFlux::new("PLANET-DETAILS/Core/0140");
/// let mut b = ChaChaFlux::new("PLANET-DETAILS/Core/0140");
/// assert_eq!(a.die(6, 2), b.die(6, 2));
/// ```
#[derive(Debug, Clone)]
pub struct ChaChaFlux {
    path: String,
    rng: ChaChaRng,
}

impl ChaChaFlux {
    /// Create a stream for the given path
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let rng = ChaChaRng::seed_from_u64(seed_from_path(&path));
        Self { path, rng }
    }

    /// Structural path this stream was seeded from
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FluxStream for ChaChaFlux {
    fn die(&mut self, sides: u32, count: u32) -> i32 {
        if sides == 0 {
            return 0;
        }
        (0..count)
            .map(|_| self.rng.random_range(1..=sides) as i32)
            .sum()
    }

    fn sub(&self, suffix: &str) -> Self {
        Self::new(format!("{}/{}", self.path, suffix))
    }
}
