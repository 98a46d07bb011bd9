//! Orbit capacity of stars and worlds
//!
//! A companion star's slots, and a world's satellite slots, both shrink
//! the closer the body sits to its own primary.

use stellar::ORBIT_AUS;

/// Multiplier applied to world size for very large bodies (sizes 20 and up)
const LARGE_WORLD_MULT: [f64; 12] = [
    20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 125.0, 180.0, 220.0, 250.0,
];

/// Most satellite orbits any world can hold
pub const MAX_SATELLITE_ORBITS: usize = 24;

/// Orbit slots available to a companion star at `orbit`
///
/// # Example
/// ```
/// use star_system::max_orbits_for_orbit;
///
/// assert_eq!(max_orbits_for_orbit(0), 0);
/// assert_eq!(max_orbits_for_orbit(2), 1);
/// assert_eq!(max_orbits_for_orbit(9), 7);
/// ```
pub fn max_orbits_for_orbit(orbit: usize) -> usize {
    match orbit {
        0 | 1 => 0,
        2 => 1,
        _ => orbit - 2,
    }
}

pub fn world_size_mult(size: i32) -> f64 {
    if size <= 20 {
        size.max(1) as f64
    } else {
        let idx = ((size - 20) as usize).min(LARGE_WORLD_MULT.len() - 1);
        LARGE_WORLD_MULT[idx]
    }
}

/// Satellite orbit slots for a world of `size` at stellar `orbit`
pub fn max_satellite_orbits_for_orbit(orbit: usize, size: i32) -> usize {
    let max_stellar_orbit = max_orbits_for_orbit(orbit).min(ORBIT_AUS.len() - 1);
    let max_mm = ORBIT_AUS[max_stellar_orbit] * 1.5e5;

    // Orbits assumed linearly spaced
    let limit = (max_mm / world_size_mult(size) / 7.0).log10().trunc();
    if limit <= 0.0 {
        0
    } else {
        (limit as usize).min(MAX_SATELLITE_ORBITS)
    }
}
