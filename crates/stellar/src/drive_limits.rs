//! Drive limits and habitable zone derived from a star's classification

use serde::{Deserialize, Serialize};

use crate::star_table::{HABITABLE_ZONE_TABLE, JUMP_LIMIT_TABLE, PRECLUDED_ORBITS_TABLE};

/// Orbit number to distance in AU
///
/// Anything beyond the last entry is effectively interstellar distance.
pub const ORBIT_AUS: [f64; 22] = [
    0.2, 0.4, 0.7, 1.0, 1.6, 2.8, 5.2, 10.0, 20.0, 40.0, 77.0, 154.0, 308.0, 615.0, 1230.0,
    2500.0, 4900.0, 9800.0, 19500.0, 39500.0, 78700.0, 150000.0,
];

/// Orbit-indexed limits for one star
///
/// Orbit fields use -1 for "no orbit qualifies".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveLimits {
    /// Outermost orbit reachable in reasonable time under maneuver drive
    pub maneuver: i32,
    /// Outermost orbit inside the jump shadow
    pub jump: i32,
    /// Outermost orbit usable by gravitic drives
    pub gravity: i32,
    /// Number of innermost orbits inside the star
    pub precluded: i32,
    /// Habitable zone orbit
    pub habitable_zone: i32,
}

impl DriveLimits {
    /// Limits from the classification alone
    pub fn for_star(star: &str) -> Self {
        let jump = JUMP_LIMIT_TABLE.lookup(star).unwrap_or(-1);
        let mut maneuver = jump;
        let mut gravity = jump;

        if jump >= 0 {
            let jump_au = ORBIT_AUS[jump as usize];
            while gravity > 0 && ORBIT_AUS[gravity as usize - 1] > jump_au / 10.0 {
                gravity -= 1;
            }
            while (maneuver + 1) < ORBIT_AUS.len() as i32
                && ORBIT_AUS[maneuver as usize + 1] < jump_au * 10.0
            {
                maneuver += 1;
            }
        }

        Self {
            maneuver,
            jump,
            gravity,
            precluded: precluded_orbits(star),
            habitable_zone: habitable_zone(star),
        }
    }

    /// Pointwise maximum of the drive and precluded fields
    ///
    /// The habitable zone stays with the star's own classification.
    pub fn widen(self, previous: &DriveLimits) -> Self {
        Self {
            maneuver: self.maneuver.max(previous.maneuver),
            jump: self.jump.max(previous.jump),
            gravity: self.gravity.max(previous.gravity),
            precluded: self.precluded.max(previous.precluded),
            habitable_zone: self.habitable_zone,
        }
    }
}

/// Limits for a star, widened against its parent star's limits if any
///
/// # Example
/// ```
/// use stellar::star_limits;
///
/// let primary = star_limits("K5 III", None);
/// let companion = star_limits("M5 V", Some(&primary));
/// assert!(companion.jump >= primary.jump);
/// ```
pub fn star_limits(star: &str, previous: Option<&DriveLimits>) -> DriveLimits {
    let limits = DriveLimits::for_star(star);
    match previous {
        Some(previous) => limits.widen(previous),
        None => limits,
    }
}

/// Habitable zone orbit, 0 when the table has no entry
pub fn habitable_zone(star: &str) -> i32 {
    HABITABLE_ZONE_TABLE.lookup(star).unwrap_or(0)
}

/// Precluded orbit count, -1 when the table has no entry
pub fn precluded_orbits(star: &str) -> i32 {
    PRECLUDED_ORBITS_TABLE.lookup(star).unwrap_or(-1)
}
