//! Sparse tables keyed by stellar class index
//!
//! Each table lists a value at a handful of reference classifications. A
//! lookup returns the value of the greatest reference index that does not
//! exceed the queried star's index ("floor lookup"). Keys are resolved and
//! sorted once, on first use. When two rows resolve to the same index the
//! later one wins.

use std::sync::OnceLock;

use crate::spectral::star_class_index;

/// A floor-lookup table from stellar class index to an orbit number
pub struct StarTable {
    name: &'static str,
    entries: &'static [(&'static str, i32)],
    index: OnceLock<Vec<(i32, i32)>>,
}

impl StarTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, i32)]) -> Self {
        Self {
            name,
            entries,
            index: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reference keys as class indices, ascending
    pub fn keys(&self) -> Vec<i32> {
        self.sorted().iter().map(|(key, _)| *key).collect()
    }

    /// Value for a spectral string, or `None` if it sorts below every key
    pub fn lookup(&self, star: &str) -> Option<i32> {
        self.lookup_index(star_class_index(star))
    }

    /// Value for a precomputed class index
    pub fn lookup_index(&self, class_index: i32) -> Option<i32> {
        let sorted = self.sorted();
        let upper = sorted.partition_point(|(key, _)| *key <= class_index);
        upper.checked_sub(1).map(|idx| sorted[idx].1)
    }

    fn sorted(&self) -> &[(i32, i32)] {
        self.index.get_or_init(|| {
            let mut keys: Vec<(i32, i32)> = self
                .entries
                .iter()
                .map(|(star, value)| (star_class_index(star), *value))
                .collect();
            keys.sort_by_key(|(key, _)| *key);
            // Subdwarf rows share main-sequence keys; the later row wins
            keys.dedup_by(|later, kept| {
                if later.0 == kept.0 {
                    kept.1 = later.1;
                    true
                } else {
                    false
                }
            });
            keys
        })
    }
}

impl std::fmt::Debug for StarTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarTable")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .finish()
    }
}

// =============================================================================
// Reference tables
// =============================================================================

/// Innermost orbits swallowed by the star itself
pub static PRECLUDED_ORBITS_TABLE: StarTable = StarTable::new(
    "precluded-orbits",
    &[
        ("A0 Ia", 4),
        ("G0 Ia", 5),
        ("G5 Ia", 6),
        ("K5 Ia", 7),
        ("M0 Ia", 8),
        ("M5 Ia", 9),
        ("A0 Ib", 1),
        ("A5 Ib", 2),
        ("G5 Ib", 4),
        ("K0 Ib", 5),
        ("K5 Ib", 6),
        ("M0 Ib", 7),
        ("M5 Ib", 8),
        ("A0 II", 0),
        ("G0 II", 1),
        ("K0 II", 2),
        ("K5 II", 4),
        ("M0 II", 5),
        ("M5 II", 6),
        ("M9 II", 7),
        ("A0 III", 0),
        ("K5 III", 1),
        ("M0 III", 2),
        ("M5 III", 5),
        ("M9 III", 6),
        ("O0 IV", -1),
    ],
);

/// Habitable zone orbit
pub static HABITABLE_ZONE_TABLE: StarTable = StarTable::new(
    "habitable-zone",
    &[
        ("O0 Ia", 15),
        ("B0 Ia", 13),
        ("A0 Ia", 12),
        ("F0 Ia", 11),
        ("G0 Ia", 12),
        ("K0 Ia", 12),
        ("M0 Ia", 12),
        ("O0 Ib", 15),
        ("B0 Ib", 13),
        ("A0 Ib", 11),
        ("F0 Ib", 10),
        ("G0 Ib", 10),
        ("K0 Ib", 10),
        ("M0 Ib", 11),
        ("O0 II", 14),
        ("B0 II", 12),
        ("A0 II", 9),
        ("F0 II", 9),
        ("G0 II", 9),
        ("K0 II", 9),
        ("M0 II", 10),
        ("O0 III", 13),
        ("B0 III", 11),
        ("A0 III", 7),
        ("F0 III", 6),
        ("G0 III", 7),
        ("K0 III", 8),
        ("M0 III", 9),
        ("O0 IV", 12),
        ("B0 IV", 10),
        ("A0 IV", 7),
        ("F0 IV", 6),
        ("G0 IV", 5),
        ("K0 IV", 5),
        ("M0 IV", 5),
        ("O0 V", 11),
        ("B0 V", 9),
        ("A0 V", 7),
        ("F0 V", 5),
        ("G0 V", 3),
        ("K0 V", 2),
        ("M0 V", 0),
        ("O0 VI", 3),
        ("B0 VI", 3),
        ("A0 VI", 3),
        ("F0 VI", 3),
        ("G0 VI", 2),
        ("K0 VI", 1),
        ("M0 VI", 0),
        ("O0 D", 1),
        ("B0 D", 0),
        ("DM", 0),
    ],
);

/// Orbit out to which the star's gravity well blocks jump drives
pub static JUMP_LIMIT_TABLE: StarTable = StarTable::new(
    "jump-limit",
    &[
        ("O0 Ia", 10),
        ("B0 Ia", 10),
        ("A0 Ia", 10),
        ("F0 Ia", 11),
        ("G0 Ia", 11),
        ("G5 Ia", 12),
        ("K0 Ia", 12),
        ("K5 Ia", 13),
        ("M0 Ia", 14),
        ("M5 Ia", 15),
        ("O0 Ib", 9),
        ("B0 Ib", 9),
        ("A0 Ib", 9),
        ("F0 Ib", 9),
        ("G0 Ib", 10),
        ("K0 Ib", 11),
        ("K5 Ib", 12),
        ("M0 Ib", 13),
        ("M5 Ib", 14),
        ("M9 Ib", 15),
        ("O0 II", 7),
        ("B0 II", 7),
        ("A0 II", 7),
        ("F0 II", 7),
        ("G0 II", 8),
        ("K0 II", 9),
        ("K5 II", 10),
        ("M0 II", 11),
        ("M5 II", 13),
        ("O0 III", 6),
        ("B0 III", 6),
        ("A0 III", 6),
        ("A5 III", 5),
        ("F0 III", 5),
        ("G0 III", 6),
        ("G5 III", 7),
        ("K0 III", 7),
        ("K5 III", 9),
        ("M0 III", 9),
        ("M5 III", 11),
        ("M9 III", 12),
        ("O0 IV", 5),
        ("B0 IV", 5),
        ("A0 IV", 5),
        ("A5 IV", 4),
        ("F0 IV", 4),
        ("G0 IV", 5),
        ("K0 IV", 5),
        ("M0 IV", 5),
        ("O0 V", 5),
        ("B0 V", 5),
        ("A0 V", 5),
        ("A5 V", 4),
        ("F0 V", 3),
        ("G0 V", 2),
        ("K0 V", 2),
        ("K5 V", 1),
        ("M0 V", 1),
        ("M5 V", 0),
        ("M9 V", -1),
        ("O0 VI", 3),
        ("B0 VI", 3),
        ("A0 VI", 3),
        ("F0 VI", 3),
        ("G0 VI", 2),
        ("G5 VI", 1),
        ("K0 VI", 0),
        ("M0 VI", 0),
        ("M5 VI", -1),
        ("O0 D", -1),
    ],
);
