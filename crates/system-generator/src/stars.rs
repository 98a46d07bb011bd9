//! Companion stars: slot assignment and the star tree
//!
//! The stellar string lists every star in the system. The primary takes
//! slot 0; the rest are scattered over four pairs of slots, each pair being
//! a star plus its close companion:
//!
//! | Slot | Role                                    |
//! |------|-----------------------------------------|
//! | 0    | primary                                 |
//! | 1    | close companion of the primary          |
//! | 2k   | companion of the primary (near/far/distant) |
//! | 2k+1 | close companion of slot 2k              |

use dice::FluxStream;
use star_system::{BodyId, StarParams, StarSystem, max_orbits_for_orbit};
use stellar::{parse_stars, star_class_index};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{Diagnostics, GenerationError};

/// Stars per system
pub const STAR_SLOTS: usize = 8;

/// Spectral class used when the record names no stars
pub const DEFAULT_STAR: &str = "M0 V";

/// Stars assigned to the eight structural slots
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StarSlots([Option<String>; STAR_SLOTS]);

impl StarSlots {
    /// Assign the stars named in `stellar` to slots
    ///
    /// Eight stars are taken as already slotted. With fewer, companions
    /// land on a random pair, taking its first free slot, and within each
    /// pair the star with the higher class index comes first.
    pub fn assign<S: FluxStream>(
        stellar: Option<&str>,
        stream: &mut S,
        max_rerolls: u32,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let mut stars = stellar.map(parse_stars).unwrap_or_default();
        if stars.is_empty() {
            stars.push(DEFAULT_STAR.to_string());
        }
        stars.truncate(STAR_SLOTS);

        let mut slots: [Option<String>; STAR_SLOTS] = Default::default();
        if stars.len() == STAR_SLOTS {
            for (slot, star) in slots.iter_mut().zip(stars) {
                *slot = Some(star);
            }
            return Self(slots);
        }

        let mut picked = [false; STAR_SLOTS];
        picked[0] = true;
        let mut placed = 1;
        let mut rerolls = 0;
        while placed < stars.len() {
            let pair = 2 * (stream.die(4, 1) - 1) as usize;
            if !picked[pair] {
                picked[pair] = true;
            } else if !picked[pair + 1] {
                picked[pair + 1] = true;
            } else {
                rerolls += 1;
                if rerolls > max_rerolls {
                    diagnostics.report(GenerationError::RerollLimit {
                        what: "companion star slot",
                        limit: max_rerolls,
                    });
                    break;
                }
                continue;
            }
            placed += 1;
        }

        let mut remaining = stars.into_iter();
        for (slot, taken) in slots.iter_mut().zip(picked) {
            if taken {
                *slot = remaining.next();
            }
        }
        Self::paired(slots)
    }

    fn paired(mut slots: [Option<String>; STAR_SLOTS]) -> Self {
        for pair in slots.chunks_exact_mut(2) {
            let swap = matches!(
                pair,
                [Some(first), Some(second)] if star_class_index(first) < star_class_index(second)
            );
            if swap {
                pair.swap(0, 1);
            }
        }
        Self(slots)
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(slot).and_then(|star| star.as_deref())
    }

    /// The primary star, falling back to the default class
    pub fn primary(&self) -> &str {
        self.get(0).unwrap_or(DEFAULT_STAR)
    }

    /// Number of filled slots
    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// The stellar string in slot order
    pub fn describe(&self) -> String {
        self.0.iter().flatten().cloned().collect::<Vec<_>>().join(" ")
    }
}

/// A star system holding only stars, plus the stars bodies rotate around
#[derive(Debug, Clone)]
pub struct StarTree {
    pub system: StarSystem,
    /// The root and every non-close companion, in slot order
    pub rotation: Vec<BodyId>,
}

impl StarTree {
    /// Build the root star and its companions
    ///
    /// Companions of the root roll their target orbit; close companions
    /// always target orbit 0 of their partner.
    pub fn build<S: FluxStream>(
        name: &str,
        slots: &StarSlots,
        stream: &mut S,
        config: &GeneratorConfig,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let system = StarSystem::new(StarParams {
            name: name.to_string(),
            spectral: slots.primary().to_string(),
            capacity: config.primary_orbits,
        });
        let root = system.root();
        let mut tree = Self {
            system,
            rotation: vec![root],
        };

        if let Some(star) = slots.get(1) {
            tree.add_companion(root, star, 0, diagnostics);
        }

        for pos in (2..STAR_SLOTS).step_by(2) {
            let Some(star) = slots.get(pos) else {
                continue;
            };
            let target = stream.d6() + 3 * pos as i32 - 6;
            let Some(companion) = tree.add_companion(root, star, target, diagnostics) else {
                continue;
            };
            tree.rotation.push(companion);

            if let Some(close) = slots.get(pos + 1) {
                tree.add_companion(companion, close, 0, diagnostics);
            }
        }

        debug!(
            stars = tree.system.len(),
            rotation = tree.rotation.len(),
            "built star tree"
        );
        tree
    }

    fn add_companion(
        &mut self,
        host: BodyId,
        star: &str,
        target: i32,
        diagnostics: &mut Diagnostics,
    ) -> Option<BodyId> {
        let host_name = self.system.body(host)?.name.clone();
        let Some(orbit) = self.system.orbital_position(host, target) else {
            diagnostics.report(GenerationError::OrbitExhausted {
                body: host_name,
                category: "companion star",
            });
            return None;
        };

        let params = StarParams {
            name: format!("{}-{}", host_name, orbit),
            spectral: star.to_string(),
            capacity: max_orbits_for_orbit(orbit),
        };
        match self.system.place_star(host, orbit, params) {
            Ok(id) => Some(id),
            Err(err) => {
                diagnostics.report(err.into());
                None
            }
        }
    }
}
