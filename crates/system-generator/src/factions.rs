//! Balkanized worlds split into factions

use dice::FluxStream;
use planetary::{GOVERNMENT_BALKANIZED, UwpElements};
use star_system::Faction;

use crate::error::{Diagnostics, GenerationError};
use crate::synthesis::{
    roll_government, roll_law_level, roll_population, roll_population_digit, roll_starport,
    roll_tech_level,
};

pub const MIN_FACTIONS: usize = 2;
pub const MAX_FACTIONS: usize = 5;

/// Note for a faction whose government took more than one reroll
pub const UNREST_NOTE: &str = "Unrest";

/// `2 + ((d6 - 1) mod 4)`: two to five, weighted toward two and three
pub fn faction_count<S: FluxStream>(stream: &mut S) -> usize {
    MIN_FACTIONS + ((stream.d6() - 1).rem_euclid(4)) as usize
}

/// Roll the factions sharing `parent`
///
/// Every faction keeps the parent's physical fields. The first takes the
/// parent's population; the rest roll their own, capped by it. One
/// faction, chosen up front, keeps its rolled starport and every other
/// one is downgraded a grade.
pub fn make_factions<S: FluxStream>(
    stream: &mut S,
    parent: &UwpElements,
    max_rerolls: u32,
    diagnostics: &mut Diagnostics,
) -> Vec<Faction> {
    let count = faction_count(stream);
    let best = (stream.die(count as u32, 1) - 1).max(0) as usize;

    (0..count)
        .map(|idx| {
            let mut profile = UwpElements {
                size: parent.size,
                atmosphere: parent.atmosphere,
                hydrographics: parent.hydrographics,
                ..UwpElements::default()
            };
            if idx == 0 {
                profile.population = parent.population;
                profile.population_digit = parent.population_digit;
            } else {
                profile.population = roll_population(stream, parent.population, 0);
                let max_digit = if profile.population == parent.population {
                    parent.population_digit
                } else {
                    9
                };
                profile.population_digit =
                    roll_population_digit(stream, profile.population, max_digit);
            }

            let (government, rerolls) =
                faction_government(stream, profile.population, max_rerolls, diagnostics);
            profile.government = government;
            if rerolls > 1 {
                profile.add_note(UNREST_NOTE);
            }
            profile.law_level = roll_law_level(stream, profile.population, profile.government, 0);
            profile.starport = roll_starport(stream, 0, Some(parent.starport));
            profile.tech_level = roll_tech_level(stream, &profile, 0);

            let best_starport = idx == best;
            if !best_starport {
                profile.starport = profile.starport.downgrade();
            }
            Faction {
                profile,
                best_starport,
            }
        })
        .collect()
}

/// Government for one faction, rerolled away from balkanization, and
/// the number of rerolls it took
fn faction_government<S: FluxStream>(
    stream: &mut S,
    population: i32,
    max_rerolls: u32,
    diagnostics: &mut Diagnostics,
) -> (i32, u32) {
    let mut rerolls = 0;
    let mut government = roll_government(stream, population, 0);
    while government == GOVERNMENT_BALKANIZED {
        if rerolls == max_rerolls {
            diagnostics.report(GenerationError::RerollLimit {
                what: "faction government",
                limit: max_rerolls,
            });
            government = 0;
            break;
        }
        rerolls += 1;
        government = roll_government(stream, population, 0);
    }
    (government, rerolls)
}
