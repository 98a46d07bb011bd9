//! Colony-derived worlds
//!
//! A colony keeps freshly rolled physical fields but takes its society
//! from an owner world already placed in the system.

use dice::FluxStream;
use planetary::{GOVERNMENT_CAPTIVE, Starport, UwpElements};
use star_system::BodyId;

use crate::error::{Diagnostics, GenerationError};
use crate::synthesis::{
    UwpModifiers, roll_physical, roll_population, roll_population_digit, roll_starport,
};

/// Note carried by every colony
pub const COLONY_NOTE: &str = "Cy";

/// Note for a colony that has died back
pub const ABANDONED_NOTE: &str = "Di";

/// Prefix of ownership tags
pub const OWNER_PREFIX: &str = "O:";

/// Pick an owner among `owners`, skipping `exclude`
///
/// The more candidates there are, the likelier a colony becomes: the
/// chance is `min(count, 5)` in six.
pub fn choose_owner<S: FluxStream>(
    stream: &mut S,
    owners: &[BodyId],
    exclude: &[BodyId],
) -> Option<BodyId> {
    let candidates: Vec<BodyId> = owners
        .iter()
        .copied()
        .filter(|owner| !exclude.contains(owner))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let count = candidates.len();
    if stream.d6() as usize > count.min(5) {
        return None;
    }
    let pick = stream.die(count as u32, 1) as usize;
    candidates.get(pick.saturating_sub(1)).copied()
}

/// The tag a colony of `owner` carries
///
/// An owner that is itself a colony passes its own tag down.
pub fn ownership_tag(owner: &UwpElements, owner_path: &str) -> String {
    owner
        .notes
        .iter()
        .find(|note| note.starts_with(OWNER_PREFIX))
        .cloned()
        .unwrap_or_else(|| format!("{}{}", OWNER_PREFIX, owner_path))
}

/// Sum of d6 rolls, rolling again on every 6
pub fn open_ended_d6<S: FluxStream>(
    stream: &mut S,
    max_rerolls: u32,
    diagnostics: &mut Diagnostics,
) -> i32 {
    let mut sum = 0;
    for _ in 0..=max_rerolls {
        let roll = stream.d6();
        sum += roll;
        if roll != 6 {
            return sum;
        }
    }
    diagnostics.report(GenerationError::RerollLimit {
        what: "open-ended colony roll",
        limit: max_rerolls,
    });
    sum
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColonyStatus {
    /// Ruled from the owner; government 6
    Captive,
    /// Self-governing, sharing the owner's institutions
    Independent,
}

impl ColonyStatus {
    pub fn roll<S: FluxStream>(
        stream: &mut S,
        max_rerolls: u32,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        if open_ended_d6(stream, max_rerolls, diagnostics) <= 3 {
            Self::Captive
        } else {
            Self::Independent
        }
    }
}

/// Derive a colony world from `owner`
///
/// Population never exceeds the owner's. A colony whose tech level falls
/// under a d6 threshold, or that ends up with nobody living there, is
/// marked abandoned and loses its society.
pub fn make_colony<S: FluxStream>(
    stream: &mut S,
    mods: &UwpModifiers,
    owner: &UwpElements,
    tag: &str,
    max_rerolls: u32,
    diagnostics: &mut Diagnostics,
) -> UwpElements {
    let (size, atmosphere, hydrographics) = roll_physical(stream, mods);

    let max_population = mods.max_population.min(owner.population);
    let population = roll_population(stream, max_population, mods.population);
    let max_digit = if population == owner.population {
        mods.max_population_digit.min(owner.population_digit)
    } else {
        mods.max_population_digit
    };
    let population_digit = roll_population_digit(stream, population, max_digit);

    let cap = mods
        .max_starport
        .map_or(owner.starport, |cap| cap.min(owner.starport));
    let status = ColonyStatus::roll(stream, max_rerolls, diagnostics);
    let (starport, government, tech_level) = match status {
        ColonyStatus::Captive => {
            let starport = roll_starport(stream, mods.starport, Some(cap.min(Starport::G)));
            let tech_level = (owner.tech_level + stream.die(3, 1) - 2).max(0);
            (starport, GOVERNMENT_CAPTIVE, tech_level)
        }
        ColonyStatus::Independent => {
            let starport = roll_starport(stream, mods.starport, Some(cap));
            (starport, owner.government, owner.tech_level)
        }
    };

    let mut colony = UwpElements {
        starport,
        size,
        atmosphere,
        hydrographics,
        population,
        government,
        law_level: owner.law_level,
        tech_level,
        population_digit,
        notes: mods.notes.iter().map(|note| note.to_string()).collect(),
    };
    colony.add_note(COLONY_NOTE);
    colony.add_note(tag);

    let threshold = stream.d6() - 1;
    if population == 0 || tech_level < threshold {
        abandon(&mut colony);
    }
    colony
}

fn abandon(colony: &mut UwpElements) {
    colony.starport = Starport::X;
    colony.population = 0;
    colony.population_digit = 0;
    colony.government = 0;
    colony.law_level = 0;
    colony.tech_level = 0;
    colony.add_note(ABANDONED_NOTE);
}
