//! Tech and law detail notes
//!
//! A populated body gets `TL:<area>:+n` and `LL:<area>:-n` notes for the
//! areas where its economy or legal code strays from the profile's single
//! tech or law level. Areas that match the profile get no note.

use dice::FluxStream;
use planetary::UwpElements;

use crate::error::{Diagnostics, GenerationError};

pub const TECH_KEY: &str = "TL";
pub const LAW_KEY: &str = "LL";

pub const TECH_AREAS: [&str; 13] = [
    "Extraction",
    "Military",
    "Transportation",
    "LifeStyle",
    "Computer",
    "Medical",
    "Production/Food",
    "Production/Extraction",
    "Production/Military",
    "Production/Transportation",
    "Production/LifeStyle",
    "Production/Computer",
    "Production/Medical",
];

pub const LAW_AREAS: [&str; 5] = ["Weapons", "Drugs", "Movement", "Gatherings", "Speech"];

/// Divisors applied to the first flux roll and to each follow-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub fraction: i32,
    pub recurse_fraction: i32,
}

pub const TECH_SPREAD: Spread = Spread {
    fraction: 2,
    recurse_fraction: 1,
};

pub const LAW_SPREAD: Spread = Spread {
    fraction: 5,
    recurse_fraction: 5,
};

const FLUX_EXTREME: i32 = 5;

/// Flux scaled down by the spread
///
/// A roll at either extreme keeps going: each follow-up roll adds its own
/// scaled magnitude in the direction of the first, for as long as the
/// follow-ups stay extreme. The flag is false, with the partial amount,
/// when `max_rerolls` follow-ups were not enough.
pub fn flux_amount<S: FluxStream>(
    stream: &mut S,
    spread: Spread,
    max_rerolls: u32,
) -> (i32, bool) {
    let first = stream.flux();
    let mut amount = first / spread.fraction.max(1);
    let mut last = first;
    let mut rerolls = 0;
    while last.abs() == FLUX_EXTREME {
        if rerolls == max_rerolls {
            return (amount, false);
        }
        rerolls += 1;
        last = stream.flux();
        amount += first.signum() * (last.abs() / spread.recurse_fraction.max(1));
    }
    (amount, true)
}

/// Notes for every area whose shifted level differs from `level`
///
/// Shifted levels never drop below 0.
///
/// # Example
/// ```
/// use dice::ScriptedFlux;
/// use system_generator::Diagnostics;
/// use system_generator::enrichment::{LAW_AREAS, LAW_SPREAD, area_notes};
///
/// let mut stream = ScriptedFlux::constant(3);
/// let mut diagnostics = Diagnostics::new("1910");
/// let notes = area_notes(&mut stream, "LL", &LAW_AREAS, 4, LAW_SPREAD, 8, &mut diagnostics);
/// assert!(notes.is_empty());
/// ```
pub fn area_notes<S: FluxStream>(
    stream: &mut S,
    key: &str,
    areas: &[&str],
    level: i32,
    spread: Spread,
    max_rerolls: u32,
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    areas
        .iter()
        .filter_map(|area| {
            let (flux, settled) = flux_amount(stream, spread, max_rerolls);
            if !settled {
                diagnostics.report(GenerationError::RerollLimit {
                    what: "area flux",
                    limit: max_rerolls,
                });
            }
            let shift = (level + flux).max(0) - level;
            (shift != 0).then(|| format!("{}:{}:{:+}", key, area, shift))
        })
        .collect()
}

/// Add tech and law notes to a populated profile
///
/// `root` is the sector-level stream; each body draws from its own
/// children of it, keyed by the body's name.
pub fn enrich_profile<S: FluxStream>(
    profile: &mut UwpElements,
    name: &str,
    root: &S,
    max_rerolls: u32,
    diagnostics: &mut Diagnostics,
) {
    if !profile.is_populated() {
        return;
    }

    let mut tech = root.sub(&format!("{}{}", name, TECH_KEY));
    let mut law = root.sub(&format!("{}{}", name, LAW_KEY));
    let notes = [
        area_notes(
            &mut tech,
            TECH_KEY,
            &TECH_AREAS,
            profile.tech_level,
            TECH_SPREAD,
            max_rerolls,
            diagnostics,
        ),
        area_notes(
            &mut law,
            LAW_KEY,
            &LAW_AREAS,
            profile.law_level,
            LAW_SPREAD,
            max_rerolls,
            diagnostics,
        ),
    ];
    for note in notes.into_iter().flatten() {
        profile.add_note(note);
    }
}
