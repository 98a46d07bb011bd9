//! Trade-code rule table
//!
//! Each rule lists, per profile field, the extended-hex digits it accepts.
//! A field with no list accepts anything. Some rules add a predicate over
//! the body itself and the system's main world. When every present test
//! passes, the rule's code is added to the body's notes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ehex::in_code_list;
use crate::uwp::UwpElements;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeCode {
    // Planetary
    As,
    De,
    Fl,
    Ga,
    He,
    Ic,
    Oc,
    Va,
    Wa,
    // Population
    Ba,
    Lo,
    Ni,
    Ph,
    Hi,
    // Economic
    Pa,
    Ag,
    Na,
    Px,
    Pi,
    In,
    Po,
    Pr,
    Ri,
    // Secondary worlds
    Fa,
    Mi,
    Pe,
}

impl TradeCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::As => "As",
            Self::De => "De",
            Self::Fl => "Fl",
            Self::Ga => "Ga",
            Self::He => "He",
            Self::Ic => "Ic",
            Self::Oc => "Oc",
            Self::Va => "Va",
            Self::Wa => "Wa",
            Self::Ba => "Ba",
            Self::Lo => "Lo",
            Self::Ni => "Ni",
            Self::Ph => "Ph",
            Self::Hi => "Hi",
            Self::Pa => "Pa",
            Self::Ag => "Ag",
            Self::Na => "Na",
            Self::Px => "Px",
            Self::Pi => "Pi",
            Self::In => "In",
            Self::Po => "Po",
            Self::Pr => "Pr",
            Self::Ri => "Ri",
            Self::Fa => "Fa",
            Self::Mi => "Mi",
            Self::Pe => "Pe",
        }
    }

    pub fn definition(&self) -> &'static str {
        match self {
            Self::As => "Asteroid Belt",
            Self::De => "Desert",
            Self::Fl => "Fluid",
            Self::Ga => "Garden World",
            Self::He => "Hellworld",
            Self::Ic => "Ice Capped",
            Self::Oc => "Ocean World",
            Self::Va => "Vacuum World",
            Self::Wa => "Water World",
            Self::Ba => "Barren",
            Self::Lo => "Low Population",
            Self::Ni => "Non-industrial",
            Self::Ph => "Pre-High population",
            Self::Hi => "High Population",
            Self::Pa => "Pre-Agricultural",
            Self::Ag => "Agricultural",
            Self::Na => "Non-Agricultural",
            Self::Px => "Prison / Exile Camp",
            Self::Pi => "Pre-Industrial",
            Self::In => "Industrial",
            Self::Po => "Poor",
            Self::Pr => "Pre-Rich",
            Self::Ri => "Rich",
            Self::Fa => "Farming",
            Self::Mi => "Mining",
            Self::Pe => "Penal Colony",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        CLASSIFICATIONS
            .iter()
            .map(|rule| rule.code)
            .find(|trade| trade.code() == code)
    }
}

impl fmt::Display for TradeCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The body being classified together with the system it sits in
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    pub profile: &'a UwpElements,
    pub is_primary: bool,
    pub main_world: &'a UwpElements,
}

/// One trade-code rule
#[derive(Clone, Copy)]
pub struct Classification {
    pub code: TradeCode,
    pub size: Option<&'static str>,
    pub atmosphere: Option<&'static str>,
    pub hydrographics: Option<&'static str>,
    pub population: Option<&'static str>,
    pub government: Option<&'static str>,
    pub law: Option<&'static str>,
    pub tech: Option<&'static str>,
    pub other: Option<fn(&ClassifyContext) -> bool>,
}

impl fmt::Debug for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classification")
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

impl Classification {
    const fn rule(code: TradeCode) -> Self {
        Self {
            code,
            size: None,
            atmosphere: None,
            hydrographics: None,
            population: None,
            government: None,
            law: None,
            tech: None,
            other: None,
        }
    }

    /// Does the rule accept this body?
    pub fn matches(&self, ctx: &ClassifyContext) -> bool {
        let profile = ctx.profile;
        let field = |value: i32, codes: Option<&'static str>| {
            codes.is_none_or(|codes| in_code_list(value, codes))
        };

        field(profile.size, self.size)
            && field(profile.atmosphere, self.atmosphere)
            && field(profile.hydrographics, self.hydrographics)
            && field(profile.population, self.population)
            && field(profile.government, self.government)
            && field(profile.law_level, self.law)
            && field(profile.tech_level, self.tech)
            && self.other.is_none_or(|other| other(ctx))
    }
}

const LAW_HIGH: &str = "6789ABCDEFGHJK";

fn not_worldlet(ctx: &ClassifyContext) -> bool {
    !ctx.profile.has_note("Wlt")
}

fn farming(ctx: &ClassifyContext) -> bool {
    !ctx.is_primary && ctx.profile.has_note("Hz")
}

fn mining(ctx: &ClassifyContext) -> bool {
    !ctx.is_primary
        && in_code_list(ctx.main_world.atmosphere, "012479ABC")
        && in_code_list(ctx.main_world.population, "9ABCDEF")
}

fn penal(ctx: &ClassifyContext) -> bool {
    !ctx.is_primary && !ctx.profile.has_note("Re")
}

/// Rules in application order
pub static CLASSIFICATIONS: [Classification; 26] = [
    Classification {
        size: Some("0"),
        atmosphere: Some("0"),
        hydrographics: Some("0"),
        other: Some(not_worldlet),
        ..Classification::rule(TradeCode::As)
    },
    Classification {
        atmosphere: Some("23456789"),
        hydrographics: Some("0"),
        ..Classification::rule(TradeCode::De)
    },
    Classification {
        atmosphere: Some("ABC"),
        hydrographics: Some("123456789A"),
        ..Classification::rule(TradeCode::Fl)
    },
    Classification {
        size: Some("678"),
        atmosphere: Some("568"),
        ..Classification::rule(TradeCode::Ga)
    },
    Classification {
        size: Some("3456789ABC"),
        atmosphere: Some("2479ABC"),
        hydrographics: Some("012"),
        ..Classification::rule(TradeCode::He)
    },
    Classification {
        atmosphere: Some("01"),
        hydrographics: Some("123456789A"),
        ..Classification::rule(TradeCode::Ic)
    },
    Classification {
        size: Some("ABCDEF"),
        atmosphere: Some("3456789DEF"),
        hydrographics: Some("A"),
        ..Classification::rule(TradeCode::Oc)
    },
    Classification {
        atmosphere: Some("0"),
        ..Classification::rule(TradeCode::Va)
    },
    Classification {
        size: Some("3456789"),
        atmosphere: Some("3456789DEF"),
        hydrographics: Some("A"),
        ..Classification::rule(TradeCode::Wa)
    },
    Classification {
        population: Some("0"),
        ..Classification::rule(TradeCode::Ba)
    },
    Classification {
        population: Some("123"),
        ..Classification::rule(TradeCode::Lo)
    },
    Classification {
        population: Some("456"),
        ..Classification::rule(TradeCode::Ni)
    },
    Classification {
        population: Some("8"),
        ..Classification::rule(TradeCode::Ph)
    },
    Classification {
        population: Some("9ABCDEF"),
        ..Classification::rule(TradeCode::Hi)
    },
    Classification {
        atmosphere: Some("456789"),
        hydrographics: Some("45678"),
        population: Some("48"),
        ..Classification::rule(TradeCode::Pa)
    },
    Classification {
        atmosphere: Some("456789"),
        hydrographics: Some("45678"),
        population: Some("567"),
        ..Classification::rule(TradeCode::Ag)
    },
    Classification {
        atmosphere: Some("0123"),
        hydrographics: Some("0123"),
        population: Some("6789ABCDEF"),
        ..Classification::rule(TradeCode::Na)
    },
    Classification {
        atmosphere: Some("23AB"),
        hydrographics: Some("12345"),
        population: Some("3456"),
        law: Some(LAW_HIGH),
        ..Classification::rule(TradeCode::Px)
    },
    Classification {
        atmosphere: Some("012479"),
        population: Some("78"),
        ..Classification::rule(TradeCode::Pi)
    },
    Classification {
        atmosphere: Some("012479ABC"),
        population: Some("9ABCDEF"),
        ..Classification::rule(TradeCode::In)
    },
    Classification {
        atmosphere: Some("2345"),
        hydrographics: Some("0123"),
        ..Classification::rule(TradeCode::Po)
    },
    Classification {
        atmosphere: Some("68"),
        population: Some("89"),
        ..Classification::rule(TradeCode::Pr)
    },
    Classification {
        atmosphere: Some("68"),
        population: Some("678"),
        ..Classification::rule(TradeCode::Ri)
    },
    Classification {
        atmosphere: Some("456789"),
        hydrographics: Some("45678"),
        population: Some("23456"),
        other: Some(farming),
        ..Classification::rule(TradeCode::Fa)
    },
    Classification {
        population: Some("23456"),
        other: Some(mining),
        ..Classification::rule(TradeCode::Mi)
    },
    Classification {
        atmosphere: Some("23AB"),
        hydrographics: Some("12345"),
        population: Some("3456"),
        government: Some("6"),
        law: Some(LAW_HIGH),
        other: Some(penal),
        ..Classification::rule(TradeCode::Pe)
    },
];

/// Add every matching trade code to `profile`
///
/// Existing notes are kept; codes are only ever added.
pub fn classify(profile: &mut UwpElements, is_primary: bool, main_world: &UwpElements) {
    let matched: Vec<TradeCode> = {
        let ctx = ClassifyContext {
            profile: &*profile,
            is_primary,
            main_world,
        };
        CLASSIFICATIONS
            .iter()
            .filter(|rule| rule.matches(&ctx))
            .map(|rule| rule.code)
            .collect()
    };
    for code in matched {
        profile.add_note(code.code());
    }
}

/// Reclassify the main world from scratch
///
/// Stale trade codes carried in from source data are dropped first so the
/// result depends only on the profile and the notes that are not trade codes.
pub fn classify_main_world(profile: &mut UwpElements) {
    profile
        .notes
        .retain(|note| TradeCode::from_code(note).is_none());
    let snapshot = profile.clone();
    classify(profile, true, &snapshot);
}
