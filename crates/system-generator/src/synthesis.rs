//! Body synthesis: trade profiles for freshly generated worlds
//!
//! Every roll here comes from the stream handed in, so a body's profile
//! depends only on that stream and the modifiers.

use dice::FluxStream;
use planetary::{Starport, UwpElements};

// ============================================================================
// Modifiers
// ============================================================================

/// Default cap on rolled world size
pub const MAX_WORLD_SIZE: i32 = 24;

/// Highest population code
pub const MAX_POPULATION: i32 = 15;

/// Bias values, caps and forced notes for one synthesized body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UwpModifiers {
    pub starport: i32,
    pub size: i32,
    pub atmosphere: i32,
    pub hydrographics: i32,
    pub population: i32,
    pub government: i32,
    pub law_level: i32,
    pub tech_level: i32,
    /// Six-sided dice rolled for size
    pub size_dice: u32,
    pub max_size: i32,
    /// Overrides the size roll entirely (asteroid belts)
    pub force_size: Option<i32>,
    pub max_population: i32,
    pub max_population_digit: i32,
    pub max_starport: Option<Starport>,
    pub notes: Vec<&'static str>,
}

impl Default for UwpModifiers {
    fn default() -> Self {
        Self {
            starport: 0,
            size: 0,
            atmosphere: 0,
            hydrographics: 0,
            population: 0,
            government: 0,
            law_level: 0,
            tech_level: 0,
            size_dice: 2,
            max_size: MAX_WORLD_SIZE,
            force_size: None,
            max_population: MAX_POPULATION,
            max_population_digit: 9,
            max_starport: None,
            notes: Vec::new(),
        }
    }
}

/// Orbital environment rolled for each secondary world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneProfile {
    Inferno,
    Inner,
    Big,
    Storm,
    Rad,
    Hospitable,
    Worldlet,
    Ice,
}

impl ZoneProfile {
    /// Roll on the inner table when `offset` from the habitable zone is
    /// zero or less, otherwise on the outer one
    pub fn roll<S: FluxStream>(stream: &mut S, offset: i32, satellite: bool) -> Self {
        use ZoneProfile::*;

        let roll = stream.d6();
        let inner = offset <= 0;
        match (inner, roll) {
            (true, 1) => Inferno,
            (true, 2) => Inner,
            (true, 3) => Big,
            (true, 4) => Storm,
            (true, 5) => Rad,
            (true, _) => Hospitable,
            (false, 1) => Worldlet,
            (false, 2) => Ice,
            (false, 3) => Big,
            (false, 4) if satellite => Storm,
            (false, 4) => Ice,
            (false, 5) => Rad,
            (false, _) => Ice,
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            Self::Inferno => "Inf",
            Self::Inner => "Inner",
            Self::Big => "Big",
            Self::Storm => "Storm",
            Self::Rad => "Rad",
            Self::Hospitable => "Hsp",
            Self::Worldlet => "Wlt",
            Self::Ice => "Ice",
        }
    }

    pub fn modifiers(&self) -> UwpModifiers {
        let base = UwpModifiers {
            notes: vec![self.note()],
            ..UwpModifiers::default()
        };
        match self {
            Self::Inferno => UwpModifiers {
                size_dice: 1,
                size: 6,
                ..base
            },
            Self::Inner => UwpModifiers {
                population: -4,
                hydrographics: -4,
                ..base
            },
            Self::Big => UwpModifiers { size: 8, ..base },
            Self::Storm => UwpModifiers {
                atmosphere: 4,
                hydrographics: -4,
                population: -6,
                ..base
            },
            Self::Worldlet => UwpModifiers {
                size_dice: 1,
                size: -3,
                ..base
            },
            Self::Ice => UwpModifiers {
                population: -6,
                ..base
            },
            Self::Rad | Self::Hospitable => base,
        }
    }
}

// ============================================================================
// Field rolls
// ============================================================================

/// Starport for a secondary world, never better than `cap`
///
/// When a cap below the best spaceport is supplied, a low roll downgrades
/// the result to an improvised port.
pub fn roll_starport<S: FluxStream>(stream: &mut S, bias: i32, cap: Option<Starport>) -> Starport {
    let roll = stream.d6() + bias;
    let starport = match roll {
        r if r >= 4 => Starport::F,
        3 => Starport::G,
        r if r > 0 => Starport::H,
        _ => Starport::X,
    };

    let Some(cap) = cap else {
        return starport;
    };
    let starport = starport.min(cap);
    if cap < Starport::F && starport > Starport::H && stream.d6() <= 2 {
        Starport::H
    } else {
        starport
    }
}

pub fn roll_size<S: FluxStream>(stream: &mut S, mods: &UwpModifiers) -> i32 {
    match mods.force_size {
        Some(size) => size,
        None => (stream.die(6, mods.size_dice) + mods.size).clamp(0, mods.max_size.max(0)),
    }
}

pub fn roll_atmosphere<S: FluxStream>(stream: &mut S, size: i32, bias: i32) -> i32 {
    (size + stream.flux() + bias).clamp(0, 15)
}

/// Hydrographics; the flux die is always consumed
pub fn roll_hydrographics<S: FluxStream>(stream: &mut S, size: i32, atmosphere: i32, bias: i32) -> i32 {
    let mut base = atmosphere + stream.flux() + bias;
    if size < 2 {
        return 0;
    }
    if !(2..=9).contains(&atmosphere) {
        base -= 4;
    }
    base.clamp(0, 10)
}

/// Population code; a raw 10 explodes into `2d6+3`
pub fn roll_population<S: FluxStream>(stream: &mut S, max_population: i32, bias: i32) -> i32 {
    let base = (stream.two_d6() - 2 + bias).max(0);
    let population = if base == 10 { stream.two_d6() + 3 } else { base };
    population.min(max_population.max(0))
}

pub fn roll_population_digit<S: FluxStream>(stream: &mut S, population: i32, max_digit: i32) -> i32 {
    if population == 0 {
        return 0;
    }
    stream.die(9, 1).min(max_digit.max(1))
}

pub fn roll_government<S: FluxStream>(stream: &mut S, population: i32, bias: i32) -> i32 {
    if population == 0 {
        return 0;
    }
    (population + stream.flux() + bias).clamp(0, 15)
}

pub fn roll_law_level<S: FluxStream>(stream: &mut S, population: i32, government: i32, bias: i32) -> i32 {
    if population == 0 {
        return 0;
    }
    (government + stream.flux() + bias).clamp(0, 18)
}

/// Tech level from 2d6 plus the usual modifiers; unpopulated worlds are 0
pub fn roll_tech_level<S: FluxStream>(stream: &mut S, profile: &UwpElements, bias: i32) -> i32 {
    if profile.population == 0 {
        return 0;
    }

    let mut dm = bias + profile.starport.tech_modifier();
    dm += match profile.size {
        s if s < 2 => 2,
        s if s < 5 => 1,
        _ => 0,
    };
    if profile.atmosphere < 4 || profile.atmosphere > 9 {
        dm += 1;
    }
    dm += match profile.population {
        p if p < 6 => 1,
        9 => 2,
        p if p > 9 => 4,
        _ => 0,
    };
    dm += match profile.government {
        0 | 5 => 1,
        13 => -2,
        _ => 0,
    };

    (stream.two_d6() + dm).max(0)
}

// ============================================================================
// Modes
// ============================================================================

/// Size, atmosphere and hydrographics, in roll order
pub fn roll_physical<S: FluxStream>(stream: &mut S, mods: &UwpModifiers) -> (i32, i32, i32) {
    let size = roll_size(stream, mods);
    let atmosphere = roll_atmosphere(stream, size, mods.atmosphere);
    let hydrographics = roll_hydrographics(stream, size, atmosphere, mods.hydrographics);
    (size, atmosphere, hydrographics)
}

/// Fresh world with its own society
///
/// # Example
/// ```
/// use dice::ScriptedFlux;
/// use system_generator::synthesis::{make_world, UwpModifiers};
///
/// let mut stream = ScriptedFlux::constant(3);
/// let world = make_world(&mut stream, &UwpModifiers::default());
/// assert_eq!(world.encode(), "G666444-7");
/// ```
pub fn make_world<S: FluxStream>(stream: &mut S, mods: &UwpModifiers) -> UwpElements {
    let starport = roll_starport(stream, mods.starport, mods.max_starport);
    let (size, atmosphere, hydrographics) = roll_physical(stream, mods);
    let population = roll_population(stream, mods.max_population, mods.population);
    let population_digit = roll_population_digit(stream, population, mods.max_population_digit);
    let government = roll_government(stream, population, mods.government);
    let law_level = roll_law_level(stream, population, government, mods.law_level);

    let mut world = UwpElements {
        starport,
        size,
        atmosphere,
        hydrographics,
        population,
        government,
        law_level,
        population_digit,
        notes: mods.notes.iter().map(|note| note.to_string()).collect(),
        ..UwpElements::default()
    };
    world.tech_level = roll_tech_level(stream, &world, mods.tech_level);
    world
}

/// Physical fields only; no port, no people
pub fn make_empty<S: FluxStream>(stream: &mut S, mods: &UwpModifiers) -> UwpElements {
    let (size, atmosphere, hydrographics) = roll_physical(stream, mods);
    UwpElements {
        starport: Starport::X,
        size,
        atmosphere,
        hydrographics,
        notes: mods.notes.iter().map(|note| note.to_string()).collect(),
        ..UwpElements::default()
    }
}

pub fn make_gas_giant<S: FluxStream>(stream: &mut S) -> UwpElements {
    let mut giant = UwpElements {
        starport: Starport::X,
        size: stream.two_d6() + 19,
        atmosphere: 14,
        ..UwpElements::default()
    };
    giant.add_note("GG");
    giant
}

/// Orbit offset from the habitable zone for a gas giant of `size`
pub fn gas_giant_offset<S: FluxStream>(stream: &mut S, size: i32) -> i32 {
    let bias = if size > 22 { -5 } else { -4 };
    stream.two_d6() + bias
}

pub fn make_ring() -> UwpElements {
    UwpElements {
        starport: Starport::X,
        atmosphere: 1,
        ..UwpElements::default()
    }
}

/// Modifiers for an asteroid belt
pub fn belt_modifiers(max_population: i32) -> UwpModifiers {
    UwpModifiers {
        force_size: Some(0),
        max_population,
        notes: vec!["As"],
        ..UwpModifiers::default()
    }
}
