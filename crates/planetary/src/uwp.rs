//! Universal world profile
//!
//! The nine-character `SsahPgl-T` string: starport, size, atmosphere,
//! hydrographics, population, government, law level, a dash, tech level.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ehex::{digit_value, encoded_value};
use crate::starport::Starport;

/// Length of an encoded profile
pub const PROFILE_LEN: usize = 9;

/// Government code for a captive colony or dependency
pub const GOVERNMENT_CAPTIVE: i32 = 6;

/// Government code for a balkanized world
pub const GOVERNMENT_BALKANIZED: i32 = 7;

/// Reasons a profile string fails to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Not exactly nine characters
    Length(usize),
    /// Starport letter outside `A-H` and `X`
    Starport(char),
    /// Character at the given position is not an extended-hex digit
    Digit { position: usize, found: char },
    /// Position 7 must be `-`
    Separator(char),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "profile must be {} characters, got {}", PROFILE_LEN, len),
            Self::Starport(c) => write!(f, "unknown starport grade '{}'", c),
            Self::Digit { position, found } => {
                write!(f, "invalid digit '{}' at position {}", found, position)
            }
            Self::Separator(c) => write!(f, "expected '-' before tech level, got '{}'", c),
        }
    }
}

impl std::error::Error for ProfileError {}

/// Trade profile of one body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UwpElements {
    pub starport: Starport,
    pub size: i32,
    pub atmosphere: i32,
    pub hydrographics: i32,
    /// Population exponent
    pub population: i32,
    pub government: i32,
    pub law_level: i32,
    pub tech_level: i32,
    /// Population mantissa (the P of PBG)
    pub population_digit: i32,
    /// Trade codes, climate notes and remarks
    pub notes: BTreeSet<String>,
}

impl UwpElements {
    /// Parse a `SsahPgl-T` profile and attach the given notes
    ///
    /// # Example
    /// ```
    /// use planetary::{Starport, UwpElements};
    ///
    /// let uwp = UwpElements::parse("A788899-C", ["Ri", "Hz"]).unwrap();
    /// assert_eq!(uwp.starport, Starport::A);
    /// assert_eq!(uwp.tech_level, 12);
    /// assert!(uwp.has_note("Ri"));
    /// ```
    pub fn parse<I, S>(profile: &str, notes: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chars: Vec<char> = profile.trim().chars().collect();
        if chars.len() != PROFILE_LEN {
            return Err(ProfileError::Length(chars.len()));
        }
        let starport = Starport::from_code(chars[0]).ok_or(ProfileError::Starport(chars[0]))?;
        if chars[7] != '-' {
            return Err(ProfileError::Separator(chars[7]));
        }
        let digit = |position: usize| {
            digit_value(chars[position]).ok_or(ProfileError::Digit {
                position,
                found: chars[position],
            })
        };

        Ok(Self {
            starport,
            size: digit(1)?,
            atmosphere: digit(2)?,
            hydrographics: digit(3)?,
            population: digit(4)?,
            government: digit(5)?,
            law_level: digit(6)?,
            tech_level: digit(8)?,
            population_digit: 0,
            notes: notes.into_iter().map(Into::into).collect(),
        })
    }

    /// Parse a profile that may be malformed
    ///
    /// Unreadable digits become 0 and an unreadable or missing starport
    /// becomes `X`. The first problem found is returned alongside.
    ///
    /// # Example
    /// ```
    /// use planetary::{Starport, UwpElements};
    ///
    /// let (uwp, problem) = UwpElements::parse_lenient("X??????-?", ["Ba"]);
    /// assert_eq!(uwp.starport, Starport::X);
    /// assert_eq!(uwp.population, 0);
    /// assert!(problem.is_some());
    /// ```
    pub fn parse_lenient<I, S>(profile: &str, notes: I) -> (Self, Option<ProfileError>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chars: Vec<char> = profile.trim().chars().collect();
        let mut problem = (chars.len() != PROFILE_LEN).then(|| ProfileError::Length(chars.len()));
        let mut note = |error: ProfileError| {
            problem.get_or_insert(error);
        };

        let starport = match chars.first() {
            Some(&c) => Starport::from_code(c).unwrap_or_else(|| {
                note(ProfileError::Starport(c));
                Starport::X
            }),
            None => Starport::X,
        };
        if let Some(&c) = chars.get(7) {
            if c != '-' {
                note(ProfileError::Separator(c));
            }
        }
        let mut digit = |position: usize| match chars.get(position) {
            Some(&found) => digit_value(found).unwrap_or_else(|| {
                note(ProfileError::Digit { position, found });
                0
            }),
            None => 0,
        };

        let uwp = Self {
            starport,
            size: digit(1),
            atmosphere: digit(2),
            hydrographics: digit(3),
            population: digit(4),
            government: digit(5),
            law_level: digit(6),
            tech_level: digit(8),
            population_digit: 0,
            notes: notes.into_iter().map(Into::into).collect(),
        };
        (uwp, problem)
    }

    /// Encode as the nine-character profile string
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(PROFILE_LEN);
        out.push(self.starport.code());
        for value in [
            self.size,
            self.atmosphere,
            self.hydrographics,
            self.population,
            self.government,
            self.law_level,
        ] {
            out.push(encoded_value(value));
        }
        out.push('-');
        out.push(encoded_value(self.tech_level));
        out
    }

    pub fn has_note(&self, note: &str) -> bool {
        self.notes.contains(note)
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.insert(note.into());
    }

    pub fn remove_note(&mut self, note: &str) -> bool {
        self.notes.remove(note)
    }

    pub fn is_populated(&self) -> bool {
        self.population > 0
    }

    /// Captive colonies cannot own other colonies
    pub fn is_captive(&self) -> bool {
        self.government == GOVERNMENT_CAPTIVE
    }

    pub fn is_balkanized(&self) -> bool {
        self.government == GOVERNMENT_BALKANIZED
    }

    /// Notes as an ordered list
    pub fn note_list(&self) -> Vec<String> {
        self.notes.iter().cloned().collect()
    }
}

impl fmt::Display for UwpElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
