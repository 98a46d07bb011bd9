use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Starport and spaceport grades
///
/// `A`-`E` are classed starports, `F`-`H` are spaceports (good, poor,
/// improvised) and `X` means no port at all. Ordering follows quality, so
/// `Starport::A > Starport::H > Starport::X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Starport {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    #[default]
    X,
}

impl Starport {
    /// All grades, best first
    pub const ALL: [Starport; 9] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::X,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|port| port.code() == code)
    }

    pub fn code(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::X => 'X',
        }
    }

    /// Quality rank; higher is better, `X` is 0
    pub fn quality(&self) -> u8 {
        match self {
            Self::A => 8,
            Self::B => 7,
            Self::C => 6,
            Self::D => 5,
            Self::E => 4,
            Self::F => 3,
            Self::G => 2,
            Self::H => 1,
            Self::X => 0,
        }
    }

    /// One grade worse; `X` stays `X`
    pub fn downgrade(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::C,
            Self::C => Self::D,
            Self::D => Self::E,
            Self::E => Self::F,
            Self::F => Self::G,
            Self::G => Self::H,
            Self::H | Self::X => Self::X,
        }
    }

    /// Tech level modifier for the port
    pub fn tech_modifier(&self) -> i32 {
        match self {
            Self::A => 6,
            Self::B => 4,
            Self::C => 2,
            Self::F => 1,
            Self::X => -4,
            _ => 0,
        }
    }

    /// Is this one of the lettered spaceport grades (`F`-`H`)?
    pub fn is_spaceport(&self) -> bool {
        matches!(self, Self::F | Self::G | Self::H)
    }
}

impl Ord for Starport {
    fn cmp(&self, other: &Self) -> Ordering {
        self.quality().cmp(&other.quality())
    }
}

impl PartialOrd for Starport {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Starport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
