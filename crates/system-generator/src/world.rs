//! The canonical source record and the counts derived from it

use dice::FluxStream;
use planetary::digit_value;
use serde::{Deserialize, Serialize};

/// One world as it appears in a sector listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRecord {
    pub sector: String,
    pub hex: String,
    pub name: String,
    pub uwp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pbg: Option<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planets: Option<u32>,
}

impl WorldRecord {
    /// Stream path suffix shared by every stream of this world
    pub fn location(&self) -> String {
        format!("{}/{}", self.sector, self.hex)
    }
}

/// Population digit, belt count and gas giant count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pbg {
    pub population_digit: i32,
    pub belts: i32,
    pub gas_giants: i32,
}

impl Pbg {
    /// Read the three digits of `pbg`, rolling any that are missing
    ///
    /// Rolls only happen for absent or unreadable digits, in field order.
    pub fn resolve<S: FluxStream>(pbg: Option<&str>, stream: &mut S) -> Self {
        let digits: Vec<Option<i32>> = pbg
            .map(|pbg| pbg.trim().chars().map(digit_value).collect())
            .unwrap_or_default();
        let digit = |idx: usize| digits.get(idx).copied().flatten();

        let population_digit = digit(0).unwrap_or_else(|| stream.die(9, 1));
        let belts = digit(1).unwrap_or_else(|| (stream.d6() - 3).max(0));
        let gas_giants = digit(2).unwrap_or_else(|| (stream.two_d6() / 2 - 2).max(0));

        Self {
            population_digit,
            belts,
            gas_giants,
        }
    }
}

/// Total bodies orbiting stars, main world included
pub fn planet_count<S: FluxStream>(explicit: Option<u32>, pbg: &Pbg, stream: &mut S) -> i32 {
    match explicit {
        Some(count) => i32::try_from(count).unwrap_or(i32::MAX),
        None => 1 + pbg.belts + pbg.gas_giants + stream.two_d6(),
    }
}
