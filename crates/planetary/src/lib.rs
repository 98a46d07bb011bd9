//! World trade profiles and their classification
//!
//! This crate provides the fixed-field trade profile (UWP) of a world, the
//! extended-hex digit codec it is written in, starport grades, and the
//! trade-code rule table that annotates a profile with short notes.

pub mod ehex;
pub mod starport;
pub mod trade_codes;
pub mod uwp;

// Re-export key types at crate root
pub use ehex::{EHEX_DIGITS, digit_value, encoded_value, in_code_list};
pub use starport::Starport;
pub use trade_codes::{CLASSIFICATIONS, Classification, TradeCode, classify, classify_main_world};
pub use uwp::{GOVERNMENT_BALKANIZED, GOVERNMENT_CAPTIVE, PROFILE_LEN, ProfileError, UwpElements};

#[cfg(test)]
mod ehex_test;
#[cfg(test)]
mod starport_test;
#[cfg(test)]
mod uwp_test;
