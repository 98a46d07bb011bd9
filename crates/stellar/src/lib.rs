//! Stellar classification and the lookup tables keyed by it.

pub mod drive_limits;
pub mod spectral;
pub mod star_table;

#[cfg(test)]
mod star_table_test;

// Re-export spectral types
pub use spectral::{
    DEGENERATE_INDEX, LuminosityClass, SpectralType, StellarClassification, parse_stars,
    star_class_index,
};

// Re-export tables and limits
pub use drive_limits::{DriveLimits, ORBIT_AUS, habitable_zone, precluded_orbits, star_limits};
pub use star_table::{HABITABLE_ZONE_TABLE, JUMP_LIMIT_TABLE, PRECLUDED_ORBITS_TABLE, StarTable};
