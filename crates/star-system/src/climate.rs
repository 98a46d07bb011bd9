//! Climate notes stamped on a world by the star it orbits

use planetary::{UwpElements, in_code_list};
use stellar::DriveLimits;

fn temperate(profile: &UwpElements) -> bool {
    in_code_list(profile.size, "6789")
        && in_code_list(profile.atmosphere, "456789")
        && in_code_list(profile.hydrographics, "34567")
}

/// Notes for a world whose host sits at `orbit` around a star with `limits`
///
/// `Tz` marks a tidally locked inner orbit, `Hz` the habitable zone itself.
/// One step inward is `Tr` (tropic) for a temperate world and `Ho` (hot)
/// otherwise; one step outward is `Tu` (tundra) or `Co` (cold). Beyond that
/// everything is `Fr` (frozen).
pub fn climate_notes(orbit: usize, limits: &DriveLimits, profile: &UwpElements) -> Vec<&'static str> {
    let orbit = orbit as i32;
    let hz = limits.habitable_zone;
    let mut notes = Vec::new();

    if orbit < 2 {
        notes.push("Tz");
    }
    if orbit == hz {
        notes.push("Hz");
    } else if orbit > hz + 1 {
        notes.push("Fr");
    } else if orbit == hz - 1 {
        notes.push(if temperate(profile) { "Tr" } else { "Ho" });
    } else if orbit == hz + 1 {
        notes.push(if temperate(profile) { "Tu" } else { "Co" });
    }

    notes
}

pub fn apply_climate_notes(orbit: usize, limits: &DriveLimits, profile: &mut UwpElements) {
    for note in climate_notes(orbit, limits, profile) {
        profile.add_note(note);
    }
}
