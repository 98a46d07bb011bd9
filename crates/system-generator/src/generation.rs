//! System generation for one source world
//!
//! `WorldGen` owns the body tree and the dice for a single world. Placement
//! runs once, in this order:
//!
//! 1. Main world, at the habitable zone shifted by its climate notes
//! 2. Gas giants
//! 3. Asteroid belts
//! 4. Remaining planets, on a fixed sweep of offsets from the habitable zone
//! 5. Satellites and rings around every planet circling a star
//! 6. Tech and law notes on every populated body
//!
//! Every body is classified as soon as it is placed. Failures never abort
//! the run; they are logged and kept in [`WorldGen::diagnostics`].

use dice::{ChaChaFlux, FluxStream};
use planetary::{UwpElements, classify, classify_main_world};
use star_system::{BodyId, DriveLimits, PlanetParams, StarSystem, max_satellite_orbits_for_orbit};
use tracing::debug;

use crate::colony::{choose_owner, make_colony, ownership_tag};
use crate::config::GeneratorConfig;
use crate::enrichment::enrich_profile;
use crate::error::{Diagnostics, GenerationError};
use crate::factions::make_factions;
use crate::overlay::{OverlayWorld, flatten};
use crate::stars::{StarSlots, StarTree};
use crate::synthesis::{
    MAX_POPULATION, UwpModifiers, ZoneProfile, belt_modifiers, gas_giant_offset, make_empty,
    make_gas_giant, make_ring, make_world,
};
use crate::world::{Pbg, WorldRecord, planet_count};

// ============================================================================
// Constants
// ============================================================================

/// Offsets from the habitable zone for secondary planets, indexed by 2d6-2
pub const WORLD_SWEEP: [i32; 11] = [10, 8, 6, 4, 2, 0, 1, 3, 5, 7, 9];

/// Note for a body inside its star's jump limit
pub const JUMP_SHADOW_NOTE: &str = "!J";

/// Note for a body beyond its star's maneuver limit
pub const MANEUVER_LIMIT_NOTE: &str = "!M";

/// Added to the primary's habitable zone when the main world moves into a
/// companion's orbits
pub const COMPANION_ORBIT_SHIFT: i32 = 1;

/// Shift from the habitable zone implied by a world's climate notes
pub fn climate_offset(profile: &UwpElements) -> i32 {
    if profile.has_note("Tr") {
        1
    } else if profile.has_note("Tu") {
        -1
    } else if profile.has_note("Fr") {
        -2
    } else {
        0
    }
}

// ============================================================================
// Generator
// ============================================================================

struct Streams<S> {
    details: S,
    pbg: S,
    planets: S,
    stars: S,
    notes: S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Budget {
    GasGiants,
    Belts,
    Planets,
}

impl Budget {
    fn category(&self) -> &'static str {
        match self {
            Self::GasGiants => "gas giant",
            Self::Belts => "belt",
            Self::Planets => "planet",
        }
    }
}

/// Generator for one world's star system
pub struct WorldGen<S: FluxStream = ChaChaFlux> {
    record: WorldRecord,
    config: GeneratorConfig,
    /// Source main-world profile, classified
    profile: UwpElements,
    pbg: Pbg,
    stars: StarSlots,
    gas_giants: i32,
    belts: i32,
    planets: i32,
    stream: S,
    /// Sector-level root for tech and law notes
    notes: S,
    system: StarSystem,
    rotation: Vec<BodyId>,
    next_star: usize,
    main_world: Option<BodyId>,
    /// Populated, non-captive planets that may own colonies
    owners: Vec<BodyId>,
    synthesized: u32,
    diagnostics: Diagnostics,
    generated: bool,
}

impl WorldGen<ChaChaFlux> {
    /// Generator with the standard streams for the record's location
    ///
    /// # Example
    /// ```
    /// use system_generator::{GeneratorConfig, WorldGen, WorldRecord};
    ///
    /// let record = WorldRecord {
    ///     sector: "Spinward Marches".to_string(),
    ///     hex: "1910".to_string(),
    ///     name: "Regina".to_string(),
    ///     uwp: "A788899-C".to_string(),
    ///     pbg: Some("703".to_string()),
    ///     stars: Some("F7 V BD M3 V".to_string()),
    ///     ..WorldRecord::default()
    /// };
    /// let mut generator = WorldGen::new(&record, GeneratorConfig::default());
    /// assert!(generator.generate_planets());
    /// assert_eq!(generator.overlay()[0].hex, "1910");
    /// ```
    pub fn new(record: &WorldRecord, config: GeneratorConfig) -> Self {
        let location = record.location();
        let streams = Streams {
            details: ChaChaFlux::new(format!("PLANET-DETAILS/{}", location)),
            pbg: ChaChaFlux::new(format!("PBG/{}", location)),
            planets: ChaChaFlux::new(format!("PLANETS/{}", location)),
            stars: ChaChaFlux::new(format!("STARS/{}", location)),
            notes: ChaChaFlux::new(format!("/{}", record.sector)),
        };
        Self::from_streams(record, config, streams)
    }
}

impl<S: FluxStream> WorldGen<S> {
    /// Generator drawing every roll from `stream` and its children
    pub fn with_stream(
        record: &WorldRecord,
        config: GeneratorConfig,
        stream: S,
    ) -> Self {
        let streams = Streams {
            pbg: stream.sub("PBG"),
            planets: stream.sub("PLANETS"),
            stars: stream.sub("STARS"),
            notes: stream.sub("NOTES"),
            details: stream,
        };
        Self::from_streams(record, config, streams)
    }

    fn from_streams(
        record: &WorldRecord,
        config: GeneratorConfig,
        mut streams: Streams<S>,
    ) -> Self {
        let mut diagnostics = Diagnostics::new(record.hex.clone());
        let (mut profile, problem) =
            UwpElements::parse_lenient(&record.uwp, record.notes.iter().cloned());
        if let Some(source) = problem {
            diagnostics.report(GenerationError::InvalidProfile {
                hex: record.hex.clone(),
                source,
            });
        }
        let pbg = Pbg::resolve(record.pbg.as_deref(), &mut streams.pbg);
        profile.population_digit = pbg.population_digit;
        classify_main_world(&mut profile);

        let planets = planet_count(record.planets, &pbg, &mut streams.planets);
        let stars = StarSlots::assign(
            record.stars.as_deref(),
            &mut streams.stars,
            config.max_rerolls,
            &mut diagnostics,
        );
        let tree = StarTree::build(
            &record.name,
            &stars,
            &mut streams.details,
            &config,
            &mut diagnostics,
        );

        debug!(
            hex = %record.hex,
            stars = %stars.describe(),
            gas_giants = pbg.gas_giants,
            belts = pbg.belts,
            planets,
            "prepared world"
        );

        Self {
            record: record.clone(),
            config,
            profile,
            pbg,
            stars,
            gas_giants: pbg.gas_giants,
            belts: pbg.belts,
            planets,
            stream: streams.details,
            notes: streams.notes,
            system: tree.system,
            rotation: tree.rotation,
            next_star: 0,
            main_world: None,
            owners: Vec::new(),
            synthesized: 0,
            diagnostics,
            generated: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn record(&self) -> &WorldRecord {
        &self.record
    }

    /// The source profile as classified before placement
    pub fn profile(&self) -> &UwpElements {
        &self.profile
    }

    pub fn pbg(&self) -> Pbg {
        self.pbg
    }

    pub fn stars(&self) -> &StarSlots {
        &self.stars
    }

    pub fn system(&self) -> &StarSystem {
        &self.system
    }

    pub fn main_world(&self) -> Option<BodyId> {
        self.main_world
    }

    pub fn diagnostics(&self) -> &[GenerationError] {
        self.diagnostics.entries()
    }

    /// Flatten the system into overlay records
    ///
    /// The leading record carries the main world's final notes, or the
    /// source notes if no main world could be placed.
    pub fn overlay(&self) -> Vec<OverlayWorld> {
        let notes = self
            .main_world
            .and_then(|id| self.system.profile(id))
            .unwrap_or(&self.profile)
            .note_list();
        flatten(&self.record.hex, &self.system, notes)
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Populate the system; returns `false` if it already ran
    pub fn generate_planets(&mut self) -> bool {
        if self.generated {
            return false;
        }
        self.generated = true;

        self.place_main_world();
        self.next_star = 1;
        self.fill(Budget::GasGiants);
        self.fill(Budget::Belts);
        self.fill(Budget::Planets);
        self.place_satellites();
        if self.config.enrichment {
            self.enrich_notes();
        }

        debug!(
            hex = %self.record.hex,
            bodies = self.system.occupied_orbit_count(),
            failures = self.diagnostics.len(),
            "generated system"
        );
        true
    }

    fn remaining(&self, budget: Budget) -> i32 {
        match budget {
            Budget::GasGiants => self.gas_giants,
            Budget::Belts => self.belts,
            Budget::Planets => self.planets,
        }
    }

    /// Place bodies until `budget` is spent or too many attempts fail
    fn fill(&mut self, budget: Budget) {
        let mut failures = 0;
        while self.remaining(budget) > 0 {
            let placed = match budget {
                Budget::GasGiants => self.place_gas_giant(),
                Budget::Belts => self.place_belt(false),
                Budget::Planets => self.place_world(),
            };
            if placed.is_some() {
                continue;
            }

            failures += 1;
            if failures >= self.config.max_placement_attempts {
                self.diagnostics.report(GenerationError::OrbitExhausted {
                    body: self.record.name.clone(),
                    category: budget.category(),
                });
                let abandoned = self.remaining(budget);
                match budget {
                    Budget::GasGiants => self.gas_giants = 0,
                    Budget::Belts => self.belts = 0,
                    Budget::Planets => {}
                }
                self.planets -= abandoned;
            }
        }
    }

    /// Next star in the rotation that still has a free orbit
    fn next_star(&mut self) -> Option<BodyId> {
        for _ in 0..self.rotation.len() {
            let id = self.rotation[self.next_star % self.rotation.len()];
            self.next_star += 1;
            if self.system.has_available_orbits(id) {
                return Some(id);
            }
        }
        None
    }

    fn habitable_zone(&self, star: BodyId) -> i32 {
        self.system
            .star(star)
            .map_or(0, |star| star.drive_limits.habitable_zone)
    }

    /// Fresh child stream for one synthesized body
    fn body_stream(&mut self) -> S {
        self.synthesized += 1;
        self.stream.sub(&format!("body/{}", self.synthesized))
    }

    fn place_main_world(&mut self) {
        if self.profile.size == 0 {
            self.place_main_belt();
            return;
        }

        let root = self.system.root();
        let offset = climate_offset(&self.profile);
        let hz = self.habitable_zone(root);
        let mut host = root;
        let mut target = (hz + offset).max(0);

        if let Some(companion) = self.star_in_slot(root, target) {
            let retarget = (hz + COMPANION_ORBIT_SHIFT + offset).max(0);
            if self.system.orbital_position(companion, retarget).is_some() {
                host = companion;
                target = retarget;
            } else {
                self.diagnostics.report(GenerationError::InconsistentPrimary {
                    orbit: target,
                    reason: "collides with a full companion star",
                });
            }
        }

        let Some(orbit) = self.system.orbital_position(host, target) else {
            self.diagnostics.report(GenerationError::OrbitExhausted {
                body: self.record.name.clone(),
                category: "main world",
            });
            return;
        };

        if self.stream.flux() < -2 && self.place_main_satellite(host, orbit) {
            return;
        }

        self.planets -= 1;
        let capacity = max_satellite_orbits_for_orbit(orbit, self.profile.size);
        self.main_world = self.place(host, orbit, self.profile.clone(), capacity, true, "main world");
    }

    fn star_in_slot(&self, host: BodyId, orbit: i32) -> Option<BodyId> {
        let slot = usize::try_from(orbit).ok()?;
        let id = (*self.system.body(host)?.orbits.get(slot)?)?;
        self.system.body(id)?.is_star().then_some(id)
    }

    fn place_main_belt(&mut self) {
        for _ in 0..self.config.max_placement_attempts.max(1) {
            if let Some(id) = self.place_belt(true) {
                self.main_world = Some(id);
                return;
            }
        }
        self.diagnostics.report(GenerationError::OrbitExhausted {
            body: self.record.name.clone(),
            category: "main world belt",
        });
    }

    /// Host the main world on a gas giant or big world at `orbit`
    fn place_main_satellite(&mut self, host: BodyId, orbit: usize) -> bool {
        let mut planet = None;
        if self.gas_giants > 0 {
            let mut stream = self.body_stream();
            let giant = make_gas_giant(&mut stream);
            let capacity = max_satellite_orbits_for_orbit(orbit, giant.size);
            if capacity > 0 {
                self.gas_giants -= 1;
                planet = Some((giant, capacity));
            }
        }
        if planet.is_none() {
            let big = self.synthesize(ZoneProfile::Big.modifiers(), &[]);
            let capacity = max_satellite_orbits_for_orbit(orbit, big.size);
            if capacity > 0 {
                planet = Some((big, capacity));
            }
        }

        let Some((profile, capacity)) = planet else {
            self.diagnostics.report(GenerationError::InconsistentPrimary {
                orbit: orbit as i32,
                reason: "has no satellite orbit for the main world",
            });
            return false;
        };

        self.planets -= 1;
        let Some(planet) = self.place(host, orbit, profile, capacity, false, "main world host")
        else {
            return false;
        };
        let target = self.satellite_orbit(planet);
        let Some(slot) = self.system.orbital_position(planet, target) else {
            return false;
        };
        self.main_world = self.place(planet, slot, self.profile.clone(), 0, true, "main world");
        self.main_world.is_some()
    }

    fn place_gas_giant(&mut self) -> Option<BodyId> {
        let star = self.next_star()?;
        let hz = self.habitable_zone(star);
        let mut stream = self.body_stream();
        let giant = make_gas_giant(&mut stream);
        let offset = gas_giant_offset(&mut self.stream, giant.size);
        let orbit = self.system.orbital_position(star, (hz + offset).max(0))?;

        let capacity = max_satellite_orbits_for_orbit(orbit, giant.size);
        let id = self.place(star, orbit, giant, capacity, false, "gas giant")?;
        self.gas_giants -= 1;
        self.planets -= 1;
        Some(id)
    }

    fn place_belt(&mut self, primary: bool) -> Option<BodyId> {
        let star = self.next_star()?;
        let hz = self.habitable_zone(star);
        let offset = self.stream.two_d6() - 3;
        let orbit = self.system.orbital_position(star, (hz + offset).max(0))?;

        let profile = if primary {
            self.profile.clone()
        } else {
            self.synthesize(belt_modifiers(MAX_POPULATION), &[])
        };
        let id = self.place(star, orbit, profile, 0, primary, "belt")?;
        self.belts = (self.belts - 1).max(0);
        self.planets -= 1;
        Some(id)
    }

    fn place_world(&mut self) -> Option<BodyId> {
        let (star, offset) = if self.planets == 1 {
            (self.system.root(), self.stream.two_d6() + 5)
        } else {
            let star = self.next_star()?;
            let roll = (self.stream.two_d6() - 2).max(0) as usize;
            (star, WORLD_SWEEP.get(roll).copied().unwrap_or(0))
        };
        let hz = self.habitable_zone(star);
        let orbit = self.system.orbital_position(star, hz + offset)?;

        let zone = ZoneProfile::roll(&mut self.stream, offset, false);
        let profile = self.synthesize(zone.modifiers(), &[]);
        let capacity = max_satellite_orbits_for_orbit(orbit, profile.size);
        let id = self.place(star, orbit, profile, capacity, false, "planet")?;
        self.planets -= 1;
        Some(id)
    }

    // =========================================================================
    // Satellites
    // =========================================================================

    fn place_satellites(&mut self) {
        let stars: Vec<BodyId> = self
            .system
            .iter()
            .filter(|(_, body)| body.is_star())
            .map(|(id, _)| id)
            .collect();

        for star in stars {
            let Some(limits) = self.system.star(star).map(|star| star.drive_limits) else {
                continue;
            };
            let children: Vec<(usize, BodyId)> = self
                .system
                .body(star)
                .map(|body| body.children().collect())
                .unwrap_or_default();

            for (orbit, planet) in children {
                if self.system.planet(planet).is_none() {
                    continue;
                }
                self.place_moons(orbit, planet, limits.habitable_zone);
                self.apply_drive_flags(planet, orbit, &limits);
            }
        }
    }

    /// Roll satellites for the planet at stellar `orbit`; a zero adds a
    /// ring and rolls again
    fn place_moons(&mut self, orbit: usize, planet: BodyId, habitable_zone: i32) {
        let Some(profile) = self.system.profile(planet) else {
            return;
        };
        let dm = if profile.size >= 20 {
            1
        } else if profile.has_note("Hsp") {
            4
        } else if orbit <= 6 {
            5
        } else {
            3
        };

        for _ in 0..=self.config.max_rerolls {
            let count = self.stream.d6() - dm;
            if count != 0 {
                for _ in 0..count.max(0) {
                    self.place_satellite(orbit, planet, habitable_zone);
                }
                return;
            }
            self.place_ring(planet);
        }
        self.diagnostics.report(GenerationError::RerollLimit {
            what: "satellite count",
            limit: self.config.max_rerolls,
        });
    }

    /// Target satellite slot around `host`, from its own capacity
    fn satellite_orbit(&mut self, host: BodyId) -> i32 {
        let capacity = self.system.body(host).map_or(0, |body| body.capacity()) as i32;
        if capacity <= 0 {
            return -1;
        }

        let md = (capacity - 5).div_euclid(3) - 1;
        for _ in 0..=self.config.max_rerolls {
            let base = if md <= 1 {
                0
            } else {
                self.stream.die(md as u32, 1) - 1
            };
            let target = self.stream.flux() + 3 * base + 5;
            if target < capacity {
                return target;
            }
        }
        self.diagnostics.report(GenerationError::RerollLimit {
            what: "satellite orbit",
            limit: self.config.max_rerolls,
        });
        capacity - 1
    }

    fn place_satellite(&mut self, orbit: usize, host: BodyId, habitable_zone: i32) -> Option<BodyId> {
        if !self.system.has_available_orbits(host) {
            return None;
        }
        let target = self.satellite_orbit(host);
        let slot = self.system.orbital_position(host, target)?;

        let zone = ZoneProfile::roll(&mut self.stream, orbit as i32 - habitable_zone, true);
        let max_size = self.system.profile(host).map_or(0, |profile| profile.size);
        let mods = UwpModifiers {
            max_size,
            ..zone.modifiers()
        };
        let profile = self.synthesize(mods, &[host]);
        self.place(host, slot, profile, 0, false, "satellite")
    }

    fn place_ring(&mut self, host: BodyId) -> Option<BodyId> {
        if !self.system.has_available_orbits(host) {
            return None;
        }
        let target = self.satellite_orbit(host);
        let slot = self.system.orbital_position(host, target)?;
        self.place(host, slot, make_ring(), 0, false, "ring")
    }

    /// Mark `id`, its factions and everything circling it with its star's
    /// drive limits
    fn apply_drive_flags(&mut self, id: BodyId, orbit: usize, limits: &DriveLimits) {
        let orbit = orbit as i32;
        let mut flags = Vec::new();
        if orbit <= limits.jump {
            flags.push(JUMP_SHADOW_NOTE);
        }
        if orbit > limits.maneuver {
            flags.push(MANEUVER_LIMIT_NOTE);
        }
        if flags.is_empty() {
            return;
        }

        for body in self.system.walk(id) {
            let Some(planet) = self.system.planet_mut(body) else {
                continue;
            };
            let profiles = std::iter::once(&mut planet.profile)
                .chain(planet.factions.iter_mut().map(|faction| &mut faction.profile));
            for profile in profiles {
                for flag in &flags {
                    profile.add_note(*flag);
                }
            }
        }
    }

    /// Tech and law notes for every populated body
    fn enrich_notes(&mut self) {
        for id in self.system.walk(self.system.root()) {
            let Some(body) = self.system.body(id) else {
                continue;
            };
            let name = body.name.clone();
            if let Some(profile) = self.system.profile_mut(id) {
                enrich_profile(
                    profile,
                    &name,
                    &self.notes,
                    self.config.max_rerolls,
                    &mut self.diagnostics,
                );
            }
        }
    }

    // =========================================================================
    // Synthesis and bookkeeping
    // =========================================================================

    /// Profile for a secondary body
    ///
    /// Unpopulated systems only get empty worlds. Otherwise the body may
    /// become a colony of a registered owner, or rolls a society of its own.
    /// Population is always capped by the main world's.
    fn synthesize(&mut self, mods: UwpModifiers, exclude: &[BodyId]) -> UwpElements {
        let mut stream = self.body_stream();
        let mods = UwpModifiers {
            max_population: mods.max_population.min(self.profile.population),
            ..mods
        };

        if self.profile.population == 0 {
            return make_empty(&mut stream, &mods);
        }

        if self.config.colonies {
            if let Some(owner) = choose_owner(&mut stream, &self.owners, exclude) {
                if let Some(owner_profile) = self.system.profile(owner).cloned() {
                    let tag = ownership_tag(&owner_profile, &self.owner_path(owner));
                    return make_colony(
                        &mut stream,
                        &mods,
                        &owner_profile,
                        &tag,
                        self.config.max_rerolls,
                        &mut self.diagnostics,
                    );
                }
            }
        }
        make_world(&mut stream, &mods)
    }

    /// Overlay key of an owner; the main world answers to the bare hex
    fn owner_path(&self, owner: BodyId) -> String {
        if Some(owner) == self.main_world {
            self.record.hex.clone()
        } else {
            format!("{}{}", self.record.hex, self.system.suffix(owner))
        }
    }

    fn place(
        &mut self,
        host: BodyId,
        orbit: usize,
        profile: UwpElements,
        capacity: usize,
        primary: bool,
        category: &'static str,
    ) -> Option<BodyId> {
        let host_name = self.system.body(host)?.name.clone();
        let params = PlanetParams {
            name: format!("{}-{}", host_name, orbit),
            profile,
            capacity,
            primary,
        };
        match self.system.place_planet(host, orbit, params) {
            Ok(id) => {
                debug!(hex = %self.record.hex, body = %host_name, orbit, category, "placed body");
                self.settle(id, primary);
                Some(id)
            }
            Err(err) => {
                self.diagnostics.report(err.into());
                None
            }
        }
    }

    /// Classify a placed body, split it into factions if balkanized and
    /// register it as a potential colony owner
    fn settle(&mut self, id: BodyId, primary: bool) {
        let Some(profile) = self.system.profile_mut(id) else {
            return;
        };
        if primary {
            classify_main_world(profile);
        } else {
            classify(profile, false, &self.profile);
        }
        let settled = profile.clone();

        if self.config.factions && settled.is_balkanized() {
            let mut stream = self.body_stream();
            let mut factions = make_factions(
                &mut stream,
                &settled,
                self.config.max_rerolls,
                &mut self.diagnostics,
            );
            for faction in &mut factions {
                classify(&mut faction.profile, false, &self.profile);
            }
            if let Some(planet) = self.system.planet_mut(id) {
                planet.factions = factions;
            }
        }

        if settled.is_populated() && !settled.is_captive() {
            self.owners.push(id);
        }
    }
}

/// Generate the system around `record` and flatten it
pub fn enrich_planets(record: &WorldRecord, config: &GeneratorConfig) -> Vec<OverlayWorld> {
    let mut generator = WorldGen::new(record, config.clone());
    generator.generate_planets();
    generator.overlay()
}
