//! The body arena and its placement primitives

use serde::{Deserialize, Serialize};

use planetary::UwpElements;
use stellar::{DriveLimits, star_limits};

use crate::body::{Body, BodyId, BodyKind, Planet, PlanetParams, Star, StarParams};
use crate::climate::apply_climate_notes;
use crate::error::OrbitError;

/// All bodies of one system, rooted at the primary star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    bodies: Vec<Body>,
}

impl StarSystem {
    /// Start a system from its primary star
    pub fn new(root: StarParams) -> Self {
        let mut system = Self { bodies: Vec::new() };
        system.push_star(None, root);
        system
    }

    pub fn root(&self) -> BodyId {
        BodyId::ROOT
    }

    /// Number of bodies in the arena, placeholders included
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    fn body_or_err(&self, id: BodyId) -> Result<&Body, OrbitError> {
        self.body(id).ok_or(OrbitError::UnknownBody(id))
    }

    /// Every body with its id, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(idx, body)| (BodyId::new(idx), body))
    }

    pub fn star(&self, id: BodyId) -> Option<&Star> {
        self.body(id).and_then(Body::star)
    }

    pub fn planet(&self, id: BodyId) -> Option<&Planet> {
        self.body(id).and_then(Body::planet)
    }

    pub fn planet_mut(&mut self, id: BodyId) -> Option<&mut Planet> {
        self.bodies.get_mut(id.index()).and_then(Body::planet_mut)
    }

    pub fn profile(&self, id: BodyId) -> Option<&UwpElements> {
        self.planet(id).map(|planet| &planet.profile)
    }

    pub fn profile_mut(&mut self, id: BodyId) -> Option<&mut UwpElements> {
        self.planet_mut(id).map(|planet| &mut planet.profile)
    }

    // =========================================================================
    // Tree navigation
    // =========================================================================

    /// Dash-joined orbit chain from the root, e.g. `-0-3`
    pub fn suffix(&self, id: BodyId) -> String {
        let mut parts = Vec::new();
        let mut current = self.body(id);
        while let Some(body) = current {
            let (Some(parent), Some(orbit)) = (body.parent, body.orbit) else {
                break;
            };
            parts.push(orbit);
            current = self.body(parent);
        }
        parts
            .iter()
            .rev()
            .map(|orbit| format!("-{}", orbit))
            .collect()
    }

    /// Nearest ancestor that is a star
    pub fn parent_star(&self, id: BodyId) -> Option<BodyId> {
        let mut current = self.body(id)?.parent;
        while let Some(parent) = current {
            let body = self.body(parent)?;
            if body.is_star() {
                return Some(parent);
            }
            current = body.parent;
        }
        None
    }

    /// Depth-first, parent before children, children in orbit order
    pub fn walk(&self, from: BodyId) -> Vec<BodyId> {
        let mut order = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let Some(body) = self.body(id) else {
                continue;
            };
            order.push(id);
            let children: Vec<BodyId> = body.children().map(|(_, child)| child).collect();
            stack.extend(children.into_iter().rev());
        }
        order
    }

    // =========================================================================
    // Slot allocation
    // =========================================================================

    pub fn min_orbit(&self, id: BodyId) -> Option<usize> {
        self.body(id).and_then(Body::min_orbit)
    }

    pub fn max_orbit(&self, id: BodyId) -> Option<usize> {
        self.body(id).and_then(Body::max_orbit)
    }

    pub fn has_available_orbits(&self, id: BodyId) -> bool {
        self.body(id).is_some_and(Body::has_available_orbits)
    }

    /// See [`Body::orbital_position`]
    pub fn orbital_position(&self, id: BodyId, target: i32) -> Option<usize> {
        self.body(id).and_then(|body| body.orbital_position(target))
    }

    fn check_slot(&self, host: BodyId, orbit: usize) -> Result<&Body, OrbitError> {
        let body = self.body_or_err(host)?;
        if orbit >= body.capacity() {
            return Err(OrbitError::OutOfRange {
                body: body.name.clone(),
                orbit,
                capacity: body.capacity(),
            });
        }
        if body.orbits[orbit].is_some() {
            return Err(OrbitError::Occupied {
                body: body.name.clone(),
                orbit,
            });
        }
        Ok(body)
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Place a companion star in slot `orbit` of star `host`
    ///
    /// The companion's limits are widened against the host's, and its
    /// precluded inner slots are filled with placeholders.
    pub fn place_star(
        &mut self,
        host: BodyId,
        orbit: usize,
        params: StarParams,
    ) -> Result<BodyId, OrbitError> {
        let body = self.check_slot(host, orbit)?;
        if !body.is_star() {
            return Err(OrbitError::StarInPlanetOrbit {
                body: body.name.clone(),
            });
        }

        let id = self.push_star(Some(host), params);
        self.commit(host, orbit, id);
        Ok(id)
    }

    /// Place a planet in slot `orbit` of `host`, then stamp climate notes
    ///
    /// Climate notes come from the nearest star, using the orbit of the
    /// body that directly circles it.
    pub fn place_planet(
        &mut self,
        host: BodyId,
        orbit: usize,
        params: PlanetParams,
    ) -> Result<BodyId, OrbitError> {
        self.check_slot(host, orbit)?;

        let id = BodyId::new(self.bodies.len());
        self.bodies.push(Body {
            name: params.name,
            orbit: None,
            orbits: vec![None; params.capacity],
            primary: params.primary,
            parent: Some(host),
            kind: BodyKind::Planet(Planet {
                profile: params.profile,
                factions: Vec::new(),
            }),
        });
        self.commit(host, orbit, id);

        if let Some((stellar_orbit, limits)) = self.stellar_frame(id) {
            if let Some(profile) = self.profile_mut(id) {
                apply_climate_notes(stellar_orbit, &limits, profile);
            }
        }
        Ok(id)
    }

    /// The orbit at which `id`'s lineage circles its nearest star, and that star's limits
    pub fn stellar_frame(&self, id: BodyId) -> Option<(usize, DriveLimits)> {
        let mut current = self.body(id)?;
        loop {
            let parent = self.body(current.parent?)?;
            if let Some(star) = parent.star() {
                return Some((current.orbit?, star.drive_limits));
            }
            current = parent;
        }
    }

    fn push_star(&mut self, parent: Option<BodyId>, params: StarParams) -> BodyId {
        let parent_limits = parent
            .and_then(|parent| self.star(parent))
            .map(|star| star.drive_limits);
        let drive_limits = star_limits(&params.spectral, parent_limits.as_ref());

        let id = BodyId::new(self.bodies.len());
        self.bodies.push(Body {
            name: params.name,
            orbit: None,
            orbits: vec![None; params.capacity],
            primary: false,
            parent,
            kind: BodyKind::Star(Star {
                spectral: params.spectral,
                drive_limits,
            }),
        });

        let precluded = usize::try_from(drive_limits.precluded)
            .unwrap_or(0)
            .min(params.capacity);
        for slot in 0..precluded {
            let filler = BodyId::new(self.bodies.len());
            self.bodies.push(Body {
                name: "***".to_string(),
                orbit: None,
                orbits: Vec::new(),
                primary: false,
                parent: Some(id),
                kind: BodyKind::NoOrbit,
            });
            self.commit(id, slot, filler);
        }

        id
    }

    fn commit(&mut self, host: BodyId, orbit: usize, child: BodyId) {
        self.bodies[host.index()].orbits[orbit] = Some(child);
        self.bodies[child.index()].orbit = Some(orbit);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The body flagged primary, if one was placed
    pub fn main_world(&self) -> Option<BodyId> {
        self.iter()
            .find(|(_, body)| body.primary)
            .map(|(id, _)| id)
    }

    /// Occupied slots across the tree, placeholders excluded
    pub fn occupied_orbit_count(&self) -> usize {
        self.walk(self.root())
            .into_iter()
            .filter_map(|id| self.body(id))
            .filter(|body| body.orbit.is_some() && !body.is_no_orbit())
            .count()
    }
}
