//! Core state types for the solar-system dynamics.
//!
//! Defines the vector/point algebra used everywhere (`NVec3`, `NPoint3`),
//! the fixed set of body identities (`BodyId`), the per-body model (`Body`)
//! and the `System` that bundles the Star, the orbiting bodies, the shared
//! kinematic registry and the simulated clock `t`.
//!
//! Positions are points, displacements/velocities/accelerations are vectors:
//! `point - point = vector`, `point + vector = point`.

use std::fmt;

use nalgebra::{Point3, Vector3};
use serde::Deserialize;
use tracing::debug;

use crate::simulation::registry::KinematicRegistry;

pub type NVec3 = Vector3<f64>;
pub type NPoint3 = Point3<f64>;

/// Euclidean distance between two points (meters)
pub fn distance(a: &NPoint3, b: &NPoint3) -> f64 {
    nalgebra::distance(a, b)
}

/// Distance of a point to the origin, where the Star sits
pub fn distance_to_origin(p: &NPoint3) -> f64 {
    p.coords.norm()
}

/// Identity of every body taking part in the dynamics.
///
/// The discriminant order is the canonical table order: Star first, then the
/// planets by increasing orbital distance, then the free object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyId {
    Star,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    FreeObject,
}

impl BodyId {
    /// The eight planets, innermost first
    pub const PLANETS: [BodyId; 8] = [
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Fixed update order of one physics tick. Bodies later in this list see
    /// the already-updated positions of the bodies before them.
    pub const UPDATE_ORDER: [BodyId; 9] = [
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::FreeObject,
    ];

    /// Index of the body in the canonical table (Star = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot in `System::bodies` and in the registry; the Star has none
    pub fn slot(self) -> Option<usize> {
        match self {
            BodyId::Star => None,
            other => Some(other as usize - 1),
        }
    }

    pub fn is_planet(self) -> bool {
        !matches!(self, BodyId::Star | BodyId::FreeObject)
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyId::Star => "star",
            BodyId::Mercury => "mercury",
            BodyId::Venus => "venus",
            BodyId::Earth => "earth",
            BodyId::Mars => "mars",
            BodyId::Jupiter => "jupiter",
            BodyId::Saturn => "saturn",
            BodyId::Uranus => "uranus",
            BodyId::Neptune => "neptune",
            BodyId::FreeObject => "free_object",
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single body: live kinematic state plus its adjustable attributes.
///
/// `radius` is the display radius in scene units; a radius of 0 means the
/// body has been absorbed and is inactive until the next reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) id: BodyId,
    pub(crate) x: NPoint3,   // position (m)
    pub(crate) v: NVec3,     // velocity (m/s)
    pub(crate) m: f64,       // mass (kg)
    pub(crate) radius: f64,  // display radius (scene units)
    pub(crate) theta: f64,   // spin angle, degrees
    pub(crate) phi: f64,     // spin angle, degrees
}

impl Body {
    pub fn new(id: BodyId, x: NPoint3, v: NVec3, m: f64, radius: f64, phi: f64, theta: f64) -> Self {
        Self { id, x, v, m, radius, theta, phi }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn position(&self) -> NPoint3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn display_radius(&self) -> f64 {
        self.radius
    }

    pub fn spin_theta(&self) -> f64 {
        self.theta
    }

    pub fn spin_phi(&self) -> f64 {
        self.phi
    }

    pub fn is_active(&self) -> bool {
        self.radius > 0.0
    }

    /// Sets the mass without validation; `Scenario::set_mass` is the checked path
    pub(crate) fn set_mass_unchecked(&mut self, m: f64) {
        self.m = m;
    }

    /// Sets the display radius. Any value `<= 0` destroys the body.
    /// A destroyed body keeps radius 0: only a full reset brings it back.
    /// The Star can be resized but never destroyed.
    pub fn set_display_radius(&mut self, radius: f64) {
        if !self.is_active() {
            debug!(body = %self.id, "ignoring radius change on destroyed body");
            return;
        }
        if self.id == BodyId::Star && !(radius > 0.0) {
            debug!(radius, "ignoring non-positive star radius");
            return;
        }
        self.radius = if radius > 0.0 { radius } else { 0.0 };
    }

    pub(crate) fn destroy(&mut self) {
        self.radius = 0.0;
    }
}

/// Whole simulated system: the fixed Star, the orbiting bodies in
/// `BodyId::UPDATE_ORDER`, the shared registry and the simulated time.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub star: Body,
    pub bodies: Vec<Body>, // one per slot, in update order
    pub registry: KinematicRegistry,
    pub t: f64, // simulated seconds
}

impl System {
    pub fn body(&self, id: BodyId) -> &Body {
        match id.slot() {
            Some(i) => &self.bodies[i],
            None => &self.star,
        }
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        match id.slot() {
            Some(i) => &mut self.bodies[i],
            None => &mut self.star,
        }
    }

    /// Moves a body and keeps its registry entry in sync.
    /// The Star is pinned to the origin and ignores this.
    pub fn place(&mut self, id: BodyId, x: NPoint3, v: NVec3) {
        if id == BodyId::Star {
            return;
        }
        let body = self.body_mut(id);
        body.x = x;
        body.v = v;
        self.registry.set(id, x);
    }
}
