//! Canonical launch-time constants of the solar system.
//!
//! One row per body (SI units, display radii in scene units). Every body is
//! built from this table by [`canonical_body`]; planets start on the +x axis
//! at their orbital distance with a tangential velocity along +z.

use crate::simulation::registry::KinematicRegistry;
use crate::simulation::states::{Body, BodyId, NPoint3, NVec3, System};

/// Launch-time attributes of one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canonical {
    pub id: BodyId,
    pub display_radius: f64, // scene units
    pub distance: f64,       // m, distance to the Star
    pub mass: f64,           // kg
    pub speed: f64,          // m/s, initial tangential speed
    pub phi: f64,            // degrees
    pub theta: f64,          // degrees
}

const fn row(id: BodyId, display_radius: f64, distance: f64, mass: f64, speed: f64, phi: f64) -> Canonical {
    Canonical { id, display_radius, distance, mass, speed, phi, theta: 0.0 }
}

/// Indexed by `BodyId::index()`
pub const CATALOG: [Canonical; 10] = [
    row(BodyId::Star, 0.4, 0.0, 1.989e30, 0.0, 1.0),
    row(BodyId::Mercury, 0.02439, 57_910_000e3, 3.3011e23, 47_870.0, 10.0),
    row(BodyId::Venus, 0.06051, 108_208_475e3, 4.8675e24, 35_020.0, 10.0),
    row(BodyId::Earth, 0.06371, 149_598_023e3, 5.9724e24, 29_780.0, 10.0),
    row(BodyId::Mars, 0.03389, 227_939_200e3, 6.4171e23, 24_070.0, 10.0),
    row(BodyId::Jupiter, 0.349555, 778_340_821e3, 1.8982e27, 13_070.0, 10.0),
    row(BodyId::Saturn, 0.29116, 1_429_400_000e3, 5.6834e26, 9_690.0, 10.0),
    row(BodyId::Uranus, 0.12681, 2_870_658_186e3, 8.681e25, 6_800.0, 10.0),
    row(BodyId::Neptune, 0.12311, 4_498_396_441e3, 1.02413e26, 5_430.0, 10.0),
    // the free object's distance/speed come from its launch site
    row(BodyId::FreeObject, 0.018, 0.0, 9.5e20, 0.0, 0.0),
];

pub fn canonical(id: BodyId) -> &'static Canonical {
    &CATALOG[id.index()]
}

/// Where and how fast the free object leaves: just outside a planet's
/// surface, on the far side from the Star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSite {
    pub planet: BodyId,
    pub velocity: NVec3,
}

impl Default for LaunchSite {
    fn default() -> Self {
        Self {
            planet: BodyId::Earth,
            velocity: NVec3::new(10.0, 0.0, 0.0),
        }
    }
}

impl LaunchSite {
    pub fn position(&self, length_scale: f64) -> NPoint3 {
        let planet = canonical(self.planet);
        let object = canonical(BodyId::FreeObject);
        let x = planet.distance + (planet.display_radius + object.display_radius) * length_scale;
        NPoint3::new(x, 0.0, 0.0)
    }
}

/// Build one body at its launch-time state
pub fn canonical_body(id: BodyId, launch: &LaunchSite, length_scale: f64) -> Body {
    let c = canonical(id);
    let (x, v) = match id {
        BodyId::Star => (NPoint3::origin(), NVec3::zeros()),
        BodyId::FreeObject => (launch.position(length_scale), launch.velocity),
        _ => (NPoint3::new(c.distance, 0.0, 0.0), NVec3::new(0.0, 0.0, c.speed)),
    };
    Body::new(id, x, v, c.mass, c.display_radius, c.phi, c.theta)
}

/// Build the full system at t = 0 with a registry seeded from the bodies
pub fn canonical_system(launch: &LaunchSite, length_scale: f64) -> System {
    let star = canonical_body(BodyId::Star, launch, length_scale);
    let bodies: Vec<Body> = BodyId::UPDATE_ORDER
        .iter()
        .map(|&id| canonical_body(id, launch, length_scale))
        .collect();
    let registry = KinematicRegistry::from_bodies(&bodies);

    System {
        star,
        bodies,
        registry,
        t: 0.0,
    }
}
