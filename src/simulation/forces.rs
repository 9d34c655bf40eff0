//! Force / acceleration contributors for the solar-system dynamics
//!
//! Defines the gravity source list a body sees, the acceleration trait,
//! direct Newtonian gravity, and the rule that picks which bodies act as
//! sources for which.

use serde::Deserialize;

use crate::simulation::states::{BodyId, NPoint3, NVec3, System};

/// A point mass pulling on the body being updated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitySource {
    pub mass: f64,          // kg
    pub position: NPoint3,  // m
}

/// Which bodies attract the planets.
///
/// The free object is always pulled by the Star and all eight planets.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityMode {
    /// Planets feel the Star only and do not perturb one another
    #[default]
    #[serde(rename = "star_only")]
    StarOnly,

    /// Planets also feel every other planet
    #[serde(rename = "mutual")]
    Mutual,
}

/// Trait for acceleration sources acting on a single body at `at`
/// Implementations return their total contribution from `sources`
pub trait Acceleration {
    fn acceleration(&self, at: &NPoint3, sources: &[GravitySource]) -> NVec3;
}

/// Collection of acceleration terms; their contributions are summed
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration at `at` from every term
    pub fn accumulate(&self, at: &NPoint3, sources: &[GravitySource]) -> NVec3 {
        self.terms
            .iter()
            .fold(NVec3::zeros(), |acc, term| acc + term.acceleration(at, sources))
    }
}

/// Unsoftened Newtonian gravity, summed directly over the sources
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, at: &NPoint3, sources: &[GravitySource]) -> NVec3 {
        let mut acc = NVec3::zeros();

        for src in sources {
            // r points from the source to the body
            let r = *at - src.position;
            let d = r.norm();

            // coincident points: no direction, no contribution
            if d == 0.0 {
                continue;
            }

            // attraction: unit vector back toward the source
            let u = -r / d;
            let a = self.G * src.mass / (d * d);
            acc += a * u;
        }

        acc
    }
}

/// `sum G * m_src / d^2` toward each source, zero for coincident sources
#[allow(non_snake_case)]
pub fn gravitational_acceleration(G: f64, at: &NPoint3, sources: &[GravitySource]) -> NVec3 {
    NewtonianGravity { G }.acceleration(at, sources)
}

/// Gravity sources acting on `id` this instant, read from the registry.
///
/// - Star: none (it never moves)
/// - planets: the Star, plus the other planets under [`GravityMode::Mutual`]
/// - free object: the Star and all eight planets, destroyed ones included
pub fn gravity_sources(sys: &System, id: BodyId, mode: GravityMode) -> Vec<GravitySource> {
    if id == BodyId::Star {
        return Vec::new();
    }

    let mut sources = Vec::with_capacity(BodyId::PLANETS.len() + 1);
    sources.push(GravitySource {
        mass: sys.star.mass(),
        position: NPoint3::origin(),
    });

    let include_planets = id == BodyId::FreeObject || mode == GravityMode::Mutual;
    if include_planets {
        for planet in BodyId::PLANETS.iter().copied().filter(|&p| p != id) {
            sources.push(GravitySource {
                mass: sys.body(planet).mass(),
                position: sys.registry.get(planet),
            });
        }
    }

    sources
}
