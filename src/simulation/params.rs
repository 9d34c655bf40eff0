//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G`,
//! - length scale between meters and scene units (display radii),
//! - default time compression,
//! - mass step factors for runtime mass adjustment,
//! - seed for randomised relaunches

use crate::simulation::time::DEFAULT_TIME_COMPRESSION;

pub const GRAVITATIONAL_CONSTANT: f64 = 6.67428e-11; // m^3 kg^-1 s^-2

/// Meters per scene unit
pub const LENGTH_SCALE: f64 = 149e9 / 2.0;

pub const PLANET_MASS_STEP: f64 = 10.8;
pub const STAR_MASS_STEP: f64 = 1.8;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub length_scale: f64, // meters per scene unit
    pub time_compression: f64, // default simulated ms per real ms
    pub seed: u64, // deterministic seed
    pub planet_mass_step: f64, // mass factor for planets and the free object
    pub star_mass_step: f64, // mass factor for the star
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            length_scale: LENGTH_SCALE,
            time_compression: DEFAULT_TIME_COMPRESSION,
            seed: 42,
            planet_mass_step: PLANET_MASS_STEP,
            star_mass_step: STAR_MASS_STEP,
        }
    }
}
