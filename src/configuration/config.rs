//! Configuration types for loading simulation scenarios from YAML.
//!
//! The bodies' physical constants are compiled in (see
//! `simulation::catalog`); a scenario file only carries run-time knobs:
//!
//! - [`EngineConfig`]     – gravity mode and tick cadences
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`LaunchConfig`]     – where the free object starts
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section and field is optional; missing ones take the canonical
//! defaults shown here:
//!
//! ```yaml
//! engine:
//!   gravity: star_only      # or "mutual": planets also pull on each other
//!   physics_delay_ms: 10    # real time between physics ticks
//!   frame_delay_ms: 10      # real time between render ticks
//!
//! parameters:
//!   G: 6.67428e-11          # gravitational constant
//!   length_scale: 7.45e10   # meters per scene unit
//!   time_compression: 1.0e6 # simulated ms per real ms
//!   seed: 42                # seed for randomised relaunches
//!   planet_mass_step: 10.8
//!   star_mass_step: 1.8
//!
//! launch:
//!   planet: earth
//!   velocity: [ 10.0, 0.0, 0.0 ]
//!   randomize_on_reset: false
//! ```

use std::io::Read;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::catalog::LaunchSite;
use crate::simulation::engine::Engine;
use crate::simulation::forces::GravityMode;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, NVec3};

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub gravity: GravityMode, // which bodies attract the planets
    pub physics_delay_ms: u64, // minimum real time between physics ticks
    pub frame_delay_ms: u64, // minimum real time between render ticks
}

impl Default for EngineConfig {
    fn default() -> Self {
        let engine = Engine::default();
        Self {
            gravity: engine.gravity,
            physics_delay_ms: engine.physics_delay.as_millis() as u64,
            frame_delay_ms: engine.frame_delay.as_millis() as u64,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64, // gravitational constant
    pub length_scale: f64, // meters per scene unit
    pub time_compression: f64, // initial and reset time compression coefficient
    pub seed: u64, // deterministic seed to make runs reproducable
    pub planet_mass_step: f64, // factor of one planet mass step
    pub star_mass_step: f64, // factor of one star mass step
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.G,
            length_scale: p.length_scale,
            time_compression: p.time_compression,
            seed: p.seed,
            planet_mass_step: p.planet_mass_step,
            star_mass_step: p.star_mass_step,
        }
    }
}

/// Launch site of the free object
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LaunchConfig {
    pub planet: BodyId, // must be one of the eight planets
    pub velocity: [f64; 3], // initial velocity (m/s)
    pub randomize_on_reset: bool, // pick a random planet and velocity on every reset
}

impl Default for LaunchConfig {
    fn default() -> Self {
        let site = LaunchSite::default();
        Self {
            planet: site.planet,
            velocity: [site.velocity.x, site.velocity.y, site.velocity.z],
            randomize_on_reset: false,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // gravity mode and cadences
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub launch: LaunchConfig, // free object launch site
}

fn positive(name: &str, value: f64) -> SimResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::config(format!("{name} must be positive and finite, got {value}")))
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_reader(reader: impl Read) -> SimResult<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> SimResult<()> {
        let p = &self.parameters;
        positive("G", p.G)?;
        positive("length_scale", p.length_scale)?;
        positive("time_compression", p.time_compression)?;
        positive("planet_mass_step", p.planet_mass_step)?;
        positive("star_mass_step", p.star_mass_step)?;

        if self.engine.physics_delay_ms == 0 || self.engine.frame_delay_ms == 0 {
            return Err(SimError::config("tick delays must be at least 1 ms"));
        }
        if !self.launch.planet.is_planet() {
            return Err(SimError::config(format!(
                "launch body must be a planet, got {}",
                self.launch.planet
            )));
        }
        if self.launch.velocity.iter().any(|c| !c.is_finite()) {
            return Err(SimError::config("launch velocity must be finite"));
        }
        Ok(())
    }

    pub fn engine(&self) -> Engine {
        Engine {
            gravity: self.engine.gravity,
            physics_delay: Duration::from_millis(self.engine.physics_delay_ms),
            frame_delay: Duration::from_millis(self.engine.frame_delay_ms),
        }
    }

    pub fn parameters(&self) -> Parameters {
        let p = &self.parameters;
        Parameters {
            G: p.G,
            length_scale: p.length_scale,
            time_compression: p.time_compression,
            seed: p.seed,
            planet_mass_step: p.planet_mass_step,
            star_mass_step: p.star_mass_step,
        }
    }

    pub fn launch_site(&self) -> LaunchSite {
        let [x, y, z] = self.launch.velocity;
        LaunchSite {
            planet: self.launch.planet,
            velocity: NVec3::new(x, y, z),
        }
    }
}
