//! Build and drive a fully-initialized solar-system scenario
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - time compression (`TimeScale`)
//!
//! `Scenario` is the whole public surface of the dynamics: rendering and
//! input collaborators read body state through it and push mass, time scale
//! and reset commands into it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::configuration::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::absorption::{evaluate_absorption, Absorption};
use crate::simulation::catalog::{canonical_system, LaunchSite};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, NPoint3, NVec3, System};
use crate::simulation::time::TimeScale;

/// Upper bound (exclusive) of each randomised launch velocity component, m/s
pub const MAX_RANDOM_LAUNCH_SPEED: f64 = 10_000.0;

/// Direction of a runtime mass adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassStep {
    Increase,
    Decrease,
}

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    system: System,
    forces: AccelSet,
    time_scale: TimeScale,
    launch: LaunchSite,
    randomize_on_reset: bool,
    rng: StdRng,
}

impl Default for Scenario {
    /// The canonical solar system with default settings
    fn default() -> Self {
        Self::assemble(Engine::default(), Parameters::default(), LaunchSite::default(), false)
    }
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        cfg.validate()?;
        Ok(Self::assemble(
            cfg.engine(),
            cfg.parameters(),
            cfg.launch_site(),
            cfg.launch.randomize_on_reset,
        ))
    }

    // inputs are already validated
    fn assemble(engine: Engine, parameters: Parameters, launch: LaunchSite, randomize_on_reset: bool) -> Self {
        let system = canonical_system(&launch, parameters.length_scale);

        // Forces: register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { G: parameters.G });

        let time_scale = TimeScale::new(parameters.time_compression).unwrap_or_default();
        let rng = StdRng::seed_from_u64(parameters.seed);

        Self {
            engine,
            parameters,
            system,
            forces,
            time_scale,
            launch,
            randomize_on_reset,
            rng,
        }
    }

    // =====================================================================
    // dynamics
    // =====================================================================

    /// Run one integration step of `dt` seconds over every active body in
    /// fixed order. Non-positive or non-finite `dt` is a no-op; returns
    /// whether a step was taken.
    pub fn advance(&mut self, dt: f64) -> bool {
        symplectic_euler(&mut self.system, &self.forces, self.engine.gravity, dt)
    }

    /// Apply the absorption policy to the current positions
    pub fn evaluate_absorption(&mut self) -> Vec<Absorption> {
        evaluate_absorption(&mut self.system, self.parameters.length_scale)
    }

    /// Simulated seconds elapsed since the last reset
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    // =====================================================================
    // read access
    // =====================================================================

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn body(&self, id: BodyId) -> &Body {
        self.system.body(id)
    }

    pub fn launch_site(&self) -> LaunchSite {
        self.launch
    }

    pub fn time_scale(&self) -> &TimeScale {
        &self.time_scale
    }

    /// Real elapsed milliseconds to simulated seconds at the current compression
    pub fn simulated_delta(&self, real_elapsed_ms: f64) -> f64 {
        self.time_scale.simulated_delta(real_elapsed_ms)
    }

    // =====================================================================
    // commands
    // =====================================================================

    pub fn set_mass(&mut self, id: BodyId, mass: f64) -> SimResult<()> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(SimError::InvalidMass { body: id, mass });
        }
        self.system.body_mut(id).set_mass_unchecked(mass);
        Ok(())
    }

    /// Multiply or divide a mass by its step factor (`star_mass_step` for the
    /// Star, `planet_mass_step` for everything else)
    pub fn step_mass(&mut self, id: BodyId, step: MassStep) -> SimResult<()> {
        let factor = match id {
            BodyId::Star => self.parameters.star_mass_step,
            _ => self.parameters.planet_mass_step,
        };
        let current = self.body(id).mass();
        let mass = match step {
            MassStep::Increase => current * factor,
            MassStep::Decrease => current / factor,
        };
        self.set_mass(id, mass)?;
        info!(body = %id, mass, "mass stepped");
        Ok(())
    }

    /// Values `<= 0` destroy a planet or the free object; a destroyed body
    /// stays destroyed. The Star ignores them.
    pub fn set_display_radius(&mut self, id: BodyId, radius: f64) {
        self.system.body_mut(id).set_display_radius(radius);
    }

    /// Teleport a body, keeping the registry in sync
    pub fn place_body(&mut self, id: BodyId, position: NPoint3, velocity: NVec3) {
        self.system.place(id, position, velocity);
    }

    pub fn set_time_compression(&mut self, coefficient: f64) -> SimResult<()> {
        self.time_scale.set(coefficient)
    }

    pub fn speed_up(&mut self) {
        self.time_scale.speed_up();
    }

    pub fn slow_down(&mut self) {
        self.time_scale.slow_down();
    }

    /// Restore every body to its launch-time state, re-activate all of them
    /// and restore the default time compression. With randomised relaunch
    /// the free object first gets a new launch site from the seeded rng.
    pub fn reset(&mut self) {
        if self.randomize_on_reset {
            self.launch = self.random_launch_site();
        }
        self.system = canonical_system(&self.launch, self.parameters.length_scale);
        self.time_scale.reset();
        info!(launch_planet = %self.launch.planet, "simulation reset");
    }

    fn random_launch_site(&mut self) -> LaunchSite {
        let planet = BodyId::PLANETS[self.rng.gen_range(0..BodyId::PLANETS.len())];
        let velocity = NVec3::new(
            self.rng.gen_range(0.0..MAX_RANDOM_LAUNCH_SPEED),
            self.rng.gen_range(0.0..MAX_RANDOM_LAUNCH_SPEED),
            self.rng.gen_range(0.0..MAX_RANDOM_LAUNCH_SPEED),
        );
        LaunchSite { planet, velocity }
    }
}
