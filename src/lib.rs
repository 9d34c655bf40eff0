pub mod simulation;
pub mod configuration;
pub mod driver;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyId, System, NVec3, NPoint3, distance, distance_to_origin};
pub use simulation::registry::KinematicRegistry;
pub use simulation::catalog::{Canonical, LaunchSite, CATALOG, canonical, canonical_body, canonical_system};
pub use simulation::forces::{Acceleration, AccelSet, GravityMode, GravitySource, NewtonianGravity, gravitational_acceleration, gravity_sources};
pub use simulation::integrator::{symplectic_euler, euler_step, advance_spin};
pub use simulation::absorption::{Absorption, evaluate_absorption};
pub use simulation::time::{TimeScale, FrameClock, Tick};
pub use simulation::scenario::{Scenario, MassStep};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use configuration::config::{EngineConfig, ParametersConfig, LaunchConfig, ScenarioConfig};
pub use driver::headless::{run_headless, ClockSource, RunOptions, RunSummary};
pub use benchmark::benchmark::{bench_gravity, bench_advance};
pub use error::{SimError, SimResult};
