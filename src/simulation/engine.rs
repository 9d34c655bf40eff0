//! High-level runtime engine settings
//!
//! Selects the gravity sourcing mode and the physics / render cadences
//! used when building and driving a `Scenario`

use std::time::Duration;

use crate::simulation::forces::GravityMode;

pub const PHYSICS_DELAY: Duration = Duration::from_millis(10);
pub const FRAME_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub gravity: GravityMode, // star_only or mutual
    pub physics_delay: Duration, // real time between physics ticks
    pub frame_delay: Duration, // real time between render ticks
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            gravity: GravityMode::StarOnly,
            physics_delay: PHYSICS_DELAY,
            frame_delay: FRAME_DELAY,
        }
    }
}
