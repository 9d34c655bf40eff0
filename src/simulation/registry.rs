//! Kinematic state registry: latest position of every non-Star body.
//!
//! Each body writes only its own entry during a physics tick and reads every
//! other entry when gathering gravity sources. Because bodies are updated in
//! a fixed order, an entry read before its owner has stepped holds the
//! previous tick's position, and an entry read afterwards holds this tick's.
//! The Star is not stored: it is always at the origin.

use crate::simulation::states::{Body, BodyId, NPoint3};

const SLOTS: usize = BodyId::UPDATE_ORDER.len();

#[derive(Debug, Clone, PartialEq)]
pub struct KinematicRegistry {
    positions: [NPoint3; SLOTS],
}

impl Default for KinematicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KinematicRegistry {
    /// Registry with every entry at the origin
    pub fn new() -> Self {
        Self {
            positions: [NPoint3::origin(); SLOTS],
        }
    }

    /// Seed the registry from the bodies' current positions
    pub fn from_bodies(bodies: &[Body]) -> Self {
        let mut registry = Self::new();
        for b in bodies {
            registry.set(b.id(), b.position());
        }
        registry
    }

    pub fn get(&self, id: BodyId) -> NPoint3 {
        match id.slot() {
            Some(i) => self.positions[i],
            None => NPoint3::origin(),
        }
    }

    /// Writes are ignored for the Star, whose position is immutable
    pub fn set(&mut self, id: BodyId, position: NPoint3) {
        if let Some(i) = id.slot() {
            self.positions[i] = position;
        }
    }
}
