pub mod states;
pub mod registry;
pub mod catalog;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod absorption;
pub mod time;
pub mod scenario;
