//! Fixed-step time integration for the solar system
//!
//! One semi-implicit (symplectic) Euler step per physics tick, bodies taken
//! one at a time in `BodyId::UPDATE_ORDER`. Each body gathers its sources
//! from the registry, steps, then publishes its new position, so later bodies
//! see it already moved. Spin angles advance independently of translation.

use tracing::{debug, trace};

use super::forces::{gravity_sources, AccelSet, GravityMode};
use super::states::{Body, BodyId, NVec3, System};

/// Bodies heavier than this spin at the slow rate
pub const HEAVY_SPIN_MASS: f64 = 1e25;
const HEAVY_SPIN_DIVISOR: f64 = 100_000.0;
const LIGHT_SPIN_DIVISOR: f64 = 5_000.0;

/// `true` for steps the integrator accepts: strictly positive and finite
pub fn is_valid_step(dt: f64) -> bool {
    dt > 0.0 && dt.is_finite()
}

/// Kick then drift:
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
pub fn euler_step(body: &mut Body, a: NVec3, dt: f64) {
    if !is_valid_step(dt) {
        return;
    }
    body.v += dt * a;
    body.x += dt * body.v;
}

fn spin_angle(angle: f64, mass: f64, dt: f64) -> f64 {
    // an axis sitting at exactly 0 stays disabled
    if angle == 0.0 {
        return angle;
    }
    let divisor = if mass > HEAVY_SPIN_MASS { HEAVY_SPIN_DIVISOR } else { LIGHT_SPIN_DIVISOR };
    // a live axis lands on 360, never on the 0 sentinel
    match (angle + dt / divisor).rem_euclid(360.0) {
        w if w == 0.0 => 360.0,
        w => w,
    }
}

/// Advance both spin angles. Live axes stay in (0, 360]
pub fn advance_spin(body: &mut Body, dt: f64) {
    if !is_valid_step(dt) {
        return;
    }
    body.phi = spin_angle(body.phi, body.m, dt);
    body.theta = spin_angle(body.theta, body.m, dt);
}

/// Advance the whole system by one step of `dt` seconds.
///
/// Destroyed bodies are frozen: skipped here, but their last registry entry
/// still acts as a gravity source. The Star only spins.
/// Returns `false` (and leaves `sys` untouched) for an invalid `dt`.
pub fn symplectic_euler(sys: &mut System, forces: &AccelSet, mode: GravityMode, dt: f64) -> bool {
    if !is_valid_step(dt) {
        debug!(dt, "ignoring non-positive time step");
        return false;
    }

    for id in BodyId::UPDATE_ORDER {
        if !sys.body(id).is_active() {
            continue;
        }

        // sources read before this body writes its own entry
        let sources = gravity_sources(sys, id, mode);
        let at = sys.body(id).position();
        let a = forces.accumulate(&at, &sources);

        let body = sys.body_mut(id);
        euler_step(body, a, dt);
        advance_spin(body, dt);
        let x = body.position();
        trace!(body = %id, x = ?x, a = ?a, "stepped");

        sys.registry.set(id, x);
    }

    advance_spin(&mut sys.star, dt);
    sys.t += dt;
    true
}
