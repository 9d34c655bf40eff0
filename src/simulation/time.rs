//! Simulated time: the compression coefficient and the two tick cadences.
//!
//! `TimeScale` turns real elapsed milliseconds into simulated seconds.
//! `FrameClock` decides, from a monotonic clock reading, whether a physics
//! tick and/or a render tick is due. Both cadences run on the caller's
//! thread and are gated independently.

use std::time::Duration;

use tracing::info;

use crate::error::{SimError, SimResult};

/// Coefficient applied at launch and on reset
pub const DEFAULT_TIME_COMPRESSION: f64 = 1.0e6;

/// Factor applied by one speed-up / slow-down step
pub const TIME_COMPRESSION_STEP: f64 = 10.0;

fn check_coefficient(coefficient: f64) -> SimResult<f64> {
    if coefficient > 0.0 && coefficient.is_finite() {
        Ok(coefficient)
    } else {
        Err(SimError::InvalidTimeCompression(coefficient))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    coefficient: f64,
    default: f64,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            coefficient: DEFAULT_TIME_COMPRESSION,
            default: DEFAULT_TIME_COMPRESSION,
        }
    }
}

impl TimeScale {
    /// Start at `default`, which is also what [`TimeScale::reset`] restores
    pub fn new(default: f64) -> SimResult<Self> {
        let default = check_coefficient(default)?;
        Ok(Self { coefficient: default, default })
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// seconds = real_elapsed_ms * coefficient * 1e-3
    pub fn simulated_delta(&self, real_elapsed_ms: f64) -> f64 {
        real_elapsed_ms * self.coefficient * 1e-3
    }

    pub fn set(&mut self, coefficient: f64) -> SimResult<()> {
        self.coefficient = check_coefficient(coefficient)?;
        info!(coefficient, "time compression set");
        Ok(())
    }

    pub fn speed_up(&mut self) {
        self.step(self.coefficient * TIME_COMPRESSION_STEP);
    }

    pub fn slow_down(&mut self) {
        self.step(self.coefficient / TIME_COMPRESSION_STEP);
    }

    // keeps the previous value if the step would overflow or underflow
    fn step(&mut self, next: f64) {
        if self.set(next).is_err() {
            info!(coefficient = self.coefficient, "time compression at its limit");
        }
    }

    pub fn reset(&mut self) {
        self.coefficient = self.default;
    }
}

/// What is due at one poll of the [`FrameClock`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tick {
    /// Simulated seconds to advance, if a physics tick is due
    pub physics_dt: Option<f64>,
    /// Whether a render tick (and its absorption check) is due
    pub render: bool,
}

/// Two independent polling cadences over one monotonic clock.
///
/// Clock readings are offsets from an arbitrary fixed start, e.g.
/// `Instant::elapsed()` or a synthetic counter in tests.
#[derive(Debug, Clone)]
pub struct FrameClock {
    physics_delay: Duration,
    frame_delay: Duration,
    last_physics: Duration,
    last_render: Duration,
}

impl FrameClock {
    pub fn new(physics_delay: Duration, frame_delay: Duration, start: Duration) -> Self {
        Self {
            physics_delay,
            frame_delay,
            last_physics: start,
            last_render: start,
        }
    }

    /// A cadence fires once at least its delay of real time has passed since
    /// it last fired. A physics tick covers the whole real interval since the
    /// previous one, scaled by `scale`.
    pub fn poll(&mut self, now: Duration, scale: &TimeScale) -> Tick {
        let mut tick = Tick::default();

        let since_physics = now.saturating_sub(self.last_physics);
        if since_physics >= self.physics_delay && !since_physics.is_zero() {
            self.last_physics = now;
            let elapsed_ms = since_physics.as_secs_f64() * 1e3;
            tick.physics_dt = Some(scale.simulated_delta(elapsed_ms));
        }

        let since_render = now.saturating_sub(self.last_render);
        if since_render >= self.frame_delay && !since_render.is_zero() {
            self.last_render = now;
            tick.render = true;
        }

        tick
    }
}
