use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::simulation::absorption::Absorption;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::BodyId;
use crate::simulation::time::FrameClock;

/// Where clock readings come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource {
    /// Deterministic: every loop iteration is exactly `step` later
    Synthetic,
    /// Sleep `step`, then read the monotonic wall clock
    WallClock,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub iterations: usize, // loop iterations (clock polls)
    pub step: Duration, // real time per iteration
    pub clock: ClockSource,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            iterations: 1000,
            step: Duration::from_millis(10),
            clock: ClockSource::Synthetic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub physics_ticks: usize,
    pub render_ticks: usize,
    pub simulated_seconds: f64,
    pub absorptions: Vec<Absorption>,
}

/// Stand-in for the windowed event loop: polls the frame clock, advances the
/// physics on physics ticks and applies the absorption policy on render ticks.
pub fn run_headless(scenario: &mut Scenario, opts: &RunOptions) -> RunSummary {
    info!(iterations = opts.iterations, step = ?opts.step, "run_headless: starting");

    let mut clock = FrameClock::new(scenario.engine.physics_delay, scenario.engine.frame_delay, Duration::ZERO);
    let mut summary = RunSummary::default();
    let t0 = scenario.elapsed();
    let start = Instant::now();
    let mut now = Duration::ZERO;

    for _ in 0..opts.iterations {
        now = match opts.clock {
            ClockSource::Synthetic => now + opts.step,
            ClockSource::WallClock => {
                thread::sleep(opts.step);
                start.elapsed()
            }
        };

        let tick = clock.poll(now, scenario.time_scale());

        if let Some(dt) = tick.physics_dt {
            if scenario.advance(dt) {
                summary.physics_ticks += 1;
            }
        }

        if tick.render {
            summary.render_ticks += 1;
            summary.absorptions.extend(scenario.evaluate_absorption());
            log_snapshot(scenario);
        }
    }

    summary.simulated_seconds = scenario.elapsed() - t0;
    info!(
        physics_ticks = summary.physics_ticks,
        render_ticks = summary.render_ticks,
        simulated_days = summary.simulated_seconds / 86_400.0,
        "run_headless: done"
    );
    summary
}

fn log_snapshot(scenario: &Scenario) {
    for id in BodyId::UPDATE_ORDER {
        let b = scenario.body(id);
        debug!(
            body = %id,
            active = b.is_active(),
            x = b.position().x,
            y = b.position().y,
            z = b.position().z,
            "snapshot"
        );
    }
}
