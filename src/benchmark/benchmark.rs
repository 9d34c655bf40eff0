use std::time::Instant;

use crate::simulation::forces::{gravity_sources, Acceleration, GravityMode, NewtonianGravity};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::BodyId;

/// Time the force evaluation of the free object (its source set is the
/// largest: star + eight planets)
pub fn bench_gravity() {
    let scenario = Scenario::default();
    let sys = scenario.system();
    let gravity = NewtonianGravity { G: scenario.parameters.G };
    let sources = gravity_sources(sys, BodyId::FreeObject, GravityMode::StarOnly);
    let at = sys.body(BodyId::FreeObject).position();

    let reps = [10_000usize, 100_000, 1_000_000];

    for n in reps {
        // Warm up
        let _ = gravity.acceleration(&at, &sources);

        let t0 = Instant::now();
        let mut sink = 0.0;
        for _ in 0..n {
            sink += gravity.acceleration(&at, &sources).x;
        }
        let per_eval = t0.elapsed().as_secs_f64() / n as f64;

        println!("evals = {n:8}, per eval = {:10.3} ns (sink {sink:e})", per_eval * 1e9);
    }
}

/// Time `Scenario::advance` under both gravity modes.
/// Paste output directly into a spreadsheet to graph
pub fn bench_advance() {
    println!("steps,star_only_us,mutual_us");

    for steps in [1_000usize, 10_000, 100_000] {
        let star_only = time_advance(GravityMode::StarOnly, steps);
        let mutual = time_advance(GravityMode::Mutual, steps);
        println!("{},{:.4},{:.4}", steps, star_only, mutual);
    }
}

/// Mean microseconds per `advance` over `steps` one-hour steps
fn time_advance(mode: GravityMode, steps: usize) -> f64 {
    let mut scenario = Scenario::default();
    scenario.engine.gravity = mode;

    // Warm-up
    scenario.advance(3_600.0);

    let t0 = Instant::now();
    for _ in 0..steps {
        scenario.advance(3_600.0);
    }
    t0.elapsed().as_secs_f64() * 1e6 / steps as f64
}
