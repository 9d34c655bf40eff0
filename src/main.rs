use solsim::{ScenarioConfig, Scenario};
use solsim::{run_headless, ClockSource, RunOptions};
use solsim::{bench_gravity, bench_advance};
use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Clock polls to run
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Real milliseconds per clock poll
    #[arg(long, default_value_t = 10)]
    step_ms: u64,

    /// Sleep between polls and read the wall clock instead of a synthetic one
    #[arg(long)]
    realtime: bool,

    /// Print the benchmark tables and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_advance();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let opts = RunOptions {
        iterations: args.iterations,
        step: Duration::from_millis(args.step_ms),
        clock: if args.realtime { ClockSource::WallClock } else { ClockSource::Synthetic },
    };
    let summary = run_headless(&mut scenario, &opts);

    for a in &summary.absorptions {
        info!(body = %a.body, absorbed_by = %a.absorbed_by, "absorption");
    }
    println!(
        "{} physics ticks, {} render ticks, {:.2} simulated days",
        summary.physics_ticks,
        summary.render_ticks,
        summary.simulated_seconds / 86_400.0
    );
    Ok(())
}
