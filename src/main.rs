use slingshot::{bench_step, bench_substeps, ScenarioConfig, Scenario};
use slingshot::visualization::headless::{run_headless, ReportConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Override the scenario's frame rate
    #[arg(long)]
    fps: Option<f64>,

    /// Frames between reports, 0 to stay quiet
    #[arg(long, default_value_t = 60)]
    report_every: u32,

    /// Run the benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig =
        serde_yaml::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        bench_substeps()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let fps = args.fps.unwrap_or(scenario_cfg.engine.fps);
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("building scenario")?;

    let report = ReportConfig {
        every: args.report_every,
        distance: Some(("Earth".to_owned(), "Sun".to_owned())),
    };
    run_headless(&mut scenario, args.frames, fps, &report).context("simulation aborted")?;

    Ok(())
}
