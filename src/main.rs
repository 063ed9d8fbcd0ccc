use lfsim::{run, CsvSink, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Leapfrog orbit integrator writing sampled positions to CSV")]
struct Args {
    /// Scenario file (YAML)
    #[arg(short, long, default_value = "scenarios/earth_l4.yaml")]
    file: PathBuf,

    /// Override the output path from the scenario
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter, used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut cfg = ScenarioConfig::from_yaml_file(&args.file)
        .with_context(|| format!("failed to load scenario {}", args.file.display()))?;
    if let Some(output) = &args.output {
        cfg.output.path = output.clone();
    }
    Scenario::build(cfg).context("invalid scenario")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut scenario = load_scenario(&args)?;

    let out_path = scenario.output_path.clone();
    let mut sink = CsvSink::create(&out_path)
        .with_context(|| format!("cannot open output {}", out_path.display()))?;

    let summary = run(&mut scenario, &mut sink).context("simulation aborted")?;

    tracing::info!(
        rows = sink.rows(),
        output = %out_path.display(),
        final_radius = ?summary.final_radius,
        "samples written"
    );

    Ok(())
}
