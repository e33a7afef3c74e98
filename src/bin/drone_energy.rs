use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use drone_energy_calculator::export::{json, text, writer_for_path};
use drone_energy_calculator::mission::plan_mission;
use drone_energy_calculator::scenario::{self, Overrides};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    author,
    version,
    allow_negative_numbers = true,
    about = "Route distance and energy estimate at the model's optimal velocity"
)]
struct Cli {
    /// Scenario manifest (YAML, or TOML by extension); defaults to the built-in reference route
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// CSV waypoint table with an `x,y,z` header, replacing the scenario route
    #[arg(long)]
    waypoints: Option<PathBuf>,

    /// Velocity coefficient `a` (scales v²)
    #[arg(long)]
    velocity_coeff: Option<f64>,

    /// Altitude coefficient `b` (scales h)
    #[arg(long)]
    altitude_coeff: Option<f64>,

    /// Baseline energy coefficient `c`
    #[arg(long)]
    baseline: Option<f64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Destination for the report (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let overrides = Overrides {
        scenario: cli.scenario,
        waypoints: cli.waypoints,
        a: cli.velocity_coeff,
        b: cli.altitude_coeff,
        c: cli.baseline,
    };

    let mission = scenario::resolve(&overrides)?;
    tracing::debug!(
        scenario = %mission.name,
        waypoints = mission.waypoints.len(),
        "resolved mission"
    );
    let profile = plan_mission(&mission)?;
    let summary = profile.summary(&mission.name);

    let mut writer = writer_for_path(&cli.output)?;
    match cli.format {
        Format::Text => text::write_report(&mut *writer, &summary)?,
        Format::Json => json::write_report(&mut *writer, &summary)?,
    }
    writer.flush()?;

    Ok(())
}
