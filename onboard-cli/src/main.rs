//! `onboard`: drive a simulated vehicle from a command script and print
//! what its displays show.

mod config;
mod script;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use onboard_core::{Vehicle, VehicleConfig, display::Report};
use tracing_subscriber::EnvFilter;

use crate::script::{DEMO, Step, parse_script};

#[derive(Debug, Parser)]
#[command(name = "onboard", version, about)]
struct Args {
    /// Initial fuel in litres (default: the configured default fuel)
    #[arg(long)]
    fuel: Option<f64>,

    /// Largest speed gain per second in km/h (default: the configured default)
    #[arg(long)]
    max_acceleration: Option<u32>,

    /// TOML file overriding the vehicle constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command script to run (default: a short start/stop demo)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the report after every command instead of only at the end
    #[arg(long)]
    report_every: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load(path)?,
        None => VehicleConfig::default(),
    };
    let steps = read_steps(args.script.as_deref())?;

    let mut vehicle = Vehicle::new(
        &config,
        args.fuel.unwrap_or(config.default_fuel),
        args.max_acceleration.unwrap_or(config.default_acceleration),
    )?;

    let mut out = io::stdout().lock();
    for step in &steps {
        step.run(&mut vehicle);
        if args.report_every {
            writeln!(out, "> {step}")?;
            writeln!(out, "{}\n", Report::new(&vehicle))?;
        }
    }
    if !args.report_every {
        writeln!(out, "{}", Report::new(&vehicle))?;
    }

    Ok(())
}

fn read_steps(path: Option<&Path>) -> Result<Vec<Step>> {
    let Some(path) = path else {
        return Ok(parse_script(DEMO)?);
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("invalid script {}", path.display()))
}
