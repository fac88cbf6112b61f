use std::{io::ErrorKind, path::PathBuf, process::exit};

use anyhow::Context;
use clap::Parser;
use gcode_analyzer::{
    config::AnalyzerConfiguration,
    display::{FilamentLength, FormattedDuration},
    measure::measure_program,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The G-code file to analyze.
    #[arg()]
    path: PathBuf,

    /// Acceleration for Z-only motion, in units per second squared.
    #[arg(long)]
    z_acceleration: Option<f64>,

    /// Acceleration for extrusion-only moves, in units per second squared.
    #[arg(long)]
    extruder_acceleration: Option<f64>,

    /// Print the estimate as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let input = match std::fs::read_to_string(&args.path) {
        Ok(input) => input,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            eprintln!("Error: {} does not exist", args.path.display());
            exit(1);
        }
        Err(error) => {
            return Err(error).context(format!("Failed to read {}", args.path.display()));
        }
    };

    let standard = AnalyzerConfiguration::standard();
    let config = AnalyzerConfiguration {
        feed_acceleration: args
            .extruder_acceleration
            .unwrap_or(standard.feed_acceleration),
        vertical_acceleration: args.z_acceleration.unwrap_or(standard.vertical_acceleration),
    };

    let estimate = measure_program(&config, &input)
        .with_context(|| format!("Failed to analyze {}", args.path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!(
            "Estimated Print Time: {}",
            FormattedDuration(estimate.duration_seconds)
        );
        println!("Filament Usage: {}", FilamentLength(estimate.filament_used));
    }
    Ok(())
}
