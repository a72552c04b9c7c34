use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::error::Error;

use shot_tracker::constants::{DRIFT_BASE_CONSTANT, DRIFT_REFERENCE_VELOCITY_FPS, G};
use shot_tracker::{
    calculate_corrections, time_of_flight, CorrectionResult, RifleProfile, ShotScenario, WindDriftModel,
};

#[derive(Parser)]
#[command(name = "ballistics-cli")]
#[command(author = "ShotTracker Team")]
#[command(version = "0.1.0")]
#[command(about = "Bullet drop and wind drift correction calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate drop and wind corrections for one shot
    Calculate {
        /// Distance to target (yards)
        #[arg(short = 'd', long)]
        distance: f64,

        /// Muzzle velocity (fps)
        #[arg(short = 'v', long)]
        velocity: f64,

        /// Zero range (yards)
        #[arg(short = 'z', long, default_value = "100.0")]
        zero: f64,

        /// Wind speed (mph)
        #[arg(long, default_value = "0.0")]
        wind_speed: f64,

        /// Wind angle relative to the shot (degrees, 90 = full crosswind from the left)
        #[arg(long, default_value = "90.0", allow_hyphen_values = true)]
        wind_angle: f64,

        /// Wind drift model (calibrated, time_of_flight)
        #[arg(short = 'm', long, default_value = "calibrated")]
        model: String,

        /// Rifle name shown in the output
        #[arg(long, default_value = "rifle")]
        name: String,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display model information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Serialize, Deserialize)]
struct CliResult {
    rifle: String,
    wind_model: WindDriftModel,
    time_of_flight: f64,
    #[serde(flatten)]
    corrections: CorrectionResult,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            distance, velocity, zero, wind_speed, wind_angle, model, name, output
        } => {
            let wind_model: WindDriftModel = model.parse()?;

            let scenario = ShotScenario {
                distance_yards: distance,
                wind_speed_mph: wind_speed,
                wind_angle_deg: wind_angle,
                rifle: RifleProfile::new(name, zero, velocity),
            };

            let corrections = calculate_corrections(&scenario, wind_model)?;
            let result = CliResult {
                rifle: scenario.rifle.name.clone(),
                wind_model,
                time_of_flight: time_of_flight(distance, velocity)?,
                corrections,
            };

            display_cli_results(&result, output)?;
        },

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      SHOT TRACKER BALLISTICS v0.1.0    ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ No-drag, flat-gravity drop model       ║");
            println!("║ g = {:<5.2} m/s²                        ║", G);
            println!("╠════════════════════════════════════════╣");
            println!("║ Wind drift models:                     ║");
            println!("║ • calibrated (default)                 ║");
            println!("║   {:.3} in/mph/(100yd)² @ {:.0} fps   ║", DRIFT_BASE_CONSTANT, DRIFT_REFERENCE_VELOCITY_FPS);
            println!("║ • time_of_flight                       ║");
            println!("║   crosswind × flight time              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn direction(value: f64, positive: &'static str, negative: &'static str) -> &'static str {
    if value >= 0.0 { positive } else { negative }
}

fn display_cli_results(result: &CliResult, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let c = &result.corrections;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        },

        OutputFormat::Csv => {
            println!("distance_yards,wind_speed_mph,wind_angle_deg,drop_inches,drop_moa,drift_inches,drift_moa");
            println!("{:.1},{:.1},{:.1},{:.2},{:.2},{:.2},{:.2}",
                c.distance_yards, c.wind_speed_mph, c.wind_angle_deg,
                c.drop_inches, c.drop_moa, c.drift_inches, c.drift_moa);
        },

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         CORRECTION RESULTS             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Rifle:          {:<22} ║", result.rifle);
            println!("║ Distance:          {:>8.1} yd         ║", c.distance_yards);
            println!("║ Wind:              {:>8.1} mph @ {:>5.1}° ║", c.wind_speed_mph, c.wind_angle_deg);
            println!("║ Time of Flight:    {:>8.3} s          ║", result.time_of_flight);
            println!("╠════════════════════════════════════════╣");
            println!("║ Drop:              {:>8.2} in         ║", c.drop_inches);
            println!("║ Elevation:         {:>8.2} MOA {:<5}  ║", c.drop_moa.abs(), direction(c.drop_moa, "up", "down"));
            println!("║ Drift:             {:>8.2} in         ║", c.drift_inches);
            println!("║ Windage:           {:>8.2} MOA {:<5}  ║", c.drift_moa.abs(), direction(c.drift_moa, "left", "right"));
            println!("║ Wind model:        {:<19} ║", result.wind_model);
            println!("╚════════════════════════════════════════╝");
        },
    }

    Ok(())
}
