//! Shoreline CLI - coastline proximity queries
//!
//! This binary loads a coastline dataset (bundled or user-supplied), runs a
//! single proximity query, and prints the result to stdout.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use shoreline::config::{DistanceMode, ProximityConfig, DEFAULT_THRESHOLD_METERS};
use shoreline::dataset::{CoastlineDataset, DatasetError};
use shoreline::proximity::{CoastProximityEngine, ProximityError, ProximityResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Distance to the nearest boundary vertex
    Vertex,
    /// Distance to the nearest point on a boundary segment
    Segment,
}

impl From<ModeArg> for DistanceMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Vertex => DistanceMode::Vertex,
            ModeArg::Segment => DistanceMode::Segment,
        }
    }
}

#[derive(Parser)]
#[command(name = "shoreline")]
#[command(version = shoreline::VERSION)]
#[command(about = "Check how close a point is to the coastline", long_about = None)]
struct Args {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Proximity threshold in meters
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_METERS)]
    threshold_meters: f64,

    /// Path to a coastline GeoJSON file (defaults to the bundled dataset)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Distance measurement mode
    #[arg(long, value_enum, default_value = "vertex")]
    mode: ModeArg,

    /// Scan boundary rings in parallel
    #[arg(long)]
    parallel: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Query(#[from] ProximityError),
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let args = Args::parse();
    shoreline::logging::init_console_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let dataset = match &args.dataset {
        Some(path) => CoastlineDataset::from_path(path)?,
        None => CoastlineDataset::bundled()?,
    };
    let engine = CoastProximityEngine::new(dataset);

    tracing::debug!(
        rings = engine.ring_count(),
        vertices = engine.vertex_count(),
        "Engine ready"
    );

    let config = ProximityConfig::new(args.threshold_meters)
        .with_mode(args.mode.into())
        .with_parallel_scan(args.parallel);

    let result = engine.find_closest_coast_point_with(args.lat, args.lon, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, config.threshold_meters());
    }

    Ok(())
}

fn print_result(result: &ProximityResult, threshold_meters: f64) {
    println!("Closest coastline point: {}", result.closest_point);
    println!("Distance: {:.1} m", result.min_distance_meters);
    println!(
        "Near coast (within {} m): {}",
        threshold_meters,
        if result.is_near { "yes" } else { "no" }
    );
}
