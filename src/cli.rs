use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ecotrend: before/after analysis for land and water interventions.
#[derive(Parser)]
#[command(
    name = "ecotrend",
    version,
    about = "Rainfall-matched impact years and smoothed NDVI curves"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Select rainfall-matched pre/post intervention years per feature.
    Impact(ImpactArgs),
    /// Merge, gap-fill and smooth yearly NDVI payloads.
    Smooth(SmoothArgs),
}

/// Arguments for the `impact` subcommand.
#[derive(clap::Args)]
pub struct ImpactArgs {
    /// JSON array of features: `[{ "id", "attributes", "intervention_year"? }]`.
    #[arg(short, long)]
    pub features: PathBuf,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output JSON path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `smooth` subcommand.
#[derive(clap::Args)]
pub struct SmoothArgs {
    /// JSON object mapping a year label to its serialized payload (or null).
    #[arg(short, long)]
    pub payloads: PathBuf,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Smoothing weight; overrides the config file (default 10).
    #[arg(long)]
    pub lambda: Option<f64>,

    /// Difference order of the penalty; overrides the config file (default 2).
    #[arg(long)]
    pub order: Option<usize>,

    /// Output JSON path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
