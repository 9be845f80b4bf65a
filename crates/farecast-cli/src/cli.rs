//! CLI argument definitions for the fare estimator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "farecast",
    version,
    about = "Farecast - ride fare estimation from minimal inputs",
    long_about = "Estimate a ride fare from distance, cab type, product tier and a surge flag.\n\n\
                  The estimator synthesizes the full feature row the trained model expects\n\
                  and also runs the batch feature engineering that produced its training data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate a fare for a single trip.
    Estimate(EstimateArgs),

    /// Run batch feature engineering over a raw trip CSV.
    Engineer(EngineerArgs),

    /// Print the feature schema the model consumes.
    Schema,
}

#[derive(Parser)]
pub struct EstimateArgs {
    /// Trip distance in kilometers (must be positive).
    #[arg(value_name = "DISTANCE_KM")]
    pub distance: f64,

    /// Cab vendor label; unknown labels fall back to the baseline encoding.
    #[arg(long = "cab-type", default_value = "Uber")]
    pub cab_type: String,

    /// Product tier label (Shared, Standard, Premium).
    #[arg(long = "product-group", default_value = "Standard")]
    pub product_group: String,

    /// Apply the surge pricing policy.
    #[arg(long = "surge")]
    pub surge: bool,

    /// How to fill fields with no live data source.
    #[arg(long = "mode", value_enum, default_value = "dynamic")]
    pub mode: ModeArg,

    /// Path to the trained model artifact.
    #[arg(long = "model", value_name = "PATH")]
    pub model: PathBuf,

    /// RNG seed for reproducible dynamic draws.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Emit the estimate and feature row as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct EngineerArgs {
    /// Path to the raw trip CSV.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT_DIR>/features.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the full engineered frame instead of the schema-aligned
    /// training matrix.
    #[arg(long = "full")]
    pub full: bool,

    /// RNG seed for reproducible placeholder draws.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,
}

/// CLI generation mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Randomized environment proxies.
    Dynamic,
    /// Fixed representative constants.
    Static,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
