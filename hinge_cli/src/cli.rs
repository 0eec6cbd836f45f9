//! CLI argument parsing for hinge-boring

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for calculation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report (default)
    Text,
    /// JSON for machine consumption
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hinge-boring")]
#[command(version)]
#[command(about = "Cabinet hinge boring calculator (T, K -> A, L, C and hinge count)", long_about = None)]
pub struct Cli {
    /// Hinge series key or alias (e.g. 100, 200-94)
    #[arg(short, long, value_name = "KEY", conflicts_with = "auto")]
    pub series: Option<String>,

    /// Pick the series automatically from the door thickness
    #[arg(short, long)]
    pub auto: bool,

    /// Minimum opening angle for automatic selection (degrees)
    #[arg(long = "min-angle", value_name = "DEG", requires = "auto")]
    pub min_angle: Option<f64>,

    /// Door thickness T in mm; prompts interactively when omitted
    #[arg(short, long, value_name = "MM")]
    pub thickness: Option<String>,

    /// Door height in mm
    #[arg(long, value_name = "MM")]
    pub height: Option<String>,

    /// Door weight in kg
    #[arg(short, long, value_name = "KG")]
    pub weight: Option<String>,

    /// Boring distance K in mm
    #[arg(short, long, value_name = "MM")]
    pub k: Option<String>,

    /// Calculator settings file (JSON)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// List registered series and exit
    #[arg(short, long)]
    pub list: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging to stderr (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
