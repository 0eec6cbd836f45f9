//! # Hinge Boring CLI
//!
//! Terminal front end for `hinge_core`. Door values come from flags; any
//! missing thickness switches to interactive prompts. Results print as a
//! text report or, with `--format json`, as the full JSON record.

mod cli;
mod input;
mod report;

use std::process::ExitCode;

use clap::Parser;
use hinge_core::{
    calculate_with, load_settings, resolve_request, CalcSettings, HingeError, HingeSeries,
    SeriesCatalogue, SeriesRequest,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};
use crate::input::{parse_door, prompt_number, RawDoorFields};

/// Key used when neither a series, `--auto`, nor a settings default is given
const DEFAULT_SERIES_KEY: &str = "100";

/// Initialize tracing subscriber; logs go to stderr so JSON on stdout stays clean
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report_error(error: &HingeError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalogue = SeriesCatalogue::global();

    if cli.list {
        print!("{}", report::series_listing(catalogue));
        return ExitCode::SUCCESS;
    }

    let settings = match &cli.settings {
        Some(path) => match load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                report_error(&e);
                return ExitCode::FAILURE;
            }
        },
        None => CalcSettings::default(),
    };

    let request = if cli.auto {
        SeriesRequest::Automatic {
            min_opening_angle_deg: cli.min_angle.or(settings.min_opening_angle_deg),
        }
    } else {
        SeriesRequest::Key(
            cli.series
                .as_deref()
                .or(settings.default_series.as_deref())
                .unwrap_or(DEFAULT_SERIES_KEY),
        )
    };

    tracing::debug!(?request, "series request");

    // A named series is known before the door, so resolve it up front
    let keyed_series = match request {
        SeriesRequest::Key(key) => match catalogue.resolve(key) {
            Ok(series) => Some(series),
            Err(e) => {
                report_error(&e);
                return ExitCode::FAILURE;
            }
        },
        SeriesRequest::Automatic { .. } => None,
    };

    let mut fields = RawDoorFields {
        thickness: cli.thickness.clone(),
        height: cli.height.clone(),
        weight: cli.weight.clone(),
        k: cli.k.clone(),
    };
    if fields.thickness.is_none() {
        prompt_door(&mut fields, catalogue, keyed_series.as_ref());
    }

    let door = match parse_door(&fields) {
        Ok(door) => door,
        Err(errors) => {
            for message in errors {
                eprintln!("Error: {}", message);
            }
            return ExitCode::from(2);
        }
    };

    let series = match keyed_series {
        Some(series) => series,
        None => match resolve_request(catalogue, request, door.thickness_mm) {
            Ok(series) => series,
            Err(e) => {
                report_error(&e);
                return ExitCode::FAILURE;
            }
        },
    };

    let result = calculate_with(&series, &door, settings.rounding);

    match cli.format {
        OutputFormat::Text => {
            println!("{}", report::series_summary(&series));
            if let Some(note) = report::rounding_note(settings.rounding) {
                println!("{}", note);
            }
            print!("{}", report::result_report(&result));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                report_error(&HingeError::from(e));
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

/// Fill missing door fields interactively.
fn prompt_door(fields: &mut RawDoorFields, catalogue: &SeriesCatalogue, series: Option<&HingeSeries>) {
    println!("Hinge Boring Calculator");
    println!("=======================");
    println!("{}", report::available_series(catalogue));
    if let Some(series) = series {
        println!("{}", report::series_summary(series));
    }

    fields.thickness = prompt_number("Door thickness T (mm): ", false);
    if fields.height.is_none() {
        fields.height = prompt_number("Door height (mm) [optional, press Enter to skip]: ", true);
    }
    if fields.weight.is_none() {
        fields.weight = prompt_number("Door weight (kg) [optional, press Enter to skip]: ", true);
    }
    if fields.k.is_none() {
        let prompt = match series {
            Some(series) => format!(
                "Boring distance K (mm) [optional, press Enter for default ({} mm)]: ",
                series.default_k()
            ),
            None => "Boring distance K (mm) [optional, press Enter for series default]: ".to_string(),
        };
        fields.k = prompt_number(&prompt, true);
    }
    println!();
}
