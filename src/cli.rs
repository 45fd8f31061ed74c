use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};

use mmsi_lib::mmsi::{get_country_from_mmsi, get_mid_from_mmsi, ClassificationResult};
use mmsi_lib::reference::{self, mids::MidEntry};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify MMSIs and resolve their country of registration
    Check {
        /// MMSIs to check (read one per line from stdin when omitted)
        mmsi: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Exit with status 1 if any MMSI is not valid
        #[arg(long)]
        strict: bool,
    },
    /// Print the MID embedded in an MMSI
    Mid {
        mmsi: String,
    },
    /// Dump the MID table as `{ "<mid>": [alpha2, alpha3, reserved, country] }`
    Table {
        /// Only MIDs allocated to this ISO alpha-2 country code
        #[arg(long)]
        country: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per MMSI
    Text,
    /// One JSON object per line
    Json,
    /// Indented JSON
    Pretty,
}

/// Parse arguments and run; returns the process exit code
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let stdin = io::stdin();
    execute(cli, &mut stdout.lock(), stdin.lock())
}

fn execute(cli: Cli, out: &mut impl Write, input: impl BufRead) -> Result<i32> {
    match cli.command {
        Commands::Check { mmsi, format, strict } => {
            let inputs = if mmsi.is_empty() {
                read_lines(input)?
            } else {
                mmsi
            };
            log::info!("Checking {} MMSI(s)", inputs.len());

            let mut all_valid = true;
            for raw in &inputs {
                let result = get_country_from_mmsi(raw);
                all_valid &= result.valid;
                writeln!(out, "{}", render(&result, format)?)?;
            }

            if strict && !all_valid {
                return Ok(1);
            }
            Ok(0)
        }
        Commands::Mid { mmsi } => match get_mid_from_mmsi(&mmsi) {
            Some(mid) => {
                writeln!(out, "{}", mid)?;
                Ok(0)
            }
            None => {
                log::warn!("No MID in {:?}", mmsi);
                Ok(1)
            }
        },
        Commands::Table { country } => {
            let entries: Vec<&MidEntry> = match country.as_deref() {
                Some(alpha2) => reference::get_mids_for_country(alpha2)
                    .into_iter()
                    .filter_map(reference::lookup_mid)
                    .collect(),
                None => reference::get_all_mids().iter().collect(),
            };
            let table = reference::mid_table_json(entries);
            writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
            Ok(0)
        }
    }
}

/// Non-blank lines, one MMSI each
fn read_lines(input: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read MMSI from stdin")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

fn render(result: &ClassificationResult, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(result)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Text => {
            let dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                result.mmsi,
                if result.valid { "valid" } else { "invalid" },
                result.category.map_or("-", |c| c.as_str()),
                dash(&result.mid),
                dash(&result.alpha2),
                dash(&result.alpha3),
                dash(&result.country),
            )
        }
    };
    Ok(rendered)
}
