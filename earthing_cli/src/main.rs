//! # earthing - IS 3043 earthing evaluator CLI
//!
//! Reads an earthing request as JSON, evaluates it and prints the summary.
//!
//! ```bash
//! earthing calculate design.json --format json --pretty
//! cat design.json | earthing calculate --fail-on-fail
//! earthing materials
//! earthing equations > EQUATIONS.md
//! ```
//!
//! Exit codes: 0 evaluated, 1 overall FAIL with `--fail-on-fail`,
//! 2 request rejected or unreadable.

mod config;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use earthing_core::calculations::earthing::{
    aggregate, analyze_request, EarthingBreakdown, EarthingEvaluationResult, EarthingRequest,
};
use earthing_core::equations::generate_equations_markdown;
use earthing_core::errors::CalcError;
use earthing_core::StripMaterial;

use config::{CliConfig, OutputFormat};

const EXIT_OK: i32 = 0;
const EXIT_FAIL: i32 = 1;
const EXIT_REJECTED: i32 = 2;

#[derive(Parser)]
#[command(name = "earthing")]
#[command(about = "IS 3043 earthing design evaluator", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "earthing_core=debug")
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an earthing request
    Calculate {
        /// JSON request file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Exit with code 1 when the overall status is FAIL
        #[arg(long)]
        fail_on_fail: bool,

        /// Also print intermediate quantities and the equations applied
        #[arg(long)]
        breakdown: bool,
    },

    /// List strip materials and their K constants
    Materials {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the equation reference as markdown
    Equations,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_REJECTED
        }
    };

    process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = CliConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    init_tracing(&config.log_level);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Calculate {
            file,
            format,
            pretty,
            fail_on_fail,
            breakdown,
        } => {
            if let Some(format) = format {
                config.output = format;
            }
            config.pretty |= pretty;
            handle_calculate(file.as_deref(), &config, fail_on_fail, breakdown)
        }
        Commands::Materials { format } => {
            if let Some(format) = format {
                config.output = format;
            }
            handle_materials(&config)?;
            Ok(EXIT_OK)
        }
        Commands::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(EXIT_OK)
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_request_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read request from stdin")?;
            Ok(text)
        }
    }
}

fn handle_calculate(
    file: Option<&Path>,
    config: &CliConfig,
    fail_on_fail: bool,
    show_breakdown: bool,
) -> Result<i32> {
    let text = read_request_text(file)?;

    let outcome = EarthingRequest::from_json(&text).and_then(|request| {
        request.validate()?;
        analyze_request(&request)
    });

    match outcome {
        Ok(breakdown) => {
            let result = aggregate(&breakdown);
            output_result(&result, show_breakdown.then_some(&breakdown), config)?;
            if fail_on_fail && !result.passes() {
                return Ok(EXIT_FAIL);
            }
            Ok(EXIT_OK)
        }
        Err(e) => {
            output_rejection(&e, config)?;
            Ok(EXIT_REJECTED)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

fn output_result(
    result: &EarthingEvaluationResult,
    breakdown: Option<&EarthingBreakdown>,
    config: &CliConfig,
) -> Result<()> {
    match config.output {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(result)?;
            if let (Some(b), Some(obj)) = (breakdown, value.as_object_mut()) {
                obj.insert("breakdown".to_string(), serde_json::to_value(b)?);
                obj.insert("equations_by_category".to_string(), equations_by_category(b));
            }
            println!("{}", to_json(&value, config.pretty)?);
        }
        OutputFormat::Human => {
            print_human(result);
            if let Some(b) = breakdown {
                print_breakdown(b);
            }
        }
    }
    Ok(())
}

fn equations_by_category(breakdown: &EarthingBreakdown) -> serde_json::Value {
    let groups: Vec<_> = breakdown
        .equations
        .by_category()
        .into_iter()
        .map(|(category, equations)| {
            let names: Vec<_> = equations.iter().map(|eq| eq.metadata().name).collect();
            json!({ "category": category.display_name(), "equations": names })
        })
        .collect();
    serde_json::Value::Array(groups)
}

/// Rejections are always JSON on stdout: `{"detail": ..., "error": ...}`
fn output_rejection(error: &CalcError, config: &CliConfig) -> Result<()> {
    let body = json!({
        "detail": error.to_string(),
        "error": error,
    });
    println!("{}", to_json(&body, config.pretty)?);
    Ok(())
}

fn print_human(result: &EarthingEvaluationResult) {
    println!("{} - {}", result.standard, result.earthing_type.display_name());
    println!();
    println!(
        "  {:<48} {:>10} {:<5} {:<52} {}",
        "Description", "Result", "Unit", "Condition", "Remarks"
    );
    println!("  {}", "-".repeat(132));
    for row in &result.summary {
        println!(
            "  {:<48} {:>10.2} {:<5} {:<52} {}",
            row.description, row.result, row.unit, row.condition, row.remarks
        );
    }
    println!();
    println!("Overall status: {}", result.overall_status);
}

fn print_breakdown(b: &EarthingBreakdown) {
    println!();
    println!("Breakdown ({}, K = {}):", b.strip_material.display_name(), b.k_constant);
    println!("  Permissible current density   {:>12.4} A/m²", b.permissible_current_density);
    println!("  Required dissipation area     {:>12.4} m²", b.required_area_m2);
    println!("  Electrode surface area        {:>12.4} m²", b.electrode_area_m2);
    println!("  Strip surface area            {:>12.4} m²", b.strip_area_m2);
    println!("  Selected strip cross-section  {:>12.4} mm²", b.selected_strip_area_mm2);
    println!("  Electrode resistance (each)   {:>12.4} Ω", b.electrode_resistance_each_ohm);
    println!("  Strip resistance (each)       {:>12.4} Ω", b.strip_resistance_each_ohm);
    println!();
    println!("Equations applied:");
    for (category, equations) in b.equations.by_category() {
        println!("  {}", category.display_name());
        for eq in equations {
            println!("    - {}", eq.metadata().name);
        }
    }
}

fn handle_materials(config: &CliConfig) -> Result<()> {
    match config.output {
        OutputFormat::Json => {
            let rows: Vec<_> = StripMaterial::ALL
                .iter()
                .map(|m| {
                    json!({
                        "code": m.code(),
                        "name": m.display_name(),
                        "k_constant": m.k_constant(),
                    })
                })
                .collect();
            println!("{}", to_json(&rows, config.pretty)?);
        }
        OutputFormat::Human => {
            println!("  {:<5} {:<20} {:>6}", "Code", "Material", "K");
            for m in StripMaterial::ALL {
                println!("  {:<5} {:<20} {:>6}", m.code(), m.display_name(), m.k_constant());
            }
        }
    }
    Ok(())
}
