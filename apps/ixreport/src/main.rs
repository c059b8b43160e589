//! ixreport CLI binary entry point.
//! Resolves configuration, runs the pipeline, and prints results.

use clap::Parser;
use ixreport::cli::Cli;
use ixreport::validator::{ReplayValidator, Validator};
use ixreport::{config, output, pipeline, utils};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let (eff, skipped) = match config::resolve_effective(
        &cwd,
        cli.config.as_deref(),
        cli.validator.as_deref(),
        cli.output.as_deref(),
        cli.log_file.as_deref(),
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    if let Some(e) = skipped {
        eprintln!("{} {}; using defaults.", utils::note_prefix(), e);
    }
    if let Some(p) = eff.config_path.as_ref() {
        if eff.output != "json" {
            eprintln!("{} using config {}", utils::info_prefix(), p.display());
        }
    }

    let replay;
    let validator: &dyn Validator = match eff.log_file.as_ref() {
        Some(log) => {
            replay = ReplayValidator { log: log.clone() };
            &replay
        }
        None => &eff.validator,
    };
    if eff.output != "json" {
        eprintln!("{} validating with {}", utils::info_prefix(), validator.program());
    }

    match pipeline::run(
        Path::new(&cli.input),
        Path::new(&cli.report),
        validator,
        &eff.catalog,
    ) {
        Ok(outcome) => {
            output::print_warnings(&outcome);
            output::print_outcome(&outcome, &eff.output);
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
