//! hashnamer - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hashnamer::{
    cli::{prompt_for_folder, Args},
    config::{collect_folders, validate_config, validate_quarantine_dir, Config},
    error::{exit_codes, Error, Result},
    fs::deleter_for,
    output::{
        print_banner, print_config_summary, print_error, print_folder_stats, print_run_stats,
        print_summary, print_warning, ConsoleSink,
    },
    process::process_folders,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::NoFolder | Error::Prompt(_) => ExitCode::from(exit_codes::ABORT as u8),
                Error::Config(_) | Error::InvalidPath { .. } => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Read { .. } | Error::Delete { .. } | Error::FingerprintCollision { .. } => {
                    ExitCode::from(exit_codes::PROCESSING_ERROR as u8)
                }
                Error::Rename { .. } | Error::TargetOccupied { .. } | Error::RenameFailures(_) => {
                    ExitCode::from(exit_codes::RENAME_ERROR as u8)
                }
                Error::Io(_) => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Build and validate configuration
    let mut config = Config::default();
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    if !config.quiet {
        print_banner();
    }

    // Drop invalid folders, fall back to asking for one
    let (mut folders, rejected) = collect_folders(&config.folders);
    for e in &rejected {
        print_warning(&e.to_string());
    }
    if folders.is_empty() {
        folders.push(prompt_for_folder()?);
    }
    validate_quarantine_dir(&config, &folders)?;

    if !config.quiet {
        let names: Vec<String> = folders.iter().map(|f| f.display().to_string()).collect();
        print_config_summary(
            &names,
            &config.delete_mode.to_string(),
            config.verify_duplicates,
        );
    }

    let deleter = deleter_for(&config)?;
    tracing::debug!("Using {:?} for duplicates", deleter);

    let sink = ConsoleSink::spawn(config.quiet);
    let result = process_folders(&folders, deleter.as_ref(), config.verify_duplicates, &sink);
    sink.finish();
    let run = result?;

    if config.quiet {
        print_summary(&run);
    } else {
        for folder in &run.folders {
            print_folder_stats(folder);
        }
        print_run_stats(&run);
    }

    if run.failed() > 0 {
        return Err(Error::RenameFailures(run.failed()));
    }

    Ok(())
}
