//! lambda-layer-maker CLI
//!
//! Usage: lambda-layer-maker <COMMAND>
//!
//! Commands:
//!   build         Build a layer archive from a requirements file
//!   publish       Publish a new layer version (interactive)
//!   upload-to-s3  Upload a layer archive to S3 (interactive)

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lambda_layer_maker::presentation::{Cli, Commands};

mod commands;
mod ui;

use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color);
    match run(cli.command, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, &ui);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, ui: &UiContext) -> Result<()> {
    match command {
        Commands::Build {
            runtime,
            requirements,
            output_dir,
            content_suffix,
        } => commands::build::cmd_build(
            &runtime,
            requirements.as_deref(),
            &output_dir,
            content_suffix,
            ui,
        ),
        Commands::Publish { output_dir } => commands::publish::cmd_publish(&output_dir, ui),
        Commands::UploadToS3 { output_dir } => commands::upload::cmd_upload(&output_dir, ui),
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
