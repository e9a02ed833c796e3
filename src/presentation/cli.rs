//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - `publish` and `upload-to-s3` prompt for everything except the output
//!   directory, which must match the one `build` wrote to

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::build::DEFAULT_OUTPUT_DIR;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Build and publish AWS Lambda layers
#[derive(Parser, Debug)]
#[command(name = "lambda-layer-maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a layer archive from a requirements file
    Build {
        /// Runtime to build for
        #[arg(short, long, default_value = "python3.12amd64")]
        runtime: String,

        /// Path to the requirements file
        #[arg(short = 'f', long)]
        requirements: Option<PathBuf>,

        /// Directory for the staging tree and archives
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Append a hash of the requirements file to the archive name
        #[arg(long)]
        content_suffix: bool,
    },

    /// Publish a new layer version (interactive)
    Publish {
        /// Directory holding built archives
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// Upload a layer archive to S3 (interactive)
    #[command(name = "upload-to-s3")]
    UploadToS3 {
        /// Directory holding built archives
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}
