//! Error types for lambda-layer-maker
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ArchiveError, ContainerError};

/// Result type alias for layer build operations
pub type BuildOutcome<T> = Result<T, BuildError>;

/// Errors raised while building a layer archive.
///
/// Precondition failures (`ManifestNotFound`, `ManifestRequired`,
/// `UnsupportedRuntime`) are detected before any side effect.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Requirements path does not resolve to a regular file
    #[error("requirements file not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Runtime needs a requirements file but none was given
    #[error("requirements file is required for the {runtime} runtime")]
    ManifestRequired { runtime: String },

    /// Runtime identifier is not one we know how to package
    #[error("unsupported runtime: {runtime}")]
    UnsupportedRuntime { runtime: String },

    /// The isolated install image could not be fetched
    #[error("failed to pull image '{image}': {source}")]
    ImageUnavailable {
        image: String,
        #[source]
        source: ContainerError,
    },

    /// Dependency installation inside the container exited non-zero
    #[error("dependency installation failed: {source}")]
    InstallFailed {
        #[source]
        source: ContainerError,
    },

    /// Archive creation failed
    #[error("failed to create layer archive {path}: {source}")]
    CompressionFailed {
        path: PathBuf,
        #[source]
        source: ArchiveError,
    },

    /// IO error while preparing the staging directory
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the publish and upload flows.
#[derive(Error, Debug)]
pub enum PublishError {
    /// One or more credential environment variables are unset or empty
    #[error("missing required AWS credentials:{}", format_missing(.missing))]
    MissingCredentials { missing: Vec<String> },

    /// No archives are available in the output directory
    #[error("no zip files available in {dir}. Run the build command first.")]
    NoArchives { dir: PathBuf },

    /// Reading the archive bytes from disk failed
    #[error("failed to read layer archive {path}: {source}")]
    ReadArchive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The AWS service call failed
    #[error("{operation} failed: {message}")]
    Service {
        operation: &'static str,
        message: String,
    },

    /// The async runtime backing the SDK client could not start
    #[error("failed to start AWS client runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

fn format_missing(missing: &[String]) -> String {
    missing.iter().map(|name| format!("\n- {name}")).collect()
}

/// Errors raised when persisting preferences.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to persist preferences to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
