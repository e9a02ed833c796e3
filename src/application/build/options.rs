//! Build Options
//!
//! Configuration types for layer builds.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{ContentHash, LayerRuntime};

/// Output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Name of the manifest copy stored next to the staged packages
pub const MANIFEST_FILE_NAME: &str = "requirements.txt";

/// Options for the build use case
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding the staging tree, manifest copy and archives
    pub output_dir: PathBuf,
    /// Timestamp embedded in the archive name
    pub started_at: DateTime<Utc>,
    /// Append a manifest-derived hash after the timestamp
    pub content_suffix: bool,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            started_at: Utc::now(),
            content_suffix: false,
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn with_content_suffix(mut self, enabled: bool) -> Self {
        self.content_suffix = enabled;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Archive file name: `<prefix>-<timestamp>[-<hash>].zip`.
///
/// The timestamp is ISO-8601 UTC with `:` and `.` replaced by `-`, so names
/// are unique per build and sort chronologically.
pub fn archive_file_name(
    runtime: LayerRuntime,
    started_at: DateTime<Utc>,
    content_hash: Option<&ContentHash>,
) -> String {
    let timestamp = started_at.format("%Y-%m-%dT%H-%M-%S-%3fZ");
    match content_hash {
        Some(hash) => format!(
            "{}-{}-{}.zip",
            runtime.archive_prefix(),
            timestamp,
            hash.short()
        ),
        None => format!("{}-{}.zip", runtime.archive_prefix(), timestamp),
    }
}
