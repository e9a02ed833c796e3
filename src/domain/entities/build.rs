//! Build request and result entities

use std::path::{Path, PathBuf};

use crate::domain::value_objects::LayerRuntime;

/// What to package: a dependency manifest for a runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    manifest: PathBuf,
    runtime: LayerRuntime,
}

impl BuildRequest {
    pub fn new(manifest: impl Into<PathBuf>, runtime: LayerRuntime) -> Self {
        Self {
            manifest: manifest.into(),
            runtime,
        }
    }

    /// Path to the requirements file
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    pub fn runtime(&self) -> LayerRuntime {
        self.runtime
    }
}

/// A produced layer archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    /// Archive path, always inside the build output directory
    pub archive_path: PathBuf,
    /// Archive size on disk
    pub size_bytes: u64,
}

impl BuildResult {
    pub fn file_name(&self) -> String {
        self.archive_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
