//! Archiver port - packs staged files into the layer archive

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("archive entry not found: {path}")]
    MissingEntry { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(String),
}

/// Creates a compressed archive from entries under a root directory.
///
/// Each entry is a path relative to `root`; directories are added
/// recursively and stored under their relative path.
pub trait Archiver {
    fn archive(&self, root: &Path, entries: &[&str], destination: &Path)
        -> Result<(), ArchiveError>;
}
