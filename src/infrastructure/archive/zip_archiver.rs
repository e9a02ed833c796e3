//! Zip archiver
//!
//! Writes deflate-compressed zip archives with explicit directory entries
//! and the source files' Unix permission bits. Symlinks are stored as the
//! content they point to; dangling links and looping links are skipped.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Component, Path};

use tracing::{debug, trace, warn};
use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::domain::ports::{ArchiveError, Archiver};

const DEFAULT_FILE_MODE: u32 = 0o644;
const DEFAULT_DIR_MODE: u32 = 0o755;

#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }

    fn write_archive(
        &self,
        root: &Path,
        entries: &[&str],
        destination: &Path,
    ) -> Result<u64, ArchiveError> {
        let file = File::create(destination)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        let base = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut count = 0u64;

        for entry in entries {
            let start = root.join(entry);
            if !start.exists() {
                return Err(ArchiveError::MissingEntry { path: start });
            }

            let walker = WalkDir::new(&start).follow_links(true).sort_by_file_name();
            for item in walker {
                let item = match item {
                    Ok(item) => item,
                    Err(e) if is_unresolvable_link(&e) => {
                        warn!(
                            path = %e.path().map(|p| p.display().to_string()).unwrap_or_default(),
                            error = %e,
                            "skipping unresolvable symlink"
                        );
                        continue;
                    }
                    Err(e) => return Err(ArchiveError::Io(io::Error::other(e))),
                };
                let path = item.path();
                let Some(name) = archive_name(root, path) else {
                    continue;
                };
                let metadata = item.metadata().map_err(|e| ArchiveError::Io(io::Error::other(e)))?;

                if metadata.is_dir() {
                    let options = base.unix_permissions(mode_of(&metadata, DEFAULT_DIR_MODE));
                    trace!(entry = %name, "adding directory");
                    zip.add_directory(format!("{name}/"), options)
                        .map_err(zip_error)?;
                } else if metadata.is_file() {
                    let options = base.unix_permissions(mode_of(&metadata, DEFAULT_FILE_MODE));
                    trace!(entry = %name, "adding file");
                    zip.start_file(name, options).map_err(zip_error)?;
                    let mut source = File::open(path)?;
                    io::copy(&mut source, &mut zip)?;
                } else {
                    warn!(path = %path.display(), "skipping entry that is neither file nor directory");
                    continue;
                }
                count += 1;
            }
        }

        zip.finish().map_err(zip_error)?;
        Ok(count)
    }
}

impl Archiver for ZipArchiver {
    fn archive(
        &self,
        root: &Path,
        entries: &[&str],
        destination: &Path,
    ) -> Result<(), ArchiveError> {
        match self.write_archive(root, entries, destination) {
            Ok(count) => {
                debug!(archive = %destination.display(), entries = count, "archive written");
                Ok(())
            }
            Err(e) => {
                // A partial archive would be listed for publishing.
                let _ = fs::remove_file(destination);
                Err(e)
            }
        }
    }
}

/// Entry name relative to `root`, always `/`-separated
fn archive_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Dangling or looping symlink, as reported while following links
fn is_unresolvable_link(e: &walkdir::Error) -> bool {
    if e.loop_ancestor().is_some() {
        return true;
    }
    e.path()
        .and_then(|p| fs::symlink_metadata(p).ok())
        .is_some_and(|m| m.file_type().is_symlink())
}

fn zip_error(e: zip::result::ZipError) -> ArchiveError {
    match e {
        zip::result::ZipError::Io(io) => ArchiveError::Io(io),
        other => ArchiveError::Zip(other.to_string()),
    }
}

#[cfg(unix)]
fn mode_of(metadata: &fs::Metadata, _default: u32) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_of(_metadata: &fs::Metadata, default: u32) -> u32 {
    default
}
