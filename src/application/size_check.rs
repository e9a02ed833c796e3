//! Size check for built archives
//!
//! Read-only: looks at file metadata and classifies the size against the
//! direct-upload limit.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::value_objects::SizeReport;

/// Measure an archive and classify it against the Lambda layer limit.
///
/// Fails if the path cannot be read or is not a regular file.
pub fn check_layer_size(path: &Path) -> io::Result<SizeReport> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a file", path.display()),
        ));
    }

    let report = SizeReport::new(metadata.len());
    debug!(path = %path.display(), size_bytes = report.size_bytes(), "checked layer size");
    Ok(report)
}
