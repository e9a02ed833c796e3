//! Artifact inventory - archives available for publishing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::build::DEFAULT_OUTPUT_DIR;

/// Lists the `.zip` archives in the build output directory.
#[derive(Debug, Clone)]
pub struct ArtifactInventory {
    dir: PathBuf,
}

impl ArtifactInventory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<cwd>/output`
    pub fn default_location() -> io::Result<Self> {
        Self::in_output_dir(Path::new(DEFAULT_OUTPUT_DIR))
    }

    /// Inventory of the directory `build --output-dir` wrote to.
    /// Relative paths resolve against the working directory.
    pub fn in_output_dir(output_dir: &Path) -> io::Result<Self> {
        if output_dir.is_absolute() {
            return Ok(Self::new(output_dir));
        }
        Ok(Self::new(std::env::current_dir()?.join(output_dir)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Archives sorted by file name, oldest build first.
    ///
    /// A missing directory yields an empty list. Any other read error is
    /// logged and also yields an empty list.
    pub fn list(&self) -> Vec<PathBuf> {
        match self.read_archives() {
            Ok(archives) => archives,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "failed to read output directory");
                Vec::new()
            }
        }
    }

    /// Most recently built archive
    pub fn latest(&self) -> Option<PathBuf> {
        self.list().pop()
    }

    fn read_archives(&self) -> io::Result<Vec<PathBuf>> {
        let mut archives = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let is_zip = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(".zip"));
            if is_zip {
                archives.push(entry.path());
            }
        }
        archives.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(archives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let inventory = ArtifactInventory::new(dir.path().join("output"));

        assert!(inventory.list().is_empty());
        assert!(inventory.latest().is_none());
    }

    #[test]
    fn lists_only_zip_files_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("layer-2025-02-01.zip"), b"b").unwrap();
        fs::write(dir.path().join("layer-2025-01-01.zip"), b"a").unwrap();
        fs::write(dir.path().join("requirements.txt"), b"requests").unwrap();
        fs::create_dir(dir.path().join("python")).unwrap();
        fs::create_dir(dir.path().join("dir.zip")).unwrap();

        let inventory = ArtifactInventory::new(dir.path());

        assert_eq!(
            names(&inventory.list()),
            vec!["layer-2025-01-01.zip", "layer-2025-02-01.zip"]
        );
    }

    #[test]
    fn latest_is_last_by_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("python3-12-amd64-layer-2025-01-31T09-15-02-123Z.zip"), b"").unwrap();
        fs::write(dir.path().join("python3-12-amd64-layer-2025-03-01T00-00-00-000Z.zip"), b"").unwrap();

        let latest = ArtifactInventory::new(dir.path()).latest().unwrap();
        assert!(latest.ends_with("python3-12-amd64-layer-2025-03-01T00-00-00-000Z.zip"));
    }

    #[test]
    fn output_dir_resolution() {
        let dir = tempdir().unwrap();
        let absolute = ArtifactInventory::in_output_dir(dir.path()).unwrap();
        assert_eq!(absolute.dir(), dir.path());

        let relative = ArtifactInventory::in_output_dir(Path::new("dist")).unwrap();
        assert_eq!(relative.dir(), std::env::current_dir().unwrap().join("dist"));

        let default = ArtifactInventory::default_location().unwrap();
        assert!(default.dir().ends_with(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn file_instead_of_directory_is_empty() {
        let dir = tempdir().unwrap();
        let not_a_dir = dir.path().join("output");
        fs::write(&not_a_dir, b"").unwrap();

        assert!(ArtifactInventory::new(not_a_dir).list().is_empty());
    }
}
