//! Publish and upload plans
//!
//! A plan is the fully specified parameter set for one network operation.
//! Plans are produced by the interactive collection step; use cases only
//! ever see a complete plan and never prompt.

use std::path::{Path, PathBuf};

use crate::domain::entities::PersistedPreferences;

/// Where the layer content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerSource {
    /// A locally built archive, sent inline
    LocalFile(PathBuf),
    /// An archive already staged in S3
    S3Object { bucket: String, key: String },
}

/// Parameters for publishing a new layer version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPlan {
    pub region: String,
    pub layer_name: String,
    pub description: String,
    /// Lambda runtime identifier, e.g. `python3.12`
    pub compatible_runtime: String,
    pub source: LayerSource,
}

impl PublishPlan {
    /// Answers to remember for the next run
    pub fn preferences(&self) -> PersistedPreferences {
        let mut prefs = PersistedPreferences {
            region: Some(self.region.clone()),
            layer_name: Some(self.layer_name.clone()),
            description: Some(self.description.clone()),
            runtime: Some(self.compatible_runtime.clone()),
            ..PersistedPreferences::default()
        };

        match &self.source {
            LayerSource::LocalFile(path) => {
                prefs.layer_file_path = Some(path.display().to_string());
            }
            LayerSource::S3Object { bucket, key } => {
                prefs.bucket = Some(bucket.clone());
                prefs.key = Some(key.clone());
            }
        }

        prefs
    }
}

/// Parameters for uploading an archive to S3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    pub region: String,
    pub bucket: String,
    pub key: String,
    pub archive: PathBuf,
}

impl UploadPlan {
    /// Content type sent with every upload
    pub const CONTENT_TYPE: &'static str = "application/zip";

    /// Answers to remember for the next run.
    ///
    /// The archive path is deliberately not remembered here; only publish
    /// pre-selects archives.
    pub fn preferences(&self) -> PersistedPreferences {
        PersistedPreferences::new()
            .with_region(self.region.clone())
            .with_bucket(self.bucket.clone())
            .with_key(self.key.clone())
    }

    /// `s3://bucket/key`
    pub fn location(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

/// Default object key for an archive: its file name
pub fn default_object_key(archive: &Path) -> String {
    archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
