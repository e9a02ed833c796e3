//! Upload Object Use Case
//!
//! Stores a built archive in S3 so it can be published from there.

use std::fs;
use std::time::{Duration, Instant};

use tracing::info;

use crate::domain::plans::UploadPlan;
use crate::domain::ports::{ObjectUploader, PreferencesStore, PutObjectRequest, UploadedObject};
use crate::error::PublishError;

#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub object: UploadedObject,
    /// `s3://bucket/key`
    pub location: String,
    pub elapsed: Duration,
}

pub struct UploadObjectUseCase<U, S>
where
    U: ObjectUploader,
    S: PreferencesStore,
{
    uploader: U,
    store: S,
}

impl<U, S> UploadObjectUseCase<U, S>
where
    U: ObjectUploader,
    S: PreferencesStore,
{
    pub fn new(uploader: U, store: S) -> Self {
        Self { uploader, store }
    }

    pub fn execute(&self, plan: &UploadPlan) -> Result<UploadOutcome, PublishError> {
        self.store.save(&plan.preferences());

        let body = fs::read(&plan.archive).map_err(|source| PublishError::ReadArchive {
            path: plan.archive.clone(),
            source,
        })?;

        let location = plan.location();
        info!(%location, size_bytes = body.len(), "uploading layer archive");
        let started = Instant::now();
        let object = self.uploader.put_object(PutObjectRequest {
            bucket: plan.bucket.clone(),
            key: plan.key.clone(),
            body,
            content_type: UploadPlan::CONTENT_TYPE.to_string(),
        })?;
        let elapsed = started.elapsed();
        info!(%location, "upload complete");

        Ok(UploadOutcome {
            object,
            location,
            elapsed,
        })
    }
}
