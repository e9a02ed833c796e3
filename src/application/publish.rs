//! Publish Layer Use Case
//!
//! Registers a new layer version from a complete `PublishPlan`. The plan's
//! answers are remembered before the network call so they survive a failed
//! publish.

use std::fs;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::domain::plans::{LayerSource, PublishPlan};
use crate::domain::ports::{
    LayerContent, LayerPublisher, PreferencesStore, PublishLayerRequest, PublishedLayer,
};
use crate::error::PublishError;

/// A published layer version and how long the call took
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub layer: PublishedLayer,
    pub elapsed: Duration,
}

pub struct PublishLayerUseCase<P, S>
where
    P: LayerPublisher,
    S: PreferencesStore,
{
    publisher: P,
    store: S,
}

impl<P, S> PublishLayerUseCase<P, S>
where
    P: LayerPublisher,
    S: PreferencesStore,
{
    pub fn new(publisher: P, store: S) -> Self {
        Self { publisher, store }
    }

    pub fn execute(&self, plan: &PublishPlan) -> Result<PublishOutcome, PublishError> {
        self.store.save(&plan.preferences());

        let content = match &plan.source {
            LayerSource::LocalFile(path) => {
                let bytes = fs::read(path).map_err(|source| PublishError::ReadArchive {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), size_bytes = bytes.len(), "read layer archive");
                LayerContent::ZipFile(bytes)
            }
            LayerSource::S3Object { bucket, key } => LayerContent::S3Object {
                bucket: bucket.clone(),
                key: key.clone(),
            },
        };

        let request = PublishLayerRequest {
            layer_name: plan.layer_name.clone(),
            description: plan.description.clone(),
            compatible_runtimes: vec![plan.compatible_runtime.clone()],
            content,
        };

        info!(layer = %plan.layer_name, region = %plan.region, "publishing layer version");
        let started = Instant::now();
        let layer = self.publisher.publish(request)?;
        let elapsed = started.elapsed();
        info!(
            arn = layer.layer_version_arn.as_deref().unwrap_or_default(),
            version = layer.version,
            "layer version published"
        );

        Ok(PublishOutcome { layer, elapsed })
    }
}
