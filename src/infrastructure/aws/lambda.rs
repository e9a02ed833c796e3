//! Lambda layer publisher

use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::{LayerVersionContentInput, Runtime as LambdaRuntime};
use aws_sdk_lambda::Client;
use tokio::runtime::Runtime;
use tracing::debug;

use super::{connect, AwsCredentials};
use crate::domain::ports::{LayerContent, LayerPublisher, PublishLayerRequest, PublishedLayer};
use crate::error::PublishError;

const OPERATION: &str = "PublishLayerVersion";

pub struct SdkLayerPublisher {
    runtime: Runtime,
    client: Client,
}

impl SdkLayerPublisher {
    pub fn connect(region: &str, credentials: &AwsCredentials) -> Result<Self, PublishError> {
        let (runtime, config) = connect(region, credentials)?;
        Ok(Self {
            runtime,
            client: Client::new(&config),
        })
    }
}

impl LayerPublisher for SdkLayerPublisher {
    fn publish(&self, request: PublishLayerRequest) -> Result<PublishedLayer, PublishError> {
        let content = match request.content {
            LayerContent::ZipFile(bytes) => LayerVersionContentInput::builder()
                .zip_file(Blob::new(bytes))
                .build(),
            LayerContent::S3Object { bucket, key } => LayerVersionContentInput::builder()
                .s3_bucket(bucket)
                .s3_key(key)
                .build(),
        };

        debug!(
            layer = %request.layer_name,
            runtimes = ?request.compatible_runtimes,
            "sending PublishLayerVersion"
        );
        let mut call = self
            .client
            .publish_layer_version()
            .layer_name(request.layer_name)
            .description(request.description)
            .content(content);
        for runtime in &request.compatible_runtimes {
            call = call.compatible_runtimes(LambdaRuntime::from(runtime.as_str()));
        }

        let output = self
            .runtime
            .block_on(call.send())
            .map_err(|e| PublishError::Service {
                operation: OPERATION,
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(PublishedLayer {
            layer_version_arn: output.layer_version_arn().map(str::to_string),
            version: output.version(),
            description: output.description().map(str::to_string),
            created_date: output.created_date().map(str::to_string),
            compatible_runtimes: output
                .compatible_runtimes()
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
        })
    }
}
