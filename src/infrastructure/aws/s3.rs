//! S3 object uploader

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tokio::runtime::Runtime;
use tracing::debug;

use super::{connect, AwsCredentials};
use crate::domain::ports::{ObjectUploader, PutObjectRequest, UploadedObject};
use crate::error::PublishError;

const OPERATION: &str = "PutObject";

pub struct SdkObjectUploader {
    runtime: Runtime,
    client: Client,
}

impl SdkObjectUploader {
    pub fn connect(region: &str, credentials: &AwsCredentials) -> Result<Self, PublishError> {
        let (runtime, config) = connect(region, credentials)?;
        Ok(Self {
            runtime,
            client: Client::new(&config),
        })
    }
}

impl ObjectUploader for SdkObjectUploader {
    fn put_object(&self, request: PutObjectRequest) -> Result<UploadedObject, PublishError> {
        debug!(
            bucket = %request.bucket,
            key = %request.key,
            size_bytes = request.body.len(),
            "sending PutObject"
        );
        let call = self
            .client
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .content_type(request.content_type)
            .body(ByteStream::from(request.body));

        let output = self
            .runtime
            .block_on(call.send())
            .map_err(|e| PublishError::Service {
                operation: OPERATION,
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(UploadedObject {
            e_tag: output.e_tag().map(str::to_string),
            version_id: output.version_id().map(str::to_string),
            server_side_encryption: output
                .server_side_encryption()
                .map(|sse| sse.as_str().to_string()),
        })
    }
}
