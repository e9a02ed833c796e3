//! Publisher ports - Lambda layer registration and S3 object upload
//!
//! Request and response types mirror the subset of the AWS APIs this tool
//! uses, so use cases can be tested without an SDK client.

use crate::error::PublishError;

/// Layer content for `PublishLayerVersion`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerContent {
    /// Archive bytes sent inline
    ZipFile(Vec<u8>),
    /// Archive already stored in S3
    S3Object { bucket: String, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishLayerRequest {
    pub layer_name: String,
    pub description: String,
    pub compatible_runtimes: Vec<String>,
    pub content: LayerContent,
}

/// A newly created layer version as reported by Lambda
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishedLayer {
    pub layer_version_arn: Option<String>,
    pub version: i64,
    pub description: Option<String>,
    pub created_date: Option<String>,
    pub compatible_runtimes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObjectRequest {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Result of a `PutObject` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedObject {
    pub e_tag: Option<String>,
    /// Present only for versioned buckets
    pub version_id: Option<String>,
    pub server_side_encryption: Option<String>,
}

/// Registers layer versions with Lambda
pub trait LayerPublisher {
    fn publish(&self, request: PublishLayerRequest) -> Result<PublishedLayer, PublishError>;
}

/// Stores objects in S3
pub trait ObjectUploader {
    fn put_object(&self, request: PutObjectRequest) -> Result<UploadedObject, PublishError>;
}
