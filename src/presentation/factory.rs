//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{BuildLayerUseCase, PublishLayerUseCase, UploadObjectUseCase};
use crate::error::PublishError;
use crate::infrastructure::{
    AwsCredentials, DockerCli, JsonPreferencesStore, SdkLayerPublisher, SdkObjectUploader,
    ZipArchiver,
};

/// Type alias for the concrete BuildLayerUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildLayerUseCase<DockerCli, DockerCli, ZipArchiver>;

pub type ConcretePublishUseCase = PublishLayerUseCase<SdkLayerPublisher, JsonPreferencesStore>;

pub type ConcreteUploadUseCase = UploadObjectUseCase<SdkObjectUploader, JsonPreferencesStore>;

/// Create a build use case backed by the docker CLI and the zip archiver
///
/// With `json` set, docker's stdout is redirected to stderr.
pub fn create_build_use_case(json: bool) -> ConcreteBuildUseCase {
    let docker = DockerCli::new().with_json(json);
    BuildLayerUseCase::new(docker, docker, ZipArchiver::new())
}

/// Create a publish use case for `region`
pub fn create_publish_use_case(
    region: &str,
    credentials: &AwsCredentials,
    store: JsonPreferencesStore,
) -> Result<ConcretePublishUseCase, PublishError> {
    let publisher = SdkLayerPublisher::connect(region, credentials)?;
    Ok(PublishLayerUseCase::new(publisher, store))
}

/// Create an upload use case for `region`
pub fn create_upload_use_case(
    region: &str,
    credentials: &AwsCredentials,
    store: JsonPreferencesStore,
) -> Result<ConcreteUploadUseCase, PublishError> {
    let uploader = SdkObjectUploader::connect(region, credentials)?;
    Ok(UploadObjectUseCase::new(uploader, store))
}
