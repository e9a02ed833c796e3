//! AWS adapters
//!
//! The SDK is async; the rest of the program is not. Each client owns a
//! current-thread tokio runtime and blocks on every call, so requests stay
//! strictly sequential.

mod credentials;
mod lambda;
mod s3;

pub use credentials::{
    missing_credentials, AwsCredentials, ACCESS_KEY_ID_VAR, REQUIRED_VARS, SECRET_ACCESS_KEY_VAR,
    SESSION_TOKEN_VAR,
};
pub use lambda::SdkLayerPublisher;
pub use s3::SdkObjectUploader;

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_lambda::config::Credentials;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::error::PublishError;

const CREDENTIALS_SOURCE: &str = "environment";

/// Runtime plus shared SDK configuration for one region
fn connect(region: &str, credentials: &AwsCredentials) -> Result<(Runtime, SdkConfig), PublishError> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(PublishError::Runtime)?;

    debug!(region, "loading AWS SDK configuration");
    let config = runtime.block_on(
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.clone(),
                Some(credentials.session_token.clone()),
                None,
                CREDENTIALS_SOURCE,
            ))
            // A failed call is reported immediately, never retried.
            .retry_config(RetryConfig::standard().with_max_attempts(1))
            .load(),
    );

    Ok((runtime, config))
}
