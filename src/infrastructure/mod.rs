//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `container/` - Docker CLI (`ImagePuller`, `ContainerRunner`)
//! - `archive/` - Zip archiver
//! - `preferences/` - JSON preferences store
//! - `aws/` - Credential check, Lambda and S3 clients
//! - `fs/` - Home directory resolution

pub mod archive;
pub mod aws;
pub mod container;
pub mod fs;
pub mod preferences;

// Re-export for convenience
pub use archive::ZipArchiver;
pub use aws::{AwsCredentials, SdkLayerPublisher, SdkObjectUploader};
pub use container::DockerCli;
pub use preferences::JsonPreferencesStore;
