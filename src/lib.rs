//! lambda-layer-maker - build and publish AWS Lambda layers
//!
//! Packages Python dependencies into a layer archive by installing prebuilt
//! wheels inside a platform-pinned container, then publishes the archive to
//! Lambda directly or stages it in S3 first.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    check_layer_size, ArtifactInventory, BuildLayerUseCase, BuildOptions, PublishLayerUseCase,
    UploadObjectUseCase,
};
pub use domain::entities::{BuildRequest, BuildResult, PersistedPreferences};
pub use domain::plans::{LayerSource, PublishPlan, UploadPlan};
pub use domain::value_objects::{LayerRuntime, SizeReport};
pub use error::{BuildError, PublishError, StoreError};
