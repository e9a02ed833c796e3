//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, plans, ports)
//! - Does NOT prompt or print; the binary collects input and renders output
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildLayerUseCase` - Stage, install in a pinned container, compress
//! - `check_layer_size` - Classify an archive against the upload limit
//! - `ArtifactInventory` - Archives available in the output directory
//! - `PublishLayerUseCase` - Register a new layer version
//! - `UploadObjectUseCase` - Store an archive in S3

pub mod build;
pub mod inventory;
pub mod publish;
pub mod size_check;
pub mod upload;

pub use build::{BuildLayerUseCase, BuildOptions};
pub use inventory::ArtifactInventory;
pub use publish::{PublishLayerUseCase, PublishOutcome};
pub use size_check::check_layer_size;
pub use upload::{UploadObjectUseCase, UploadOutcome};
