//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations; tests provide fakes.

pub mod archiver;
pub mod build_events;
pub mod container;
pub mod preferences_store;
pub mod publisher;

pub use archiver::{ArchiveError, Archiver};
pub use build_events::{BuildEvent, BuildEventSink, NoopBuildEventSink};
pub use container::{ContainerError, ContainerInvocation, ContainerRunner, ImagePuller, VolumeMount};
pub use preferences_store::PreferencesStore;
pub use publisher::{
    LayerContent, LayerPublisher, ObjectUploader, PublishLayerRequest, PublishedLayer,
    PutObjectRequest, UploadedObject,
};
