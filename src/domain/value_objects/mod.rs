//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod layer_size;
mod runtime;

pub use hash::ContentHash;
pub use layer_size::{
    SizeClass, SizeReport, BYTES_PER_MB, LAYER_SIZE_LIMIT_MB, UNZIPPED_SIZE_LIMIT_MB,
};
pub use runtime::{LayerRuntime, TargetPlatform};
