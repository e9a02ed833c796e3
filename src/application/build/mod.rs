//! Build Module
//!
//! Turns a dependency manifest into a deployable layer archive.
//!
//! ## Structure
//!
//! - `options` - Where and how to build (`BuildOptions`)
//! - `use_case` - The staging / install / compress pipeline (`BuildLayerUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use lambda_layer_maker::application::build::{BuildLayerUseCase, BuildOptions};
//!
//! let use_case = BuildLayerUseCase::new(docker, docker, ZipArchiver::new());
//! let result = use_case.execute(&request, &BuildOptions::new())?;
//! ```

mod options;
mod use_case;

pub use options::{archive_file_name, BuildOptions, DEFAULT_OUTPUT_DIR, MANIFEST_FILE_NAME};
pub use use_case::{pip_install_command, BuildLayerUseCase, CONTAINER_MOUNT_POINT};
