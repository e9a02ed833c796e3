//! Domain Entities
//!
//! - `BuildRequest` / `BuildResult` - one layer build, input and output
//! - `PersistedPreferences` - remembered answers shared by all commands

mod build;
mod preferences;

pub use build::{BuildRequest, BuildResult};
pub use preferences::PersistedPreferences;
