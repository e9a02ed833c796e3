//! Container ports - isolated, platform-pinned command execution
//!
//! Two capabilities: fetching an image and running a shell command inside it
//! with host directories mounted.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the container runtime
#[derive(Error, Debug)]
pub enum ContainerError {
    /// The container runtime binary could not be started
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully
    #[error("'{command}' failed with exit code {}", format_code(.code))]
    ExitStatus { command: String, code: Option<i32> },
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// A host directory mounted into the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeMount {
    /// Absolute host path
    pub host: PathBuf,
    /// Mount point inside the container
    pub container: String,
}

/// One `run` of a shell command inside an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInvocation {
    pub image: String,
    /// Platform the container is pinned to, e.g. `linux/amd64`
    pub platform: String,
    pub mounts: Vec<VolumeMount>,
    /// Command passed to `bash -c`
    pub command: String,
}

/// Fetches images by name
pub trait ImagePuller {
    fn pull(&self, image: &str) -> Result<(), ContainerError>;
}

/// Runs a command in a throwaway container and waits for it to exit
pub trait ContainerRunner {
    fn run(&self, invocation: &ContainerInvocation) -> Result<(), ContainerError>;
}
