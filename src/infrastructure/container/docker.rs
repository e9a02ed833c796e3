//! Docker CLI adapter
//!
//! Drives the `docker` binary as a child process. Output streams straight
//! through to the terminal so the operator sees pull and install progress.

use std::ffi::OsString;
use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{ContainerError, ContainerInvocation, ContainerRunner, ImagePuller};

const DOCKER: &str = "docker";

/// `ImagePuller` and `ContainerRunner` backed by the docker CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerCli {
    /// Send child stdout to stderr so stdout stays valid NDJSON
    json: bool,
}

impl DockerCli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn run_docker(&self, args: Vec<OsString>) -> Result<(), ContainerError> {
        let rendered = display_command(&args);
        debug!(command = %rendered, "running docker");

        let mut cmd = Command::new(DOCKER);
        cmd.args(&args).stdin(Stdio::null()).stderr(Stdio::inherit());
        if self.json {
            cmd.stdout(Stdio::from(io::stderr()));
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let status = cmd.status().map_err(|source| ContainerError::Spawn {
            program: DOCKER.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(ContainerError::ExitStatus {
                command: rendered,
                code: status.code(),
            });
        }
        Ok(())
    }
}

impl ImagePuller for DockerCli {
    fn pull(&self, image: &str) -> Result<(), ContainerError> {
        self.run_docker(docker_pull_args(image))
    }
}

impl ContainerRunner for DockerCli {
    fn run(&self, invocation: &ContainerInvocation) -> Result<(), ContainerError> {
        self.run_docker(docker_run_args(invocation))
    }
}

pub fn docker_pull_args(image: &str) -> Vec<OsString> {
    vec!["pull".into(), image.into()]
}

/// `run --rm --platform <p> -v <host>:<container>... <image> bash -c <command>`
pub fn docker_run_args(invocation: &ContainerInvocation) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "run".into(),
        "--rm".into(),
        "--platform".into(),
        invocation.platform.as_str().into(),
    ];

    for mount in &invocation.mounts {
        let mut volume = mount.host.clone().into_os_string();
        volume.push(":");
        volume.push(&mount.container);
        args.push("-v".into());
        args.push(volume);
    }

    args.push(invocation.image.as_str().into());
    args.push("bash".into());
    args.push("-c".into());
    args.push(invocation.command.as_str().into());
    args
}

fn display_command(args: &[OsString]) -> String {
    let mut parts = vec![DOCKER.to_string()];
    parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}
