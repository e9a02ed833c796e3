//! Container runtime adapters

mod docker;

pub use docker::{docker_pull_args, docker_run_args, DockerCli};
