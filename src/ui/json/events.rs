//! JSON event types, one struct per `event` value.

use std::path::Path;

use serde::Serialize;

use lambda_layer_maker::application::{PublishOutcome, UploadOutcome};
use lambda_layer_maker::domain::ports::BuildEvent;
use lambda_layer_maker::SizeReport;

/// Progress of a layer build (`event: "build"`)
#[derive(Debug, Clone, Serialize)]
pub struct BuildStepEvent {
    pub event: &'static str,
    pub step: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheel_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl BuildStepEvent {
    fn bare(step: &'static str) -> Self {
        Self {
            event: "build",
            step,
            runtime: None,
            path: None,
            image: None,
            platform: None,
            wheel_platform: None,
            size_bytes: None,
        }
    }
}

impl From<&BuildEvent> for BuildStepEvent {
    fn from(event: &BuildEvent) -> Self {
        let mut out = Self::bare(event.step());
        match event {
            BuildEvent::Started { runtime, manifest } => {
                out.runtime = Some(runtime.clone());
                out.path = Some(display(manifest));
            }
            BuildEvent::StagingPrepared { staging_dir } => {
                out.path = Some(display(staging_dir));
            }
            BuildEvent::PullingImage { image } => out.image = Some(image.clone()),
            BuildEvent::InstallingDependencies {
                container_platform,
                wheel_platform,
            } => {
                out.platform = Some(container_platform.clone());
                out.wheel_platform = Some(wheel_platform.clone());
            }
            BuildEvent::Compressing { archive } => out.path = Some(display(archive)),
            BuildEvent::Completed {
                archive,
                size_bytes,
            } => {
                out.path = Some(display(archive));
                out.size_bytes = Some(*size_bytes);
            }
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeCheckEvent {
    pub event: &'static str,
    pub path: String,
    pub size_bytes: u64,
    pub size_mb: f64,
    pub exceeds_limit: bool,
    pub message: String,
}

impl SizeCheckEvent {
    pub fn new(path: &Path, report: &SizeReport) -> Self {
        Self {
            event: "size_check",
            path: display(path),
            size_bytes: report.size_bytes(),
            size_mb: (report.size_mb() * 100.0).round() / 100.0,
            exceeds_limit: report.exceeds_limit(),
            message: report.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishEvent {
    pub event: &'static str,
    pub layer_version_arn: Option<String>,
    pub version: i64,
    pub description: Option<String>,
    pub created_date: Option<String>,
    pub compatible_runtimes: Vec<String>,
    pub duration_ms: u64,
}

impl From<&PublishOutcome> for PublishEvent {
    fn from(outcome: &PublishOutcome) -> Self {
        let layer = &outcome.layer;
        Self {
            event: "publish",
            layer_version_arn: layer.layer_version_arn.clone(),
            version: layer.version,
            description: layer.description.clone(),
            created_date: layer.created_date.clone(),
            compatible_runtimes: layer.compatible_runtimes.clone(),
            duration_ms: outcome.elapsed.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadEvent {
    pub event: &'static str,
    pub location: String,
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
    pub server_side_encryption: Option<String>,
    pub duration_ms: u64,
}

impl From<&UploadOutcome> for UploadEvent {
    fn from(outcome: &UploadOutcome) -> Self {
        Self {
            event: "upload",
            location: outcome.location.clone(),
            e_tag: outcome.object.e_tag.clone(),
            version_id: outcome.object.version_id.clone(),
            server_side_encryption: outcome.object.server_side_encryption.clone(),
            duration_ms: outcome.elapsed.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: Option<String>) -> Self {
        self.help = help;
        self
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
