use lambda_layer_maker::domain::ports::ContainerError;
use lambda_layer_maker::{BuildError, PublishError};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::ErrorEvent};

/// Suggested next step for errors the operator can act on.
pub fn fix_hint(err: &anyhow::Error) -> Option<String> {
    for cause in err.chain() {
        if let Some(build) = cause.downcast_ref::<BuildError>() {
            return build_hint(build);
        }
        if let Some(publish) = cause.downcast_ref::<PublishError>() {
            return publish_hint(publish);
        }
    }
    None
}

fn build_hint(err: &BuildError) -> Option<String> {
    match err {
        BuildError::ManifestNotFound { .. } => {
            Some("Pass an existing requirements file with -f <path>.".to_string())
        }
        BuildError::ManifestRequired { .. } => {
            Some("Pass a requirements file with -f <path>.".to_string())
        }
        BuildError::UnsupportedRuntime { .. } => Some(
            "Use -r python3.12amd64 (the only supported runtime).".to_string(),
        ),
        BuildError::ImageUnavailable {
            source: ContainerError::Spawn { .. },
            ..
        }
        | BuildError::InstallFailed {
            source: ContainerError::Spawn { .. },
        } => Some("Install Docker and make sure it is on PATH.".to_string()),
        BuildError::ImageUnavailable { .. } => Some(
            "Check that the Docker daemon is running and the registry is reachable.".to_string(),
        ),
        BuildError::InstallFailed { .. } => Some(
            "Check the requirements file; every package needs a prebuilt wheel for the target platform."
                .to_string(),
        ),
        BuildError::CompressionFailed { .. } | BuildError::Io(_) => None,
    }
}

fn publish_hint(err: &PublishError) -> Option<String> {
    match err {
        PublishError::MissingCredentials { .. } => {
            Some("Export the variables listed above and run the command again.".to_string())
        }
        PublishError::NoArchives { .. } => {
            Some("lambda-layer-maker build -f requirements.txt".to_string())
        }
        PublishError::ReadArchive { .. } | PublishError::Service { .. } | PublishError::Runtime(_) => {
            None
        }
    }
}

fn is_library_error(err: &anyhow::Error) -> bool {
    err.is::<BuildError>() || err.is::<PublishError>()
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(err.to_string());

    // Library errors already include their source in the message.
    if !is_library_error(err) {
        for cause in err.chain().skip(1) {
            block = block.with_cause(cause.to_string());
        }
    }

    if let Some(fix) = fix_hint(err) {
        block = block.with_fix(fix);
    }

    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let event = ErrorEvent::new(format!("{:#}", err)).with_help(fix_hint(err));
        let _ = emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
