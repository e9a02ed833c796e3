//! Build command handler
//!
//! Builds a layer archive, then reports its size against the upload limit.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use lambda_layer_maker::domain::ports::{BuildEvent, BuildEventSink};
use lambda_layer_maker::presentation::create_build_use_case;
use lambda_layer_maker::{
    check_layer_size, BuildError, BuildOptions, BuildRequest, LayerRuntime, SizeReport,
};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{BuildStepEvent, SizeCheckEvent};
use crate::ui::views::build::{render_build_event, render_build_header, render_size_report};

/// Prints build steps as they happen
struct ConsoleBuildSink<'a> {
    ui: &'a UiContext,
}

impl BuildEventSink for ConsoleBuildSink<'_> {
    fn on_event(&self, event: BuildEvent) {
        if self.ui.json {
            let _ = emit_event(&BuildStepEvent::from(&event));
        } else {
            print!("{}", render_build_event(&event, self.ui.color, self.ui.unicode));
        }
    }
}

pub fn cmd_build(
    runtime: &str,
    requirements: Option<&Path>,
    output_dir: &Path,
    content_suffix: bool,
    ui: &UiContext,
) -> Result<()> {
    let runtime: LayerRuntime = runtime.parse()?;
    let Some(manifest) = requirements else {
        return Err(BuildError::ManifestRequired {
            runtime: runtime.id().to_string(),
        }
        .into());
    };

    if !ui.json {
        print!(
            "{}",
            render_build_header(runtime, manifest, output_dir, ui.color, ui.unicode)
        );
    }

    let request = BuildRequest::new(manifest, runtime);
    let options = BuildOptions::new()
        .with_output_dir(output_dir)
        .with_content_suffix(content_suffix);
    let sink = ConsoleBuildSink { ui };

    let result = create_build_use_case(ui.json).execute_with_events(&request, &options, &sink)?;

    // The archive exists either way; a failed size check is not a failed build.
    let report = check_layer_size(&result.archive_path);
    if let Ok(report) = &report {
        log_size_report(&result.archive_path, report);
    }
    match report {
        Ok(report) if ui.json => {
            let _ = emit_event(&SizeCheckEvent::new(&result.archive_path, &report));
        }
        Ok(report) => print!("{}", render_size_report(&report, ui.color, ui.unicode)),
        Err(e) => warn!(
            archive = %result.archive_path.display(),
            error = %e,
            "could not check layer size"
        ),
    }

    Ok(())
}

/// Oversized archives also go to the log so `-v` and `RUST_LOG` users see them.
fn log_size_report(archive: &Path, report: &SizeReport) {
    if report.exceeds_limit() {
        warn!(archive = %archive.display(), size_bytes = report.size_bytes(), "{}", report.message());
    }
}
