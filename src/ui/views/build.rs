use std::path::Path;

use lambda_layer_maker::domain::ports::BuildEvent;
use lambda_layer_maker::domain::value_objects::BYTES_PER_MB;
use lambda_layer_maker::{LayerRuntime, SizeReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_build_header(
    runtime: LayerRuntime,
    manifest: &Path,
    output_dir: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Build Lambda Layer");
    header.add("Runtime", runtime.id());
    header.add("Requirements", manifest.display().to_string());
    header.add("Output", output_dir.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// One progress line per build step.
pub fn render_build_event(event: &BuildEvent, supports_color: bool, supports_unicode: bool) -> String {
    let progress = Icon::Progress.colored(supports_color, supports_unicode);
    match event {
        BuildEvent::Started { runtime, .. } => {
            format!("{} Creating Lambda layer for {}\n", progress, runtime)
        }
        BuildEvent::StagingPrepared { staging_dir } => format!(
            "{} Prepared staging directory {}\n",
            progress,
            staging_dir.display()
        ),
        BuildEvent::PullingImage { image } => {
            format!("{} Pulling image {}\n", progress, image)
        }
        BuildEvent::InstallingDependencies {
            container_platform,
            wheel_platform,
        } => format!(
            "{} Installing dependencies ({}, {})\n",
            progress, container_platform, wheel_platform
        ),
        BuildEvent::Compressing { archive } => {
            format!("{} Creating zip file {}\n", progress, archive.display())
        }
        BuildEvent::Completed {
            archive,
            size_bytes,
        } => format!(
            "{} Lambda layer created: {} ({:.2}MB)\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(archive.display().to_string()).render(supports_color),
            *size_bytes as f64 / BYTES_PER_MB as f64
        ),
    }
}

pub fn render_size_report(report: &SizeReport, supports_color: bool, supports_unicode: bool) -> String {
    if report.exceeds_limit() {
        let mut block = WarningBlock::new("Layer exceeds direct upload limit");
        for sentence in report.message().split_inclusive(". ") {
            block.add_line(sentence.trim_end());
        }
        return block.render(supports_color, supports_unicode);
    }

    format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        report.message()
    )
}
