use lambda_layer_maker::application::UploadOutcome;
use lambda_layer_maker::UploadPlan;

use super::{format_duration, or_dash};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_upload_header(plan: &UploadPlan, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Upload, "Uploading to S3");
    header.add("File", plan.archive.display().to_string());
    header.add("Destination", plan.location());
    header.add("Region", plan.region.as_str());
    header.render(supports_color, supports_unicode)
}

pub fn render_upload_result(
    outcome: &UploadOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let object = &outcome.object;
    let title = format!(
        "{} File uploaded successfully",
        Icon::Success.colored(supports_color, supports_unicode)
    );
    let mut b = Box::with_title(title).style(BoxStyle::Success);
    b.add_rows(&[
        ("ETag", or_dash(object.e_tag.as_deref())),
        (
            "Version ID",
            object.version_id.as_deref().unwrap_or("Not versioned").to_string(),
        ),
        (
            "Server Side Encryption",
            object
                .server_side_encryption
                .as_deref()
                .unwrap_or("None")
                .to_string(),
        ),
        ("Location", outcome.location.clone()),
    ]);

    let mut out = b.render(supports_color, supports_unicode);
    out.push_str(&format!("Upload duration: {}\n", format_duration(outcome.elapsed)));
    out
}
