use lambda_layer_maker::application::PublishOutcome;
use lambda_layer_maker::{LayerSource, PublishPlan};

use super::{format_duration, or_dash};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_publish_header(
    plan: &PublishPlan,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Publish, "Publishing Lambda Layer");
    header.add("Layer", plan.layer_name.as_str());
    header.add("Region", plan.region.as_str());
    let source = match &plan.source {
        LayerSource::LocalFile(path) => path.display().to_string(),
        LayerSource::S3Object { bucket, key } => format!("s3://{}/{}", bucket, key),
    };
    header.add("Source", source);
    header.render(supports_color, supports_unicode)
}

pub fn render_publish_result(
    outcome: &PublishOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let layer = &outcome.layer;
    let title = format!(
        "{} Layer published successfully",
        Icon::Success.colored(supports_color, supports_unicode)
    );
    let mut b = Box::with_title(title).style(BoxStyle::Success);
    b.add_rows(&[
        ("Layer Version ARN", or_dash(layer.layer_version_arn.as_deref())),
        ("Version", layer.version.to_string()),
        ("Description", or_dash(layer.description.as_deref())),
        ("Created", or_dash(layer.created_date.as_deref())),
        ("Compatible Runtimes", layer.compatible_runtimes.join(", ")),
    ]);

    let mut out = b.render(supports_color, supports_unicode);
    out.push_str(&format!("Publish duration: {}\n", format_duration(outcome.elapsed)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_layer_maker::domain::ports::PublishedLayer;
    use std::time::Duration;

    #[test]
    fn renders_layer_details() {
        let outcome = PublishOutcome {
            layer: PublishedLayer {
                layer_version_arn: Some("arn:aws:lambda:us-west-2:1:layer:deps:3".to_string()),
                version: 3,
                description: Some("shared deps".to_string()),
                created_date: Some("2025-03-01T12:00:00.000+0000".to_string()),
                compatible_runtimes: vec!["python3.12".to_string()],
            },
            elapsed: Duration::from_millis(2346),
        };

        let rendered = render_publish_result(&outcome, false, false);
        insta::assert_snapshot!(rendered.trim_end(), @r"
        +--------------------------------------------------------------+
        | [OK] Layer published successfully                            |
        | Layer Version ARN:   arn:aws:lambda:us-west-2:1:layer:deps:3 |
        | Version:             3                                       |
        | Description:         shared deps                             |
        | Created:             2025-03-01T12:00:00.000+0000            |
        | Compatible Runtimes: python3.12                              |
        +--------------------------------------------------------------+
        Publish duration: 2.35s
        ");
    }

    #[test]
    fn header_shows_s3_source() {
        let plan = PublishPlan {
            region: "us-west-2".to_string(),
            layer_name: "deps".to_string(),
            description: String::new(),
            compatible_runtime: "python3.12".to_string(),
            source: LayerSource::S3Object {
                bucket: "layers".to_string(),
                key: "deps.zip".to_string(),
            },
        };

        let rendered = render_publish_header(&plan, false, false);
        assert_eq!(
            rendered,
            "[PUBLISH] Publishing Lambda Layer\nLayer: deps\nRegion: us-west-2\nSource: s3://layers/deps.zip\n"
        );
    }

    #[test]
    fn missing_fields_render_as_dash() {
        let outcome = PublishOutcome {
            layer: PublishedLayer::default(),
            elapsed: Duration::ZERO,
        };

        let rendered = render_publish_result(&outcome, false, false);
        assert!(rendered.contains("Layer Version ARN:   -"));
        assert!(rendered.contains("Publish duration: 0.00s"));
    }
}
