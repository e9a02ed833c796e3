use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error: message, optional causes, optional fix hint.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    causes: Vec<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
            fix: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        b.add_empty();
        b.add_line(self.message.clone());

        for cause in &self.causes {
            b.add_line(format!(
                "{} {}",
                Icon::Arrow.render(supports_unicode),
                cause
            ));
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::r#box::strip_ansi;

    #[test]
    fn renders_message_and_fix() {
        let rendered = ErrorBlock::new("requirements file not found: req.txt")
            .with_fix("Pass an existing file with -f")
            .render(false, false);

        assert!(rendered.contains("[FAIL] ERROR"));
        assert!(rendered.contains("requirements file not found: req.txt"));
        assert!(rendered.contains("FIX: Pass an existing file with -f"));
    }

    #[test]
    fn renders_causes_with_arrow() {
        let rendered = ErrorBlock::new("dependency installation failed")
            .with_cause("exit code 1")
            .render(false, true);

        assert!(rendered.contains("↳ exit code 1"));
    }

    #[test]
    fn colored_label_keeps_plain_layout() {
        let block = ErrorBlock::new("upload failed").with_fix("Check the bucket name");

        let colored = block.render(true, false);
        assert!(colored.contains("\u{1b}["));
        assert_eq!(strip_ansi(&colored), block.render(false, false));
    }
}
