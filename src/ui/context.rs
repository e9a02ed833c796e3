use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use lambda_layer_maker::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Prompts need a terminal on stdin; JSON mode still prompts on stderr.
    pub fn can_prompt(&self) -> bool {
        use is_terminal::IsTerminal;
        std::io::stdin().is_terminal()
    }
}
