use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let set = if supports_unicode {
            [
                theme::borders::TOP_LEFT,
                theme::borders::TOP_RIGHT,
                theme::borders::BOTTOM_LEFT,
                theme::borders::BOTTOM_RIGHT,
                theme::borders::HORIZONTAL,
                theme::borders::VERTICAL,
            ]
        } else {
            [
                theme::borders_ascii::TOP_LEFT,
                theme::borders_ascii::TOP_RIGHT,
                theme::borders_ascii::BOTTOM_LEFT,
                theme::borders_ascii::BOTTOM_RIGHT,
                theme::borders_ascii::HORIZONTAL,
                theme::borders_ascii::VERTICAL,
            ]
        };
        set[*self as usize]
    }
}
