use std::sync::{Arc, OnceLock};

use gpui::hsla;

use crate::style::{CellStyle, PinStyles, TextStyle};

/// Process-wide default look of the pin cells.
#[derive(Clone, Debug, PartialEq)]
pub struct PinTheme {
    pub styles: PinStyles,
}

impl Default for PinTheme {
    fn default() -> Self {
        let gray = hsla(0.0, 0.0, 0.5, 1.0);
        let black = gpui::black();
        Self {
            styles: PinStyles {
                cell: CellStyle::new().border_color(gray).border_width(1.0),
                cell_focused: CellStyle::new().border_color(black).border_width(2.0),
                cell_filled: CellStyle::new(),
                text: TextStyle::new().color(gray).size(24.0),
                text_focused: TextStyle::new().color(black),
            },
        }
    }
}

impl PinTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles(mut self, configure: impl FnOnce(PinStyles) -> PinStyles) -> Self {
        self.styles = configure(self.styles);
        self
    }

    pub fn shared_default() -> Arc<PinTheme> {
        static DEFAULT: OnceLock<Arc<PinTheme>> = OnceLock::new();
        DEFAULT.get_or_init(|| Arc::new(PinTheme::default())).clone()
    }
}
