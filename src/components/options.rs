use std::time::Duration;

use crate::motion::FocusAnimation;

use super::cells::Glyph;
use super::policy::{InputRules, KeyboardType};

pub const DEFAULT_CODE_LENGTH: usize = 4;
pub const DEFAULT_CELL_SIZE: f32 = 48.0;
pub const DEFAULT_CELL_SPACING: f32 = 4.0;
pub const DEFAULT_MASK_DELAY_MS: u64 = 200;

#[derive(Clone, Debug)]
pub struct PinOptions {
    pub code_length: usize,
    pub cell_size: f32,
    pub cell_spacing: f32,
    pub placeholder: Option<Glyph>,
    pub password: bool,
    pub mask: Glyph,
    pub mask_delay_ms: u64,
    pub restrict_to_numbers: bool,
    pub auto_focus: bool,
    pub keyboard_type: KeyboardType,
    pub editable: bool,
    pub animation_focused: Option<FocusAnimation>,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            cell_size: DEFAULT_CELL_SIZE,
            cell_spacing: DEFAULT_CELL_SPACING,
            placeholder: Some(Glyph::from("")),
            password: false,
            mask: Glyph::from("*"),
            mask_delay_ms: DEFAULT_MASK_DELAY_MS,
            restrict_to_numbers: false,
            auto_focus: false,
            keyboard_type: KeyboardType::Numeric,
            editable: true,
            animation_focused: Some(FocusAnimation::pulse()),
        }
    }
}

impl PinOptions {
    pub fn rules(&self) -> InputRules {
        InputRules {
            code_length: self.code_length,
            restrict_to_numbers: self.restrict_to_numbers,
            password: self.password,
        }
    }

    pub fn mask_delay(&self) -> Duration {
        Duration::from_millis(self.mask_delay_ms)
    }

    pub fn container_width(&self) -> f32 {
        let cells = self.code_length as f32;
        self.cell_size * cells + self.cell_spacing * (cells - 1.0).max(0.0)
    }

    pub fn container_height(&self) -> f32 {
        self.cell_size
    }

    pub fn cell_margin(&self) -> f32 {
        self.cell_spacing / 2.0
    }
}
