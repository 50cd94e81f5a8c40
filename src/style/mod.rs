use gpui::{FontWeight, Hsla, Styled, px};

/// Visual properties of a single cell box.
///
/// Every field is optional so that styles can be layered: `refined` copies
/// each property the layer sets and keeps the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellStyle {
    pub border_color: Option<Hsla>,
    pub border_width: Option<f32>,
    pub background: Option<Hsla>,
    pub radius: Option<f32>,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border_color(mut self, value: impl Into<Hsla>) -> Self {
        self.border_color = Some(value.into());
        self
    }

    pub fn border_width(mut self, value: f32) -> Self {
        self.border_width = Some(value.max(0.0));
        self
    }

    pub fn background(mut self, value: impl Into<Hsla>) -> Self {
        self.background = Some(value.into());
        self
    }

    pub fn radius(mut self, value: f32) -> Self {
        self.radius = Some(value.max(0.0));
        self
    }

    pub fn refined(mut self, layer: &CellStyle) -> Self {
        if layer.border_color.is_some() {
            self.border_color = layer.border_color;
        }
        if layer.border_width.is_some() {
            self.border_width = layer.border_width;
        }
        if layer.background.is_some() {
            self.background = layer.background;
        }
        if layer.radius.is_some() {
            self.radius = layer.radius;
        }
        self
    }

    pub fn apply<E: Styled>(&self, mut element: E) -> E {
        if let Some(width) = self.border_width {
            element = element.border(px(width));
        }
        if let Some(color) = self.border_color {
            element = element.border_color(color);
        }
        if let Some(background) = self.background {
            element = element.bg(background);
        }
        if let Some(radius) = self.radius {
            element = element.rounded(px(radius));
        }
        element
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<Hsla>,
    pub size: Option<f32>,
    pub weight: Option<FontWeight>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, value: impl Into<Hsla>) -> Self {
        self.color = Some(value.into());
        self
    }

    pub fn size(mut self, value: f32) -> Self {
        self.size = Some(value.max(1.0));
        self
    }

    pub fn weight(mut self, value: FontWeight) -> Self {
        self.weight = Some(value);
        self
    }

    pub fn refined(mut self, layer: &TextStyle) -> Self {
        if layer.color.is_some() {
            self.color = layer.color;
        }
        if layer.size.is_some() {
            self.size = layer.size;
        }
        if layer.weight.is_some() {
            self.weight = layer.weight;
        }
        self
    }

    pub fn apply<E: Styled>(&self, mut element: E) -> E {
        if let Some(color) = self.color {
            element = element.text_color(color);
        }
        if let Some(size) = self.size {
            element = element.text_size(px(size));
        }
        if let Some(weight) = self.weight {
            element = element.font_weight(weight);
        }
        element
    }
}

/// Style layers for one render pass, resolved against the active theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PinStyles {
    pub cell: CellStyle,
    pub cell_focused: CellStyle,
    pub cell_filled: CellStyle,
    pub text: TextStyle,
    pub text_focused: TextStyle,
}

impl PinStyles {
    /// Base cell style, then the focused layer for the current cell, then the
    /// filled layer for filled cells.
    pub fn cell_for(&self, current: bool, filled: bool) -> CellStyle {
        let mut style = self.cell;
        if current {
            style = style.refined(&self.cell_focused);
        }
        if filled {
            style = style.refined(&self.cell_filled);
        }
        style
    }

    pub fn text_for(&self, current: bool) -> TextStyle {
        if current {
            self.text.refined(&self.text_focused)
        } else {
            self.text
        }
    }

    /// Layers caller overrides on top of these styles, slot by slot.
    pub fn overridden_by(&self, overrides: &PinStyles) -> PinStyles {
        PinStyles {
            cell: self.cell.refined(&overrides.cell),
            cell_focused: self.cell_focused.refined(&overrides.cell_focused),
            cell_filled: self.cell_filled.refined(&overrides.cell_filled),
            text: self.text.refined(&overrides.text),
            text_focused: self.text_focused.refined(&overrides.text_focused),
        }
    }
}
