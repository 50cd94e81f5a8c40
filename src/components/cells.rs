use std::fmt;
use std::rc::Rc;

use gpui::{AnyElement, SharedString};

type GlyphRenderer = Rc<dyn Fn() -> AnyElement>;

/// Content for masked or empty cells: plain text or a custom element.
#[derive(Clone)]
pub enum Glyph {
    Text(SharedString),
    Element(GlyphRenderer),
}

impl Glyph {
    pub fn element(render: impl Fn() -> AnyElement + 'static) -> Self {
        Self::Element(Rc::new(render))
    }

    pub fn text(&self) -> Option<&SharedString> {
        match self {
            Glyph::Text(text) => Some(text),
            Glyph::Element(_) => None,
        }
    }

    pub fn render_element(&self) -> Option<AnyElement> {
        match self {
            Glyph::Text(_) => None,
            Glyph::Element(render) => Some(render()),
        }
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Glyph::Element(_) => f.write_str("Element(..)"),
        }
    }
}

impl From<&'static str> for Glyph {
    fn from(value: &'static str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Glyph {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<SharedString> for Glyph {
    fn from(value: SharedString) -> Self {
        Self::Text(value)
    }
}

impl From<char> for Glyph {
    fn from(value: char) -> Self {
        Self::Text(value.to_string().into())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CellContent {
    Text(SharedString),
    MaskElement,
    PlaceholderElement,
    Empty,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellView {
    pub index: usize,
    pub filled: bool,
    pub current: bool,
    pub last: bool,
    pub show_mask: bool,
    pub animated: bool,
    pub content: CellContent,
}

#[derive(Clone, Copy, Debug)]
pub struct CellsInput<'a> {
    pub value: &'a str,
    pub code_length: usize,
    pub focused: bool,
    pub mask_delay: bool,
    pub password: bool,
    pub mask: &'a Glyph,
    pub placeholder: Option<&'a Glyph>,
    pub focus_animation: bool,
}

pub fn derive_cells(input: CellsInput<'_>) -> Vec<CellView> {
    let chars = input.value.chars().collect::<Vec<_>>();
    (0..input.code_length)
        .map(|index| derive_cell(index, &chars, &input))
        .collect()
}

fn derive_cell(index: usize, chars: &[char], input: &CellsInput<'_>) -> CellView {
    let len = chars.len();
    let filled = index < len;
    let current = input.focused && index == len;
    let last = len > 0 && index == len - 1;
    let show_mask = filled && input.password && (!input.mask_delay || !last);

    let mut text = None;
    if filled || input.placeholder.is_some() {
        if show_mask && let Some(mask) = input.mask.text() {
            text = Some(mask.clone());
        } else if !filled && let Some(placeholder) = input.placeholder.and_then(Glyph::text) {
            text = Some(placeholder.clone());
        } else if let Some(ch) = chars.get(index) {
            text = Some(ch.to_string().into());
        }
    }

    let mask_element = show_mask && input.mask.text().is_none();
    let placeholder_element = input
        .placeholder
        .is_some_and(|placeholder| placeholder.text().is_none());

    let content = match text {
        Some(_) if mask_element => CellContent::MaskElement,
        Some(text) => CellContent::Text(text),
        None if placeholder_element => CellContent::PlaceholderElement,
        None => CellContent::Empty,
    };

    CellView {
        index,
        filled,
        current,
        last,
        show_mask,
        animated: current && input.focus_animation,
        content,
    }
}
