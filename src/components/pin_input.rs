use std::rc::Rc;
use std::time::Duration;

use gpui::{
    AnyElement, App, Div, Entity, Focusable, InteractiveElement, IntoElement, Modifiers,
    MouseButton, ParentElement, RenderOnce, SharedString, Stateful, Styled, Window, div, px,
};

use crate::i18n::LayoutDirection;
use crate::id::PinId;
use crate::motion::{FocusAnimation, MotionConfig, MotionLevel};
use crate::provider::PinProvider;
use crate::style::{CellStyle, PinStyles, TextStyle};

use super::actions::{DeleteBackward, PIN_KEY_CONTEXT, PasteClipboard, ensure_pin_keybindings};
use super::cells::{CellContent, CellView, CellsInput, Glyph, derive_cells};
use super::options::PinOptions;
use super::pin_state::PinState;
use super::policy::{InputRules, KeyboardType, TextChange};
use super::transition::TransitionExt;

type TextHandler = Rc<dyn Fn(SharedString, &mut Window, &mut App)>;
type BackspaceHandler = Rc<dyn Fn(&mut Window, &mut App)>;
type InputPropsHook = Box<dyn FnOnce(Stateful<Div>) -> Stateful<Div>>;

/// Row of code cells over a single focusable input surface.
///
/// The value is controlled: the widget proposes edits through
/// `on_change_text` and renders whatever the owner passes to `value`.
#[derive(IntoElement)]
pub struct PinInput {
    state: Entity<PinState>,
    value: SharedString,
    options: PinOptions,
    styles: PinStyles,
    direction: Option<LayoutDirection>,
    motion: MotionConfig,
    style: gpui::StyleRefinement,
    on_change_text: Option<TextHandler>,
    on_fulfill: Option<TextHandler>,
    on_backspace: Option<BackspaceHandler>,
    input_props: Option<InputPropsHook>,
}

impl PinInput {
    pub fn new(state: &Entity<PinState>) -> Self {
        Self {
            state: state.clone(),
            value: SharedString::default(),
            options: PinOptions::default(),
            styles: PinStyles::default(),
            direction: None,
            motion: MotionConfig::default(),
            style: gpui::StyleRefinement::default(),
            on_change_text: None,
            on_fulfill: None,
            on_backspace: None,
            input_props: None,
        }
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    pub fn options(mut self, options: PinOptions) -> Self {
        self.options = options;
        self
    }

    pub fn code_length(mut self, value: usize) -> Self {
        self.options.code_length = value.max(1);
        self
    }

    pub fn cell_size(mut self, value: f32) -> Self {
        self.options.cell_size = value.max(0.0);
        self
    }

    pub fn cell_spacing(mut self, value: f32) -> Self {
        self.options.cell_spacing = value.max(0.0);
        self
    }

    pub fn placeholder(mut self, value: impl Into<Glyph>) -> Self {
        self.options.placeholder = Some(value.into());
        self
    }

    pub fn no_placeholder(mut self) -> Self {
        self.options.placeholder = None;
        self
    }

    pub fn password(mut self, value: bool) -> Self {
        self.options.password = value;
        self
    }

    pub fn mask(mut self, value: impl Into<Glyph>) -> Self {
        self.options.mask = value.into();
        self
    }

    pub fn mask_delay_ms(mut self, value: u64) -> Self {
        self.options.mask_delay_ms = value;
        self
    }

    pub fn restrict_to_numbers(mut self, value: bool) -> Self {
        self.options.restrict_to_numbers = value;
        self
    }

    pub fn auto_focus(mut self, value: bool) -> Self {
        self.options.auto_focus = value;
        self
    }

    pub fn keyboard_type(mut self, value: KeyboardType) -> Self {
        self.options.keyboard_type = value;
        self
    }

    pub fn editable(mut self, value: bool) -> Self {
        self.options.editable = value;
        self
    }

    pub fn animation_focused(mut self, value: impl Into<FocusAnimation>) -> Self {
        self.options.animation_focused = Some(value.into());
        self
    }

    pub fn no_animation_focused(mut self) -> Self {
        self.options.animation_focused = None;
        self
    }

    pub fn cell_style(mut self, value: CellStyle) -> Self {
        self.styles.cell = value;
        self
    }

    pub fn cell_style_focused(mut self, value: CellStyle) -> Self {
        self.styles.cell_focused = value;
        self
    }

    pub fn cell_style_filled(mut self, value: CellStyle) -> Self {
        self.styles.cell_filled = value;
        self
    }

    pub fn text_style(mut self, value: TextStyle) -> Self {
        self.styles.text = value;
        self
    }

    pub fn text_style_focused(mut self, value: TextStyle) -> Self {
        self.styles.text_focused = value;
        self
    }

    pub fn direction(mut self, value: LayoutDirection) -> Self {
        self.direction = Some(value);
        self
    }

    pub fn motion(mut self, value: MotionConfig) -> Self {
        self.motion = value;
        self
    }

    pub fn on_change_text(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change_text = Some(Rc::new(handler));
        self
    }

    pub fn on_fulfill(mut self, handler: impl Fn(SharedString, &mut Window, &mut App) + 'static) -> Self {
        self.on_fulfill = Some(Rc::new(handler));
        self
    }

    pub fn on_backspace(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_backspace = Some(Rc::new(handler));
        self
    }

    /// Configures the focusable input surface directly, after the widget has
    /// attached its own handlers.
    pub fn input_props(mut self, configure: impl FnOnce(Stateful<Div>) -> Stateful<Div> + 'static) -> Self {
        self.input_props = Some(Box::new(configure));
        self
    }
}

/// Edit pipeline shared by the keystroke, paste and backspace handlers. Edits
/// apply to the live value kept in `PinState`, not to the value this frame
/// was rendered with.
#[derive(Clone)]
struct InputBridge {
    state: Entity<PinState>,
    rules: InputRules,
    mask_delay: Duration,
    on_change_text: Option<TextHandler>,
    on_fulfill: Option<TextHandler>,
    on_backspace: Option<BackspaceHandler>,
}

impl InputBridge {
    fn emit(&self, change: TextChange, window: &mut Window, cx: &mut App) {
        let code = SharedString::from(change.code);
        if let Some(handler) = self.on_change_text.as_ref() {
            (handler)(code.clone(), window, cx);
        }
        if change.fulfilled
            && let Some(handler) = self.on_fulfill.as_ref()
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(code_length = self.rules.code_length, "pin code fulfilled");
            (handler)(code, window, cx);
        }
        window.refresh();
    }

    fn backspace(&self, window: &mut Window, cx: &mut App) {
        if self.state.read(cx).session().key_press("backspace") {
            #[cfg(feature = "tracing")]
            tracing::trace!("pin backspace on empty value");
            if let Some(handler) = self.on_backspace.as_ref() {
                (handler)(window, cx);
            }
            return;
        }

        let (rules, mask_delay) = (self.rules, self.mask_delay);
        let change = self.state.update(cx, |state, cx| {
            state.delete_backward(rules, mask_delay, window, cx)
        });
        if let Some(change) = change {
            self.emit(change, window, cx);
        }
    }

    fn insert(&self, text: &str, window: &mut Window, cx: &mut App) {
        let (rules, mask_delay) = (self.rules, self.mask_delay);
        let change = self.state.update(cx, |state, cx| {
            state.insert_text(text, rules, mask_delay, window, cx)
        });
        if let Some(change) = change {
            self.emit(change, window, cx);
        }
    }
}

/// Keystrokes carrying a command modifier belong to shortcuts, not to the code.
fn is_plain_keystroke(modifiers: &Modifiers) -> bool {
    !(modifiers.control || modifiers.platform || modifiers.function || modifiers.alt)
}

/// Character a keystroke types, preferring the composed `key_char` over the
/// key name. Named keys such as `backspace` type nothing.
fn typed_char(key: &str, key_char: Option<&str>, keyboard: KeyboardType) -> Option<char> {
    key_char
        .and_then(single_char)
        .or_else(|| single_char(key))
        .filter(|ch| keyboard.accepts(*ch))
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

fn render_cell(
    cell: &CellView,
    options: &PinOptions,
    styles: &PinStyles,
    focus_animation: Option<FocusAnimation>,
    id: &PinId,
) -> AnyElement {
    let size = px(options.cell_size);
    let mut node = div()
        .flex()
        .flex_row()
        .items_center()
        .justify_center()
        .flex_none()
        .w(size)
        .h(size)
        .mx(px(options.cell_margin()));
    node = styles.cell_for(cell.current, cell.filled).apply(node);

    node = match &cell.content {
        CellContent::Text(text) => {
            node.child(styles.text_for(cell.current).apply(div()).child(text.clone()))
        }
        CellContent::MaskElement => node.children(options.mask.render_element()),
        CellContent::PlaceholderElement => node.children(
            options
                .placeholder
                .as_ref()
                .and_then(Glyph::render_element),
        ),
        CellContent::Empty => node,
    };

    match focus_animation {
        Some(animation) if cell.animated => node
            .with_focus_animation(id.slot_index("cell-focus", cell.index), animation)
            .into_any_element(),
        _ => node.into_any_element(),
    }
}

impl RenderOnce for PinInput {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        ensure_pin_keybindings(cx);

        let theme = PinProvider::theme(cx);
        let styles = theme.styles.overridden_by(&self.styles);
        let direction = self
            .direction
            .unwrap_or_else(|| PinProvider::direction(cx));
        let options = self.options;
        let value = self.value;

        #[cfg(feature = "tracing")]
        if let Err(error) = crate::error::check_value(&value, options.code_length) {
            tracing::warn!(%error, "pin value does not fit its cells");
        }

        let shake_config = self.motion.shake;
        let first_render = self.state.update(cx, |state, _| {
            state.sync(&value, shake_config);
            state.mount()
        });
        let focus_handle = self.state.read(cx).focus_handle(cx);
        if first_render && options.auto_focus && options.editable {
            window.focus(&focus_handle, cx);
        }

        let animations_enabled = self.motion.level != MotionLevel::None;
        let focus_animation = options
            .animation_focused
            .filter(|animation| animations_enabled && animation.is_visible());

        let state = self.state.read(cx);
        let id = state.id().clone();
        let shake = state.session().shake();
        let cells = derive_cells(CellsInput {
            value: &value,
            code_length: options.code_length,
            focused: state.is_focused(),
            mask_delay: state.mask_delay(),
            password: options.password,
            mask: &options.mask,
            placeholder: options.placeholder.as_ref(),
            focus_animation: focus_animation.is_some(),
        });

        let mut row = div().flex().items_center().h_full();
        row = if direction.is_rtl() {
            row.flex_row_reverse()
        } else {
            row.flex_row()
        };
        for cell in &cells {
            row = row.child(render_cell(cell, &options, &styles, focus_animation, &id));
        }

        let mut root = div()
            .id(id.slot("root"))
            .key_context(PIN_KEY_CONTEXT)
            .track_focus(&focus_handle)
            .relative()
            .flex()
            .flex_row()
            .justify_center()
            .w(px(options.container_width()))
            .h(px(options.container_height()));
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);

        if options.editable {
            let bridge = InputBridge {
                state: self.state.clone(),
                rules: options.rules(),
                mask_delay: options.mask_delay(),
                on_change_text: self.on_change_text.clone(),
                on_fulfill: self.on_fulfill.clone(),
                on_backspace: self.on_backspace.clone(),
            };
            let keyboard = options.keyboard_type;

            root = root
                .cursor_text()
                .on_mouse_down(MouseButton::Left, {
                    let focus_handle = focus_handle.clone();
                    move |_, window, cx| {
                        window.focus(&focus_handle, cx);
                    }
                })
                .on_action({
                    let bridge = bridge.clone();
                    move |_: &DeleteBackward, window, cx| {
                        bridge.backspace(window, cx);
                    }
                })
                .on_action({
                    let bridge = bridge.clone();
                    move |_: &PasteClipboard, window, cx| {
                        let Some(item) = cx.read_from_clipboard() else {
                            return;
                        };
                        let Some(pasted) = item.text() else {
                            return;
                        };
                        let pasted = pasted.replace(['\r', '\n'], "");
                        bridge.insert(&pasted, window, cx);
                    }
                })
                .on_key_down(move |event, window, cx| {
                    let keystroke = &event.keystroke;
                    if !is_plain_keystroke(&keystroke.modifiers) {
                        return;
                    }
                    let Some(ch) =
                        typed_char(&keystroke.key, keystroke.key_char.as_deref(), keyboard)
                    else {
                        return;
                    };
                    bridge.insert(ch.encode_utf8(&mut [0; 4]), window, cx);
                    cx.stop_propagation();
                });
        } else {
            root = root.cursor_default();
        }

        if let Some(configure) = self.input_props {
            root = configure(root);
        }

        let root = root.child(row);
        if shake.is_active() && animations_enabled {
            root.with_shake(
                id.slot_index("shake", shake.generation()),
                shake.duration_ms(),
                self.motion.shake,
            )
            .into_any_element()
        } else {
            root.into_any_element()
        }
    }
}

impl gpui::Styled for PinInput {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
