use std::sync::Once;

use gpui::{App, KeyBinding, actions};

pub const PIN_KEY_CONTEXT: &str = "smooth_pin";

actions!(smooth_pin, [DeleteBackward, PasteClipboard]);

static BINDINGS_INIT: Once = Once::new();

pub fn ensure_pin_keybindings(cx: &mut App) {
    BINDINGS_INIT.call_once(|| {
        cx.bind_keys(pin_bindings());
    });
}

fn pin_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("backspace", DeleteBackward, Some(PIN_KEY_CONTEXT)),
        KeyBinding::new("cmd-v", PasteClipboard, Some(PIN_KEY_CONTEXT)),
        KeyBinding::new("ctrl-v", PasteClipboard, Some(PIN_KEY_CONTEXT)),
    ]
}
