mod actions;
mod cells;
mod options;
mod pin_input;
mod pin_state;
mod policy;
mod session;
mod transition;

#[cfg(test)]
mod test_state_logic;

pub use actions::{DeleteBackward, PIN_KEY_CONTEXT, PasteClipboard, ensure_pin_keybindings};
pub use cells::{CellContent, CellView, CellsInput, Glyph, derive_cells};
pub use options::{
    DEFAULT_CELL_SIZE, DEFAULT_CELL_SPACING, DEFAULT_CODE_LENGTH, DEFAULT_MASK_DELAY_MS, PinOptions,
};
pub use pin_input::PinInput;
pub use pin_state::PinState;
pub use policy::{
    InputRules, KeyboardType, TextChange, evaluate_text_change, filter_code, is_backspace,
    is_backspace_on_empty, proposed_delete, proposed_insert,
};
pub use session::{
    AcceptedChange, MaskDelay, MaskTicket, PinSession, ShakeState, ShakeTicket,
};
pub use transition::TransitionExt;
