pub use crate::components::{
    Glyph, KeyboardType, PinInput, PinOptions, PinState, TransitionExt,
};
pub use crate::error::{PinError, PinResult, check_value};
pub use crate::i18n::{LayoutDirection, Locale};
pub use crate::id::PinId;
pub use crate::motion::{
    Easing, FocusAnimation, MotionConfig, MotionLevel, ShakeConfig, TransitionPreset,
};
pub use crate::provider::PinProvider;
pub use crate::style::{CellStyle, PinStyles, TextStyle};
pub use crate::theme::PinTheme;
