pub mod components;
pub mod error;
pub mod i18n;
pub mod id;
pub mod motion;
pub mod prelude;
pub mod provider;
pub mod style;
pub mod theme;

pub use components::{Glyph, KeyboardType, PinInput, PinOptions, PinState};
pub use error::{PinError, PinResult};
pub use i18n::{LayoutDirection, Locale};
pub use provider::PinProvider;
pub use theme::PinTheme;
