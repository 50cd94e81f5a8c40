use std::sync::{Arc, OnceLock};

use crate::i18n::{LayoutDirection, Locale};
use crate::theme::PinTheme;

/// Startup configuration shared by every pin input in the application.
#[derive(Default)]
pub struct PinProvider {
    theme: Option<PinTheme>,
    locale: Option<Locale>,
}

#[derive(Clone)]
struct ProviderGlobal {
    theme: Arc<PinTheme>,
    direction: LayoutDirection,
}

impl gpui::Global for ProviderGlobal {}

impl PinProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(mut self, configure: impl FnOnce(PinTheme) -> PinTheme) -> Self {
        let current = self.theme.take().unwrap_or_default();
        self.theme = Some(configure(current));
        self
    }

    pub fn set_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn init(self, cx: &mut gpui::App) {
        if cx.has_global::<ProviderGlobal>() {
            let global = cx.global_mut::<ProviderGlobal>();
            if let Some(theme) = self.theme {
                global.theme = Arc::new(theme);
            }
            if let Some(locale) = self.locale {
                global.direction = locale.direction();
            }
            return;
        }

        cx.set_global(ProviderGlobal {
            theme: self
                .theme
                .map(Arc::new)
                .unwrap_or_else(PinTheme::shared_default),
            direction: self.locale.unwrap_or_default().direction(),
        });
    }

    pub fn theme(cx: &gpui::App) -> Arc<PinTheme> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.theme.clone())
            .unwrap_or_else(PinTheme::shared_default)
    }

    pub fn direction(cx: &gpui::App) -> LayoutDirection {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.direction)
            .unwrap_or_else(system_direction)
    }
}

fn system_direction() -> LayoutDirection {
    static SYSTEM: OnceLock<LayoutDirection> = OnceLock::new();
    *SYSTEM.get_or_init(|| Locale::System.direction())
}
