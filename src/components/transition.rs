use std::time::Duration;

use gpui::{Animation, AnimationElement, AnimationExt, ElementId, Styled, px};

use crate::motion::{Easing, FocusAnimation, ShakeConfig, TransitionPreset};

pub trait TransitionExt: Sized + AnimationExt + Styled + 'static {
    /// Loops `animation` for as long as the element keeps its id.
    fn with_focus_animation(
        self,
        id: impl Into<ElementId>,
        animation: FocusAnimation,
    ) -> AnimationElement<Self> {
        let looped = Animation::new(Duration::from_millis(u64::from(animation.duration_ms)))
            .repeat()
            .with_easing(easing_fn(animation.easing));

        self.with_animation(id, looped, move |this, delta| {
            apply_preset(this, animation.preset, animation.offset_px, delta)
        })
    }

    /// Plays one shake. A new id restarts the animation.
    fn with_shake(
        self,
        id: impl Into<ElementId>,
        duration_ms: u64,
        shake: ShakeConfig,
    ) -> AnimationElement<Self> {
        let once = Animation::new(Duration::from_millis(duration_ms.max(1)))
            .with_easing(easing_fn(Easing::Linear));

        self.with_animation(id, once, move |this, delta| {
            apply_preset(this, TransitionPreset::Shake, shake.offset_px, delta)
        })
    }
}

impl<E> TransitionExt for E where E: Sized + AnimationExt + Styled + 'static {}

fn easing_fn(easing: Easing) -> impl Fn(f32) -> f32 {
    move |delta| match easing {
        Easing::Linear => gpui::linear(delta),
        Easing::EaseIn => gpui::quadratic(delta),
        Easing::EaseOut => gpui::ease_out_quint()(delta),
        Easing::EaseInOut => gpui::ease_in_out(delta),
    }
}

fn apply_preset<E: Styled>(element: E, preset: TransitionPreset, offset_px: i16, progress: f32) -> E {
    let progress = progress.clamp(0.0, 1.0);
    let offset = offset_px as f32;

    match preset {
        TransitionPreset::None => element,
        TransitionPreset::Fade => element.opacity(progress),
        TransitionPreset::Flash => {
            let visible = (progress * 2.0).fract() < 0.5;
            element.opacity(if visible { 1.0 } else { 0.2 })
        }
        TransitionPreset::Pop => {
            let wave = (progress * std::f32::consts::PI).sin().abs();
            element.mt(px(-wave * offset * 0.25))
        }
        TransitionPreset::Bounce => {
            let wave = (progress * std::f32::consts::PI * 2.0).sin().abs();
            element.mt(px(-(offset * 0.2) * wave))
        }
        TransitionPreset::Pulse => {
            let wave = (progress * std::f32::consts::PI * 2.0).sin().abs();
            element.opacity(0.35 + (0.65 * wave))
        }
        TransitionPreset::Shake => {
            let damping = 1.0 - progress;
            let wave = (progress * std::f32::consts::PI * 6.0).sin();
            element.ml(px(offset * 0.2 * wave * damping))
        }
    }
}
