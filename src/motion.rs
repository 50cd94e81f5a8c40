use std::str::FromStr;

use crate::error::PinError;

pub const FOCUS_ANIMATION_DURATION_MS: u16 = 500;
pub const SHAKE_DURATION_MS: u16 = 650;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MotionLevel {
    Full,
    None,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionPreset {
    None,
    Fade,
    Flash,
    Pop,
    Bounce,
    Pulse,
    Shake,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Animation played by the current cell for as long as it stays current.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FocusAnimation {
    pub preset: TransitionPreset,
    pub duration_ms: u16,
    pub offset_px: i16,
    pub easing: Easing,
}

impl Default for FocusAnimation {
    fn default() -> Self {
        Self::pulse()
    }
}

impl FocusAnimation {
    pub fn new(preset: TransitionPreset) -> Self {
        Self {
            preset,
            duration_ms: FOCUS_ANIMATION_DURATION_MS,
            offset_px: 8,
            easing: Easing::EaseInOut,
        }
    }

    pub fn pulse() -> Self {
        Self::new(TransitionPreset::Pulse)
    }

    pub fn duration_ms(mut self, duration_ms: u16) -> Self {
        self.duration_ms = duration_ms.max(1);
        self
    }

    pub fn offset_px(mut self, offset_px: i16) -> Self {
        self.offset_px = offset_px;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.preset != TransitionPreset::None
    }
}

impl FromStr for FocusAnimation {
    type Err = PinError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let preset = match name.trim().to_ascii_lowercase().as_str() {
            "pulse" | "heartbeat" => TransitionPreset::Pulse,
            "flash" => TransitionPreset::Flash,
            "fade" | "fadein" => TransitionPreset::Fade,
            "bounce" => TransitionPreset::Bounce,
            "pop" | "tada" | "rubberband" => TransitionPreset::Pop,
            "shake" | "wobble" => TransitionPreset::Shake,
            "none" => TransitionPreset::None,
            _ => return Err(PinError::UnknownAnimation(name.to_string())),
        };
        Ok(Self::new(preset))
    }
}

impl From<TransitionPreset> for FocusAnimation {
    fn from(preset: TransitionPreset) -> Self {
        Self::new(preset)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ShakeConfig {
    pub duration_ms: u16,
    pub offset_px: i16,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            duration_ms: SHAKE_DURATION_MS,
            offset_px: 40,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MotionConfig {
    pub level: MotionLevel,
    pub shake: ShakeConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            level: MotionLevel::Full,
            shake: ShakeConfig::default(),
        }
    }
}

impl MotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: MotionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn shake(mut self, shake: ShakeConfig) -> Self {
        self.shake = shake;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_animation_names_case_insensitively() {
        let parsed = "Pulse".parse::<FocusAnimation>().unwrap();
        assert_eq!(parsed.preset, TransitionPreset::Pulse);
        assert_eq!(parsed.duration_ms, FOCUS_ANIMATION_DURATION_MS);

        let parsed = "fadeIn".parse::<FocusAnimation>().unwrap();
        assert_eq!(parsed.preset, TransitionPreset::Fade);
    }

    #[test]
    fn unknown_animation_name_is_an_error() {
        let error = "spin".parse::<FocusAnimation>().unwrap_err();
        assert_eq!(error, PinError::UnknownAnimation("spin".to_string()));
    }

    #[test]
    fn none_preset_is_not_visible() {
        assert!(!FocusAnimation::new(TransitionPreset::None).is_visible());
        assert!(FocusAnimation::default().is_visible());
    }

    #[test]
    fn duration_is_never_zero() {
        assert_eq!(FocusAnimation::pulse().duration_ms(0).duration_ms, 1);
    }
}
