#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub enum Locale {
    #[default]
    System,
    Tag(String),
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("system") {
            return Self::System;
        }
        Self::Tag(value.trim().to_string())
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl Locale {
    pub fn requested_tag(&self) -> Option<String> {
        match self {
            Locale::System => system_locale(),
            Locale::Tag(tag) => Some(tag.clone()),
        }
    }

    pub fn direction(&self) -> LayoutDirection {
        self.requested_tag()
            .map(|tag| LayoutDirection::from_locale_tag(&tag))
            .unwrap_or_default()
    }
}

#[cfg(feature = "i18n")]
fn system_locale() -> Option<String> {
    sys_locale::get_locale()
}

#[cfg(not(feature = "i18n"))]
fn system_locale() -> Option<String> {
    None
}

/// Direction of the cell row. Cell content is never mirrored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "he", "iw", "ks", "ku", "ps", "sd", "ug", "ur", "yi",
];

impl LayoutDirection {
    pub fn from_locale_tag(tag: &str) -> Self {
        let normalized = normalize_locale_tag(tag);
        let language = normalized.split('-').next().unwrap_or_default();
        if RTL_LANGUAGES.contains(&language) {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }
}

fn normalize_locale_tag(tag: &str) -> String {
    let trimmed = tag.trim();
    let without_encoding = trimmed.split('.').next().unwrap_or(trimmed);
    let without_variant = without_encoding
        .split('@')
        .next()
        .unwrap_or(without_encoding);
    without_variant
        .replace('_', "-")
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
