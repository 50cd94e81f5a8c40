/// Platform keyboard the input surface emulates. It decides which typed
/// characters are offered to the field; pasted text is not filtered by it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum KeyboardType {
    Default,
    #[default]
    Numeric,
    NumberPad,
    Phone,
    Text,
}

impl KeyboardType {
    pub fn accepts(self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self {
            KeyboardType::Numeric | KeyboardType::NumberPad => ch.is_ascii_digit(),
            KeyboardType::Phone => ch.is_ascii_digit() || matches!(ch, '+' | '*' | '#'),
            KeyboardType::Default | KeyboardType::Text => true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InputRules {
    pub code_length: usize,
    pub restrict_to_numbers: bool,
    pub password: bool,
}

/// Result of running a proposed text through the input policy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextChange {
    pub code: String,
    pub fulfilled: bool,
    pub inserted: bool,
}

pub fn filter_code(raw: &str, restrict_to_numbers: bool) -> String {
    if restrict_to_numbers {
        raw.chars().filter(|ch| ch.is_ascii_digit()).collect()
    } else {
        raw.to_string()
    }
}

/// Applies the input policy to text proposed by the input surface.
///
/// `inserted` is only set for password fields, where it arms the mask delay.
pub fn evaluate_text_change(previous: &str, raw: &str, rules: InputRules) -> TextChange {
    let code = filter_code(raw, rules.restrict_to_numbers);
    let len = code.chars().count();
    TextChange {
        fulfilled: len == rules.code_length,
        inserted: rules.password && len > previous.chars().count(),
        code,
    }
}

/// Text the input surface proposes when `text` is typed or pasted at the end
/// of `value`. The field holds at most `max_length` characters; `None` means
/// the edit was rejected and no change event fires.
pub fn proposed_insert(value: &str, text: &str, max_length: usize) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let next = value
        .chars()
        .chain(text.chars())
        .take(max_length)
        .collect::<String>();
    (next != value).then_some(next)
}

pub fn proposed_delete(value: &str) -> Option<String> {
    let mut chars = value.chars();
    chars.next_back()?;
    Some(chars.as_str().to_string())
}

pub fn is_backspace(key: &str) -> bool {
    key.eq_ignore_ascii_case("backspace")
}

/// Backspace against an empty value. Owners use this to move focus to a
/// previous field.
pub fn is_backspace_on_empty(key: &str, value: &str) -> bool {
    is_backspace(key) && value.is_empty()
}
