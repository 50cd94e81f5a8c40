use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PinError {
    UnknownAnimation(String),
    ValueTooLong { len: usize, code_length: usize },
}

impl Display for PinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PinError::UnknownAnimation(name) => write!(f, "unknown focus animation `{name}`"),
            PinError::ValueTooLong { len, code_length } => write!(
                f,
                "value holds {len} characters but the code length is {code_length}"
            ),
        }
    }
}

impl std::error::Error for PinError {}

pub type PinResult<T> = Result<T, PinError>;

/// Checks the owner-side contract that a controlled value fits its cells.
///
/// The widget itself never rejects such a value; characters past the last
/// cell are simply not rendered.
pub fn check_value(value: &str, code_length: usize) -> PinResult<()> {
    let len = value.chars().count();
    if len > code_length {
        return Err(PinError::ValueTooLong { len, code_length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_within_code_length_passes() {
        assert_eq!(check_value("", 4), Ok(()));
        assert_eq!(check_value("1234", 4), Ok(()));
    }

    #[test]
    fn value_longer_than_code_length_is_reported() {
        let error = check_value("12345", 4).unwrap_err();
        assert_eq!(
            error,
            PinError::ValueTooLong {
                len: 5,
                code_length: 4
            }
        );
        assert_eq!(
            error.to_string(),
            "value holds 5 characters but the code length is 4"
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(check_value("ééé", 3), Ok(()));
    }
}
