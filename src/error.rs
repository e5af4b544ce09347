use std::num::IntErrorKind;
use thiserror::Error;

/// Failure to turn input text into a sequence of integers.
///
/// `position` is the 0-based index of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid integer {token:?} at token {position}")]
    InvalidToken { token: String, position: usize },

    #[error("integer {token:?} at token {position} is out of range")]
    OutOfRange { token: String, position: usize },
}

impl ParseError {
    pub(crate) fn from_int_error(
        err: &std::num::ParseIntError,
        token: &str,
        position: usize,
    ) -> Self {
        let token = token.to_string();
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseError::OutOfRange { token, position }
            }
            _ => ParseError::InvalidToken { token, position },
        }
    }

    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidToken { token, .. } | ParseError::OutOfRange { token, .. } => token,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::InvalidToken { position, .. } | ParseError::OutOfRange { position, .. } => {
                *position
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_maps_to_out_of_range() {
        let err = "99999999999999999999".parse::<i64>().unwrap_err();
        let parsed = ParseError::from_int_error(&err, "99999999999999999999", 3);
        assert!(matches!(parsed, ParseError::OutOfRange { position: 3, .. }));
    }

    #[test]
    fn test_garbage_maps_to_invalid_token() {
        let err = "1.5".parse::<i64>().unwrap_err();
        let parsed = ParseError::from_int_error(&err, "1.5", 0);
        assert_eq!(parsed.token(), "1.5");
        assert_eq!(parsed.position(), 0);
        assert!(matches!(parsed, ParseError::InvalidToken { .. }));
    }

    #[test]
    fn test_display_names_token() {
        let err = ParseError::InvalidToken {
            token: "abc".to_string(),
            position: 2,
        };
        assert_eq!(err.to_string(), "invalid integer \"abc\" at token 2");
    }
}
