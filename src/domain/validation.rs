use std::fmt;

use crate::domain::encoding::EncodingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidUtf8(EncodingError),
    BodyTooLong { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUtf8(err) => write!(f, "{err}"),
            Self::BodyTooLong { max, actual } => write!(
                f,
                "Message body must have {max} or fewer characters. \
                 Cannot send message with {actual} characters."
            ),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8(err) => Some(err),
            Self::BodyTooLong { .. } => None,
        }
    }
}

impl From<EncodingError> for ValidationError {
    fn from(value: EncodingError) -> Self {
        Self::InvalidUtf8(value)
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationError;
    use crate::domain::encoding::utf16_units;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::BodyTooLong {
            max: 1600,
            actual: 1601,
        };
        assert_eq!(
            err.to_string(),
            "Message body must have 1600 or fewer characters. \
             Cannot send message with 1601 characters."
        );

        let encoding = utf16_units(b"ok\xff").unwrap_err();
        let err = ValidationError::from(encoding.clone());
        assert_eq!(err.to_string(), encoding.to_string());
    }
}
