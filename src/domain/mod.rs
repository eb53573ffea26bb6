//! Domain layer: strong types with validation and invariants (no I/O).

mod encoding;
mod request;
mod response;
mod validation;
mod value;

pub use encoding::{EncodingError, utf16_units};
pub use request::MessageRequest;
pub use response::{ApiErrorBody, MessageResource, ProviderResponse};
pub use validation::ValidationError;
pub use value::{AccountSid, AuthToken, Credentials, MAX_BODY_UNITS, MessageBody};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_at_limit_passes() {
        let body = MessageBody::parse("a".repeat(MAX_BODY_UNITS).as_bytes()).unwrap();
        assert_eq!(body.utf16_len(), 1600);
    }

    #[test]
    fn body_over_limit_reports_count() {
        let err = MessageBody::parse("a".repeat(1601).as_bytes()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BodyTooLong {
                max: 1600,
                actual: 1601
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("1600"));
        assert!(msg.contains("1601"));
    }

    #[test]
    fn limit_counts_code_units_not_code_points() {
        // 801 code points, 1602 UTF-16 units.
        let text = "\u{1F4E8}".repeat(801);
        assert_eq!(text.chars().count(), 801);

        let err = MessageBody::parse(text.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BodyTooLong {
                max: 1600,
                actual: 1602
            }
        );
    }

    #[test]
    fn limit_ignores_byte_length() {
        // 1600 units but 4800 bytes.
        let text = "€".repeat(1600);
        assert_eq!(text.len(), 4800);
        assert!(MessageBody::parse(text.as_bytes()).is_ok());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = MessageBody::parse(b"\xf0\x28\x8c\x28").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUtf8(_)));
    }

    #[test]
    fn empty_media_url_keeps_request_as_sms() {
        let request = MessageRequest::new("+15550001111", "+15550002222", "hi").with_media_url("");
        assert!(!request.is_mms());
        assert_eq!(request.media_url(), None);

        let request = request.with_media_url("https://example.com/cat.png");
        assert!(request.is_mms());
    }
}
