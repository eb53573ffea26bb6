use std::str::Utf8Error;

/// The input bytes were not a valid UTF-8 sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("message body is not valid UTF-8: {0}")]
pub struct EncodingError(#[source] Utf8Error);

impl EncodingError {
    /// Number of leading bytes that decoded successfully.
    pub fn valid_up_to(&self) -> usize {
        self.0.valid_up_to()
    }
}

/// Convert UTF-8 bytes into the UTF-16 code units Twilio counts against its
/// body limit.
pub fn utf16_units(bytes: &[u8]) -> Result<Vec<u16>, EncodingError> {
    let text = std::str::from_utf8(bytes).map_err(EncodingError)?;
    Ok(text.encode_utf16().collect())
}
