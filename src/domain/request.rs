#[derive(Debug, Clone, PartialEq, Eq)]
/// One send attempt: destination, sender, body and an optional media URL.
///
/// Addresses and the media URL are not validated; Twilio rejects bad values.
/// The body is kept as raw bytes and checked when the message is sent.
pub struct MessageRequest {
    to: String,
    from: String,
    body: Vec<u8>,
    media_url: Option<String>,
}

impl MessageRequest {
    /// Form field name for the destination (`To`).
    pub const TO_FIELD: &'static str = "To";
    /// Form field name for the sender (`From`).
    pub const FROM_FIELD: &'static str = "From";
    /// Form field name for the MMS attachment (`MediaUrl`).
    pub const MEDIA_URL_FIELD: &'static str = "MediaUrl";

    /// Create a plain SMS request.
    pub fn new(to: impl Into<String>, from: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            body: body.into(),
            media_url: None,
        }
    }

    /// Attach a media URL, turning the request into an MMS.
    ///
    /// An empty string leaves the request as a plain SMS.
    pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
        let media_url = media_url.into();
        self.media_url = (!media_url.is_empty()).then_some(media_url);
        self
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    pub fn is_mms(&self) -> bool {
        self.media_url.is_some()
    }
}
