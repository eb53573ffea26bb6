/// Decoded JSON returned by the Messages endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    /// The created message resource (HTTP 200/201).
    Message(MessageResource),
    /// Twilio's error document (HTTP 4xx/5xx).
    Error(ApiErrorBody),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageResource {
    pub sid: String,
    pub status: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub num_segments: Option<u32>,
    pub num_media: Option<u32>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: Option<i64>,
    pub message: String,
    pub more_info: Option<String>,
    pub status: Option<u16>,
}
