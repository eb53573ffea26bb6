use serde::Deserialize;
use url::form_urlencoded;

use crate::domain::{ApiErrorBody, MessageBody, MessageRequest, MessageResource, ProviderResponse};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WireResponse {
    Error(ErrorJson),
    Message(MessageJson),
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJson {
    code: Option<i64>,
    message: String,
    #[serde(default)]
    more_info: Option<String>,
    #[serde(default)]
    status: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJson {
    sid: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    num_segments: Option<WireCount>,
    #[serde(default)]
    num_media: Option<WireCount>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    price_unit: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    error_message: Option<String>,
}

// Twilio sends counters as strings ("1"), older fixtures as numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WireCount {
    String(String),
    Number(u32),
}

impl WireCount {
    fn into_u32(self) -> Option<u32> {
        match self {
            Self::String(value) => value.trim().parse().ok(),
            Self::Number(value) => Some(value),
        }
    }
}

/// Build the `application/x-www-form-urlencoded` payload.
///
/// Only the body is percent-encoded; addresses and the media URL are
/// written as given.
pub fn encode_message_form(request: &MessageRequest, body: &MessageBody) -> String {
    let encoded_body = form_urlencoded::byte_serialize(body.as_str().as_bytes()).collect::<String>();

    let mut form = format!(
        "{}={}&{}={}&{}={}",
        MessageRequest::TO_FIELD,
        request.to(),
        MessageRequest::FROM_FIELD,
        request.from(),
        MessageBody::FIELD,
        encoded_body,
    );
    if let Some(media_url) = request.media_url() {
        form.push('&');
        form.push_str(MessageRequest::MEDIA_URL_FIELD);
        form.push('=');
        form.push_str(media_url);
    }
    form
}

pub fn decode_provider_response(body: &str) -> Result<ProviderResponse, TransportError> {
    let parsed: WireResponse = serde_json::from_str(body)?;
    Ok(match parsed {
        WireResponse::Error(err) => ProviderResponse::Error(ApiErrorBody {
            code: err.code,
            message: err.message,
            more_info: err.more_info,
            status: err.status,
        }),
        WireResponse::Message(msg) => ProviderResponse::Message(MessageResource {
            sid: msg.sid,
            status: msg.status,
            to: msg.to,
            from: msg.from,
            num_segments: msg.num_segments.and_then(WireCount::into_u32),
            num_media: msg.num_media.and_then(WireCount::into_u32),
            price: msg.price,
            price_unit: msg.price_unit,
            error_code: msg.error_code,
            error_message: msg.error_message,
        }),
    })
}
