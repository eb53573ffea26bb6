//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod send_message;

pub use send_message::{TransportError, decode_provider_response, encode_message_form};
