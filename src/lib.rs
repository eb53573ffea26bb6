//! Blocking Rust client for sending SMS and MMS through the Twilio Messages API.
//!
//! The crate is split into a domain layer of plain types (credentials, message
//! requests, the UTF-16 body limit), a transport layer for the form encoding
//! and Twilio's JSON, and a small client layer that executes one POST per call.
//!
//! The default HTTP transport is process-wide: install it once with [`init`]
//! before sending and tear it down with [`shutdown`] at exit.
//!
//! ```rust,no_run
//! use twilio_sms::{MessagingClient, TransportConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     twilio_sms::init(TransportConfig::default())?;
//!
//!     let client = MessagingClient::new("AC...", "auth-token");
//!     let result = client.send_message("+15550001111", "+15550002222", "hello", None, true);
//!     println!("success: {}, response: {}", result.success, result.diagnostic);
//!
//!     twilio_sms::shutdown();
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BasicAuth, ClientBuildError, HttpTransport, InitError, MessagingClient,
    MessagingClientBuilder, PostRequest, ReqwestTransport, ResponseSink, SendError, SendResult,
    SharedTransport, TransportConfig, TransportFailure, init, is_initialized, shutdown,
};
pub use domain::{
    AccountSid, ApiErrorBody, AuthToken, Credentials, EncodingError, MAX_BODY_UNITS,
    MessageBody, MessageRequest, MessageResource, ProviderResponse, ValidationError, utf16_units,
};
