//! Client layer: validates a message, executes the POST and classifies the outcome.

mod http;
mod sink;

use std::sync::Arc;

use crate::domain::{Credentials, MessageBody, MessageRequest, ProviderResponse, ValidationError};

pub use http::{
    BasicAuth, HttpTransport, InitError, PostRequest, ReqwestTransport, SharedTransport,
    TransportConfig, TransportFailure, init, is_initialized, shutdown,
};
pub use sink::ResponseSink;

const DEFAULT_API_BASE: &str = "https://api.twilio.com";
const DEFAULT_API_VERSION: &str = "2010-04-01";

#[derive(Debug, thiserror::Error)]
/// Why a send attempt failed.
pub enum SendError {
    /// The body was not UTF-8 or was too long. Nothing was sent.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The HTTP exchange did not complete (DNS, TLS, connection, timeout).
    #[error("{0}")]
    Transport(#[source] TransportFailure),

    /// Twilio answered with a status other than 200 or 201.
    #[error("unexpected HTTP status: {status}")]
    Provider { status: u16 },
}

#[derive(Debug)]
/// Outcome of one [`MessagingClient::send_message`] call.
///
/// `diagnostic` holds the validation message, the transport error text, or
/// the raw response body when verbose diagnostics were requested (empty
/// otherwise).
pub struct SendResult {
    pub success: bool,
    pub diagnostic: String,
    status: Option<u16>,
    error: Option<SendError>,
}

impl SendResult {
    fn completed(status: u16, diagnostic: String) -> Self {
        let success = matches!(status, 200 | 201);
        Self {
            success,
            diagnostic,
            status: Some(status),
            error: (!success).then_some(SendError::Provider { status }),
        }
    }

    fn failed(error: SendError) -> Self {
        Self {
            success: false,
            diagnostic: error.to_string(),
            status: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// HTTP status of a completed exchange.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn error(&self) -> Option<&SendError> {
        self.error.as_ref()
    }

    /// Decode a verbose diagnostic as Twilio's JSON document.
    ///
    /// Returns `None` when no body was captured or it is not Twilio JSON.
    pub fn provider_response(&self) -> Option<ProviderResponse> {
        if self.status.is_none() || self.diagnostic.trim().is_empty() {
            return None;
        }
        crate::transport::decode_provider_response(&self.diagnostic).ok()
    }

    /// The diagnostic on success, the failure otherwise.
    pub fn into_result(self) -> Result<String, SendError> {
        match self.error {
            None => Ok(self.diagnostic),
            Some(err) => Err(err),
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MessagingClientBuilder::build`].
pub enum ClientBuildError {
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL {0:?} cannot carry a path")]
    CannotBeABase(String),
}

#[derive(Clone)]
/// Builder for [`MessagingClient`].
///
/// Use this to point the client at another API host or to give it its own
/// transport instead of the shared one.
pub struct MessagingClientBuilder {
    credentials: Credentials,
    api_base: String,
    api_version: String,
    http: Option<Arc<dyn HttpTransport>>,
}

impl MessagingClientBuilder {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(account_sid, auth_token),
            api_base: DEFAULT_API_BASE.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            http: None,
        }
    }

    /// Override the scheme and host (`https://api.twilio.com`).
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the API version path segment (`2010-04-01`).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Use a dedicated transport instead of the one installed by [`init`].
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http = Some(transport);
        self
    }

    pub fn build(self) -> Result<MessagingClient, ClientBuildError> {
        let parsed =
            url::Url::parse(&self.api_base).map_err(|source| ClientBuildError::InvalidBaseUrl {
                url: self.api_base.clone(),
                source,
            })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientBuildError::CannotBeABase(self.api_base));
        }

        let messages_url = messages_url(&self.api_base, &self.api_version, &self.credentials);
        Ok(MessagingClient {
            credentials: self.credentials,
            messages_url,
            http: self.http.unwrap_or_else(|| Arc::new(SharedTransport)),
        })
    }
}

#[derive(Clone)]
/// Blocking Twilio Messages client bound to one account.
///
/// Each call performs at most one POST and retains nothing afterwards. Clients
/// built without an explicit transport send through the process-wide one, so
/// [`init`] must have been called first.
pub struct MessagingClient {
    credentials: Credentials,
    messages_url: String,
    http: Arc<dyn HttpTransport>,
}

impl MessagingClient {
    /// Create a client for the default Twilio endpoint. Performs no I/O.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let credentials = Credentials::new(account_sid, auth_token);
        Self {
            messages_url: messages_url(DEFAULT_API_BASE, DEFAULT_API_VERSION, &credentials),
            credentials,
            http: Arc::new(SharedTransport),
        }
    }

    pub fn builder(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> MessagingClientBuilder {
        MessagingClientBuilder::new(account_sid, auth_token)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// URL of this account's Messages resource.
    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    /// Send an SMS, or an MMS when `media_url` is given.
    ///
    /// See [`MessagingClient::send`].
    pub fn send_message(
        &self,
        to: &str,
        from: &str,
        body: impl Into<Vec<u8>>,
        media_url: Option<&str>,
        verbose: bool,
    ) -> SendResult {
        let mut request = MessageRequest::new(to, from, body);
        if let Some(media_url) = media_url {
            request = request.with_media_url(media_url);
        }
        self.send(&request, verbose)
    }

    /// Validate and send one message.
    ///
    /// Succeeds only when Twilio answers 200 or 201. With `verbose` the
    /// response body is captured into [`SendResult::diagnostic`]; without it
    /// the body is discarded. Never retries.
    pub fn send(&self, request: &MessageRequest, verbose: bool) -> SendResult {
        let body = match MessageBody::parse(request.body()) {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(to = request.to(), error = %err, "message rejected before sending");
                return SendResult::failed(SendError::Validation(err));
            }
        };

        let form = crate::transport::encode_message_form(request, &body);
        let post = PostRequest {
            url: &self.messages_url,
            body: &form,
            auth: BasicAuth {
                username: self.credentials.account_sid().as_str(),
                password: self.credentials.auth_token().expose(),
            },
        };
        tracing::debug!(
            to = request.to(),
            mms = request.is_mms(),
            units = body.utf16_len(),
            "sending message"
        );

        let mut sink = ResponseSink::for_verbosity(verbose);
        let status = match self.http.post_form(&post, &mut sink) {
            Ok(status) => status,
            Err(err) => {
                tracing::warn!(to = request.to(), error = %err, "message transport failed");
                return SendResult::failed(SendError::Transport(err));
            }
        };

        let result = SendResult::completed(status, sink.into_diagnostic());
        if result.success {
            tracing::info!(to = request.to(), status, "message accepted");
        } else {
            tracing::warn!(to = request.to(), status, "message rejected by provider");
        }
        result
    }
}

fn messages_url(api_base: &str, api_version: &str, credentials: &Credentials) -> String {
    format!(
        "{}/{}/Accounts/{}/Messages",
        api_base.trim_end_matches('/'),
        api_version.trim_matches('/'),
        credentials.account_sid().as_str()
    )
}
