//! HTTP execution: the transport seam, the reqwest implementation, and the
//! process-wide shared transport.

use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::client::sink::ResponseSink;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const DEFAULT_USER_AGENT: &str = concat!("twilio-sms/", env!("CARGO_PKG_VERSION"));

static SHARED: RwLock<Option<Arc<ReqwestTransport>>> = RwLock::new(None);

/// Boxed error returned by an [`HttpTransport`].
pub type TransportFailure = Box<dyn StdError + Send + Sync>;

/// HTTP Basic credentials for one request.
#[derive(Clone, Copy)]
pub struct BasicAuth<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl fmt::Debug for BasicAuth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A form-encoded POST ready to execute.
#[derive(Debug, Clone, Copy)]
pub struct PostRequest<'a> {
    pub url: &'a str,
    pub body: &'a str,
    pub auth: BasicAuth<'a>,
}

/// Executes one HTTP POST and streams the response body into `sink`.
///
/// Returns the status code of a completed exchange. Connection, TLS, DNS and
/// timeout failures are returned as errors.
pub trait HttpTransport: Send + Sync {
    fn post_form(
        &self,
        request: &PostRequest<'_>,
        sink: &mut ResponseSink,
    ) -> Result<u16, TransportFailure>;
}

#[derive(Debug, thiserror::Error)]
/// Errors from setting up or reaching the HTTP transport.
pub enum InitError {
    /// [`init`] was called twice without [`shutdown`] in between.
    #[error("shared HTTP transport is already initialized")]
    AlreadyInitialized,

    /// A client tried to send through the shared transport before [`init`].
    #[error("shared HTTP transport is not initialized; call twilio_sms::init first")]
    NotInitialized,

    /// reqwest rejected the configuration.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
/// Settings for the underlying reqwest client.
///
/// No timeout is applied unless one is set.
pub struct TransportConfig {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time allowed for one request, including reading the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Time allowed to establish the connection.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[derive(Debug, Clone)]
/// [`HttpTransport`] backed by `reqwest::blocking::Client`.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, InitError> {
        let mut builder =
            reqwest::blocking::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder.build().map_err(InitError::Build)?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_form(
        &self,
        request: &PostRequest<'_>,
        sink: &mut ResponseSink,
    ) -> Result<u16, TransportFailure> {
        let mut response = self
            .client
            .post(request.url)
            .basic_auth(request.auth.username, Some(request.auth.password))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(request.body.to_owned())
            .send()?;

        let status = response.status().as_u16();
        std::io::copy(&mut response, sink)?;
        Ok(status)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// [`HttpTransport`] that forwards to the transport installed by [`init`].
pub struct SharedTransport;

impl HttpTransport for SharedTransport {
    fn post_form(
        &self,
        request: &PostRequest<'_>,
        sink: &mut ResponseSink,
    ) -> Result<u16, TransportFailure> {
        let transport = SHARED
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(InitError::NotInitialized)?;
        transport.post_form(request, sink)
    }
}

/// Install the process-wide HTTP transport used by clients built without an
/// explicit transport.
///
/// Call once at startup, before any such client sends.
pub fn init(config: TransportConfig) -> Result<(), InitError> {
    let mut slot = SHARED.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        return Err(InitError::AlreadyInitialized);
    }
    *slot = Some(Arc::new(ReqwestTransport::new(&config)?));
    tracing::info!(
        timeout = ?config.timeout,
        connect_timeout = ?config.connect_timeout,
        "shared HTTP transport initialized"
    );
    Ok(())
}

/// Tear down the process-wide transport. Returns `false` if it was not
/// initialized.
///
/// Requests already in flight keep their handle and finish normally.
pub fn shutdown() -> bool {
    let previous = SHARED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    let was_initialized = previous.is_some();
    drop(previous);
    if was_initialized {
        tracing::info!("shared HTTP transport shut down");
    }
    was_initialized
}

pub fn is_initialized() -> bool {
    SHARED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}
