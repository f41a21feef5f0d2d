//! # HTTP Transport Provider
//!
//! The client never talks to `reqwest` directly. It executes requests
//! through an [`HttpTransport`] trait object, which is resolved per call:
//!
//! 1. the process-wide override set with [`set_transport_override`];
//! 2. the transport cached on the client instance;
//! 3. a default [`ReqwestTransport`], built once by the client's
//!    [`TransportFactory`] on first use.
//!
//! ## Process-wide override
//!
//! The override exists for test ergonomics. It takes effect for every client
//! immediately, including clients that were given their own transport. Set
//! it before concurrent calls begin; swapping it while requests are in
//! flight gives no guarantee about which transport those requests use.
//! Prefer [`crate::SuretaxClient::with_transport`] for new code.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use reqwest::StatusCode;
use url::Url;

/// Failure reported by a transport (connection, DNS, TLS, timeout, body read).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// An outbound POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// A fully read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Executes one HTTP request.
///
/// Implementations must be `Send + Sync`; a single transport is shared by
/// every concurrent call on a client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Timeouts for the default transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportSettings {
    /// Overall per-request timeout, covering connect, send and body read.
    pub request_timeout: Duration,
    /// Idle pooled connections are dropped after this long.
    pub idle_timeout: Duration,
}

/// Builds the client's default transport on first use.
pub trait TransportFactory: Send + Sync {
    fn create(&self, settings: &TransportSettings) -> Result<Arc<dyn HttpTransport>, TransportError>;
}

impl<F> TransportFactory for F
where
    F: Fn(&TransportSettings) -> Result<Arc<dyn HttpTransport>, TransportError> + Send + Sync,
{
    fn create(&self, settings: &TransportSettings) -> Result<Arc<dyn HttpTransport>, TransportError> {
        self(settings)
    }
}

// -- Default reqwest transport ------------------------------------------------

/// `reqwest`-backed transport with a bounded idle-connection lifetime and an
/// overall request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: &TransportSettings) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .pool_idle_timeout(settings.idle_timeout)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let resp = self
            .http
            .post(request.url)
            .header(reqwest::header::CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await?;

        let status = resp.status();
        // Always drain the body so the connection returns to the pool.
        let body = resp.bytes().await?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

/// Factory producing a [`ReqwestTransport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransportFactory;

impl TransportFactory for ReqwestTransportFactory {
    fn create(&self, settings: &TransportSettings) -> Result<Arc<dyn HttpTransport>, TransportError> {
        let transport = ReqwestTransport::new(settings)?;
        tracing::debug!(
            request_timeout = ?settings.request_timeout,
            idle_timeout = ?settings.idle_timeout,
            "constructed default SureTax HTTP transport"
        );
        Ok(Arc::new(transport))
    }
}

// -- Process-wide override ----------------------------------------------------

static TRANSPORT_OVERRIDE: Lazy<RwLock<Option<Arc<dyn HttpTransport>>>> =
    Lazy::new(|| RwLock::new(None));

/// Install (or with `None`, clear) the process-wide transport override.
///
/// Affects all clients immediately. Not intended to be changed while calls
/// are in flight; see the module docs.
pub fn set_transport_override(transport: Option<Arc<dyn HttpTransport>>) {
    *TRANSPORT_OVERRIDE.write() = transport;
}

/// The currently installed process-wide override, if any.
pub fn transport_override() -> Option<Arc<dyn HttpTransport>> {
    TRANSPORT_OVERRIDE.read().clone()
}
