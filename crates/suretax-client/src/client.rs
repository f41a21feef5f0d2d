//! # SureTax Client
//!
//! Orchestrates the two calls the service supports:
//!
//! | Method | Endpoint | Request envelope | Response |
//! |--------|----------|------------------|----------|
//! | [`SuretaxClient::send`] | `config.url` | `{"request": ...}` | `{"d": ...}` |
//! | [`SuretaxClient::cancel`] | `config.cancel_url` | `{"requestCancel": ...}` | bare object |
//!
//! Each call resolves the transport, encodes the body, POSTs it, requires
//! exactly HTTP 200 and decodes the body. Nothing is retried here; see
//! [`SuretaxError::is_transient`] for the caller's retry decision.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use reqwest::StatusCode;
use serde::Serialize;

use crate::cancel::{CancelRequest, CancelResponse};
use crate::config::SuretaxConfig;
use crate::envelope::{self, CancelRequestEnvelope, Envelope, ResponseEnvelope, TaxRequestEnvelope};
use crate::error::SuretaxError;
use crate::request::TaxRequest;
use crate::response::TaxResponse;
use crate::transport::{
    self, HttpRequest, HttpResponse, HttpTransport, ReqwestTransportFactory, TransportFactory,
};

const CONTENT_TYPE_JSON: &str = "application/json";

/// Longest response-body excerpt logged for a non-200 response.
const BODY_EXCERPT_LEN: usize = 512;

/// Typed client for the SureTax tax calculation and cancellation endpoints.
///
/// Cheap to share behind an `Arc`; concurrent calls only contend on the
/// one-time construction of the default transport.
pub struct SuretaxClient {
    config: SuretaxConfig,
    transport: OnceCell<Arc<dyn HttpTransport>>,
    factory: Arc<dyn TransportFactory>,
}

impl fmt::Debug for SuretaxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuretaxClient")
            .field("config", &self.config)
            .field("transport_ready", &self.transport.get().is_some())
            .finish()
    }
}

impl SuretaxClient {
    /// Create a client whose `reqwest` transport is built lazily on first use.
    pub fn new(config: SuretaxConfig) -> Self {
        Self::with_transport_factory(config, Arc::new(ReqwestTransportFactory))
    }

    /// Create a client from environment variables (see [`SuretaxConfig::from_env`]).
    pub fn from_env() -> Result<Self, SuretaxError> {
        Ok(Self::new(SuretaxConfig::from_env()?))
    }

    /// Create a client that uses `transport` for every call.
    ///
    /// The process-wide override still takes precedence when set.
    pub fn with_transport(config: SuretaxConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            transport: OnceCell::with_value(transport),
            factory: Arc::new(ReqwestTransportFactory),
        }
    }

    /// Create a client whose default transport is built by `factory` on
    /// first use. The factory runs at most once per client.
    pub fn with_transport_factory(config: SuretaxConfig, factory: Arc<dyn TransportFactory>) -> Self {
        Self {
            config,
            transport: OnceCell::new(),
            factory,
        }
    }

    pub fn config(&self) -> &SuretaxConfig {
        &self.config
    }

    /// Resolve the transport for one call.
    ///
    /// Order: process-wide override, then the transport cached on this
    /// client, then a default built by the factory. Once cached, the
    /// instance transport never changes.
    pub fn transport(&self) -> Result<Arc<dyn HttpTransport>, SuretaxError> {
        if let Some(overridden) = transport::transport_override() {
            return Ok(overridden);
        }
        self.transport
            .get_or_try_init(|| self.factory.create(&self.config.transport_settings()))
            .map(Arc::clone)
            .map_err(|source| SuretaxError::Transport {
                endpoint: "transport_init".into(),
                source,
            })
    }

    /// Submit a tax calculation request.
    ///
    /// POSTs `{"request": "<TaxRequest JSON>"}` to `config.url` and decodes
    /// the `{"d": "<TaxResponse JSON>"}` reply. A 200 reply with a rejection
    /// `ResponseCode` is returned as `Ok`; inspect
    /// [`TaxResponse::outcome`].
    pub async fn send(&self, request: &TaxRequest) -> Result<TaxResponse, SuretaxError> {
        let endpoint = "POST /tax";
        let resp = self
            .post::<TaxRequestEnvelope, _>(endpoint, &self.config.url, request)
            .await?;

        let payload = envelope::unwrap::<ResponseEnvelope>(&resp.body).map_err(|source| {
            SuretaxError::EnvelopeUnmarshal {
                endpoint: endpoint.into(),
                source,
            }
        })?;

        let response: TaxResponse = envelope::decode_payload(&payload).map_err(|source| {
            SuretaxError::PayloadUnmarshal {
                endpoint: endpoint.into(),
                source,
            }
        })?;

        tracing::debug!(
            endpoint,
            trans_id = response.trans_id,
            response_code = %response.response_code,
            groups = response.group_list.len(),
            item_messages = response.item_messages.len(),
            "SureTax tax response decoded"
        );
        Ok(response)
    }

    /// Cancel a previously submitted transaction.
    ///
    /// POSTs `{"requestCancel": "<CancelRequest JSON>"}` to
    /// `config.cancel_url`. The reply is a bare `CancelResponse` object.
    pub async fn cancel(&self, request: &CancelRequest) -> Result<CancelResponse, SuretaxError> {
        let endpoint = "POST /cancel";
        let resp = self
            .post::<CancelRequestEnvelope, _>(endpoint, &self.config.cancel_url, request)
            .await?;

        let response: CancelResponse = envelope::decode_body(&resp.body).map_err(|source| {
            SuretaxError::PayloadUnmarshal {
                endpoint: endpoint.into(),
                source,
            }
        })?;

        tracing::debug!(
            endpoint,
            trans_id = response.trans_id,
            response_code = %response.response_code,
            "SureTax cancel response decoded"
        );
        Ok(response)
    }

    /// Encode, POST and status-check one call. Returns the raw 200 response.
    async fn post<E: Envelope, T: Serialize>(
        &self,
        endpoint: &str,
        url: &url::Url,
        payload: &T,
    ) -> Result<HttpResponse, SuretaxError> {
        let transport = self.transport()?;

        let body = envelope::encode_request::<E, T>(payload).map_err(|source| {
            SuretaxError::Encoding {
                endpoint: endpoint.into(),
                source,
            }
        })?;
        tracing::debug!(
            endpoint,
            url = %url,
            request_data = %String::from_utf8_lossy(&body),
            "SureTax request"
        );

        let resp = transport
            .execute(HttpRequest {
                url: url.clone(),
                content_type: CONTENT_TYPE_JSON,
                body,
            })
            .await
            .map_err(|source| SuretaxError::Transport {
                endpoint: endpoint.into(),
                source,
            })?;

        tracing::debug!(
            endpoint,
            status = resp.status.as_u16(),
            response_data = %String::from_utf8_lossy(&resp.body),
            "SureTax response"
        );

        if resp.status != StatusCode::OK {
            tracing::warn!(
                endpoint,
                status = resp.status.as_u16(),
                body = %body_excerpt(&resp.body),
                "SureTax returned non-200 status"
            );
            return Err(SuretaxError::UnexpectedStatus {
                endpoint: endpoint.into(),
                status: resp.status.as_u16(),
                status_line: resp.status.to_string(),
            });
        }

        Ok(resp)
    }
}

fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.into_owned(),
    }
}
