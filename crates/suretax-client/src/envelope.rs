//! # Envelope Codec
//!
//! SureTax exchanges JSON documents wrapped in a single-key object whose
//! value is the document *serialized as a string*, not the document itself:
//!
//! | Direction | Wire form |
//! |-----------|-----------|
//! | tax request | `{"request": "<TaxRequest JSON>"}` |
//! | tax response | `{"d": "<TaxResponse JSON>"}` |
//! | cancel request | `{"requestCancel": "<CancelRequest JSON>"}` |
//! | cancel response | bare `CancelResponse` object, no wrapper |
//!
//! Nesting the document as an object is rejected by the service. The key
//! spellings are part of the contract.
//!
//! Encoding and decoding are each split into two stages so the wrapper can
//! be exercised without a network:
//!
//! - [`encode_payload`] then [`wrap`] to build a request body;
//! - [`unwrap`] then [`decode_payload`] to read a wrapped body back;
//! - [`decode_body`] for the unwrapped cancellation reply.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A single-field wrapper carrying a serialized payload string.
pub trait Envelope: Serialize + DeserializeOwned {
    /// Wire key of the single field.
    const FIELD: &'static str;

    fn from_payload(payload: String) -> Self;

    fn into_payload(self) -> String;
}

/// `{"request": ...}` wrapper for tax calculation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRequestEnvelope {
    pub request: String,
}

/// `{"requestCancel": ...}` wrapper for cancellation requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequestEnvelope {
    #[serde(rename = "requestCancel")]
    pub request_cancel: String,
}

/// `{"d": ...}` wrapper around tax calculation responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub d: String,
}

impl Envelope for TaxRequestEnvelope {
    const FIELD: &'static str = "request";

    fn from_payload(payload: String) -> Self {
        Self { request: payload }
    }

    fn into_payload(self) -> String {
        self.request
    }
}

impl Envelope for CancelRequestEnvelope {
    const FIELD: &'static str = "requestCancel";

    fn from_payload(payload: String) -> Self {
        Self {
            request_cancel: payload,
        }
    }

    fn into_payload(self) -> String {
        self.request_cancel
    }
}

impl Envelope for ResponseEnvelope {
    const FIELD: &'static str = "d";

    fn from_payload(payload: String) -> Self {
        Self { d: payload }
    }

    fn into_payload(self) -> String {
        self.d
    }
}

/// Serialize a document to its JSON string form (inner stage).
pub fn encode_payload<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Embed an already-serialized payload in envelope `E` and serialize the
/// envelope to bytes (outer stage).
pub fn wrap<E: Envelope>(payload: String) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&E::from_payload(payload))
}

/// Serialize `value` and wrap it in envelope `E`: a complete request body.
pub fn encode_request<E: Envelope, T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    wrap::<E>(encode_payload(value)?)
}

/// Parse a body as envelope `E` and return the payload string (outer stage).
pub fn unwrap<E: Envelope>(body: &[u8]) -> Result<String, serde_json::Error> {
    serde_json::from_slice::<E>(body).map(E::into_payload)
}

/// Parse a payload string into a typed document (inner stage).
pub fn decode_payload<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Parse an unwrapped body directly into a typed document. Used for the
/// cancellation reply, which carries no envelope.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(body)
}
