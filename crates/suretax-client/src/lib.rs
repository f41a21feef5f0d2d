//! # suretax-client -- Typed Rust client for the SureTax tax API
//!
//! Submits telecom/utility tax calculation requests to CCH SureTax and
//! cancels previously submitted transactions.
//!
//! ## Wire Format
//!
//! SureTax double-encodes its JSON: the document travels as a *string*
//! inside a one-key wrapper object. The tax call wraps both directions
//! (`request` out, `d` back); the cancel call wraps only the request
//! (`requestCancel`) and answers with a bare object. See [`envelope`].
//!
//! ## Transport
//!
//! HTTP is executed through the [`transport::HttpTransport`] trait. A client
//! builds its default `reqwest` transport lazily, at most once, on first
//! use. Tests inject their own transport through the constructor or, for
//! every client at once, through [`transport::set_transport_override`].
//!
//! ## Outcomes
//!
//! A call succeeds when the service answers HTTP 200 with a decodable body.
//! The business result (`ResponseCode` `9999`, `9001`, or a rejection code)
//! is left for the caller to inspect via [`TaxResponse::outcome`].

pub mod cancel;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use cancel::{CancelRequest, CancelResponse};
pub use client::SuretaxClient;
pub use config::SuretaxConfig;
pub use error::SuretaxError;
pub use request::{Address, RequestItem, TaxRequest};
pub use response::{ItemMessage, ResponseOutcome, TaxGroup, TaxLine, TaxResponse};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, TransportError, TransportFactory};
