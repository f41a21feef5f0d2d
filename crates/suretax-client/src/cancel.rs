//! Cancellation request and response.
//!
//! Unlike the tax calculation response, the cancellation response arrives
//! as a bare JSON object with no `{"d": ...}` wrapper.

use serde::{Deserialize, Serialize};

use crate::response::{null_as_default, ResponseOutcome};

/// Cancels a previously submitted transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelRequest {
    pub client_number: String,
    pub client_tracking: String,
    /// `TransId` of the transaction to cancel, as a string.
    pub trans_id: String,
    pub validation_key: String,
}

/// Result of a cancellation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelResponse {
    /// `Y` or `N`.
    #[serde(deserialize_with = "null_as_default")]
    pub successful: String,
    /// `9999` on success. Notable failures: `1150` validation key required,
    /// `1151` invalid validation key, `1510` transaction older than 60 days,
    /// `9410` already cancelled.
    #[serde(deserialize_with = "null_as_default")]
    pub response_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub header_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_tracking: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trans_id: i64,
}

impl CancelRequest {
    pub fn new(
        client_number: impl Into<String>,
        trans_id: impl ToString,
        validation_key: impl Into<String>,
    ) -> Self {
        Self {
            client_number: client_number.into(),
            client_tracking: String::new(),
            trans_id: trans_id.to_string(),
            validation_key: validation_key.into(),
        }
    }

    pub fn with_client_tracking(mut self, tracking: impl Into<String>) -> Self {
        self.client_tracking = tracking.into();
        self
    }
}

impl CancelResponse {
    pub fn outcome(&self) -> ResponseOutcome {
        ResponseOutcome::from_code(&self.response_code)
    }

    pub fn is_successful(&self) -> bool {
        self.successful == "Y"
    }
}
