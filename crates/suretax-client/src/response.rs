//! # Tax Calculation Response
//!
//! Typed form of the document returned by the tax calculation endpoint,
//! after the `{"d": ...}` wrapper has been removed.
//!
//! Decoding is lenient: missing keys and `null` values take their default
//! and unknown keys (such as `MasterTransId`) are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// `ResponseCode` for a fully successful request.
pub const RESPONSE_CODE_SUCCESS: &str = "9999";

/// `ResponseCode` for a request that succeeded with per-item errors.
pub const RESPONSE_CODE_ITEM_ERRORS: &str = "9001";

/// Tax calculation response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaxResponse {
    /// Echo of the request's `ClientTracking`.
    #[serde(deserialize_with = "null_as_default")]
    pub client_tracking: String,
    /// `Success`, `Success with Item errors`, or a rejection message.
    #[serde(deserialize_with = "null_as_default")]
    pub header_message: String,
    /// Items that could not be processed. No tax is computed for them.
    #[serde(deserialize_with = "null_as_default")]
    pub item_messages: Vec<ItemMessage>,
    #[serde(deserialize_with = "null_as_default")]
    pub response_code: String,
    #[serde(rename = "STAN", deserialize_with = "null_as_default")]
    pub stan: String,
    /// `Y` on success or success with item errors, `N` on failure.
    #[serde(deserialize_with = "null_as_default")]
    pub successful: String,
    /// Transaction ID assigned by SureTax; needed to cancel.
    #[serde(deserialize_with = "null_as_default")]
    pub trans_id: i64,
    /// Sum of every tax in the group list.
    #[serde(deserialize_with = "null_as_default")]
    pub total_tax: String,
    #[serde(deserialize_with = "null_as_default")]
    pub group_list: Vec<TaxGroup>,
}

/// Validation error for one request item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemMessage {
    /// Line number from the request.
    #[serde(deserialize_with = "null_as_default")]
    pub line_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// In the range 9100-9400.
    #[serde(deserialize_with = "null_as_default")]
    pub response_code: String,
}

/// Taxes computed for one request line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaxGroup {
    #[serde(deserialize_with = "null_as_default")]
    pub customer_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub line_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_list: Vec<TaxLine>,
}

/// One jurisdiction / tax type combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaxLine {
    #[serde(deserialize_with = "null_as_default")]
    pub city_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub county_name: String,
    /// Unit-based fee, `$.CCCC`.
    #[serde(deserialize_with = "null_as_default")]
    pub fee_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub juriscode: String,
    /// Fraction of revenue that is taxable for this tax type.
    #[serde(deserialize_with = "null_as_default")]
    pub percent_taxable: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub revenue: String,
    /// Effective revenue the tax was computed on, after exemptions and
    /// tax-on-tax.
    #[serde(deserialize_with = "null_as_default")]
    pub revenue_base: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_amount: String,
    #[serde(rename = "TaxAuthorityID", deserialize_with = "null_as_default")]
    pub tax_authority_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_authority_name: String,
    /// Portion of `tax_amount` that is tax on tax. Informational only.
    #[serde(deserialize_with = "null_as_default")]
    pub tax_on_tax: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_type_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_type_desc: String,
}

/// Business-level outcome carried in a `ResponseCode`.
///
/// The client never acts on this; a 200 response with a rejection code is
/// still a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// `9999`.
    Success,
    /// `9001`; see the response's item messages.
    SuccessWithItemErrors,
    /// Any other code, e.g. `1151` invalid validation key.
    Rejected(String),
}

impl ResponseOutcome {
    pub fn from_code(code: &str) -> Self {
        match code {
            RESPONSE_CODE_SUCCESS => Self::Success,
            RESPONSE_CODE_ITEM_ERRORS => Self::SuccessWithItemErrors,
            other => Self::Rejected(other.to_string()),
        }
    }
}

impl TaxResponse {
    pub fn outcome(&self) -> ResponseOutcome {
        ResponseOutcome::from_code(&self.response_code)
    }

    /// Whether the service flagged the request as successful (`Y`).
    pub fn is_successful(&self) -> bool {
        self.successful == "Y"
    }

    /// Every tax line across all groups, in response order.
    pub fn tax_lines(&self) -> impl Iterator<Item = &TaxLine> {
        self.group_list.iter().flat_map(|g| g.tax_list.iter())
    }
}

/// Decodes a JSON `null` as the field's default, so a `null` string, number
/// or list in a reply reads the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
