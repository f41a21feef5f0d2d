//! # Tax Calculation Request
//!
//! Typed form of the document submitted to the SureTax tax calculation
//! endpoint. Field values are passed through unchanged; the service, not
//! this client, validates them.
//!
//! Field declaration order follows the service's published schema so that
//! the serialized payload is byte-stable. Wire keys are PascalCase, with a
//! handful of explicit renames where the service spells an acronym in
//! capitals (`STAN`, `UDF`, `GLAccount`, `P2PAddress`).

use serde::{Deserialize, Serialize};

/// Tax calculation request header plus its line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaxRequest {
    /// Client ID number assigned by SureTax. Max 10 characters.
    pub client_number: String,
    /// Client business unit. Max 20 characters.
    pub business_unit: String,
    /// Validation key assigned by SureTax. Max 36 characters.
    pub validation_key: String,
    /// `YYYY` used for tax calculation.
    pub data_year: String,
    /// `MM` used for tax calculation.
    pub data_month: String,
    /// `YYYY` used for remittance recording.
    pub cmpl_data_year: String,
    /// `MM` used for remittance recording.
    pub cmpl_data_month: String,
    /// Total revenue, `$$$$$$$$$.CCCC`, leading `-` for negative charges.
    pub total_revenue: String,
    /// `0` for normal processing, `Q` for a quote that is not recorded.
    pub return_file_code: String,
    /// Echoed back in the response. Max 100 characters.
    pub client_tracking: String,
    pub response_type: String,
    pub response_group: String,
    /// Optional audit value. Max 16 characters.
    #[serde(rename = "STAN")]
    pub stan: String,
    pub item_list: Vec<RequestItem>,
}

/// One billable event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequestItem {
    pub line_number: String,
    pub invoice_number: String,
    pub customer_number: String,
    /// Origination number, `NPANXXNNNN`.
    pub orig_number: String,
    /// Termination number, `NPANXXNNNN`.
    pub term_number: String,
    /// Bill-to number, `NPANXXNNNN`.
    pub bill_to_number: String,
    /// `MM/DD/YYYY`, `MM-DD-YYYY` or `YYYY-MM-DDTHH:MM:SS`.
    pub trans_date: String,
    pub billing_period_start_date: String,
    pub billing_period_end_date: String,
    pub revenue: String,
    /// `0` when tax is not included in revenue, `1` when it is.
    pub tax_included_code: String,
    pub units: String,
    pub unit_type: String,
    /// Rule the service uses to locate the taxing jurisdiction (e.g. `01`,
    /// two-out-of-three NPA-NXX test; `04`, zip code).
    pub tax_situs_rule: String,
    pub trans_type_code: String,
    /// `R` residential, `B` business, `I` industrial, `L` lifeline.
    pub sales_type_code: String,
    pub regulatory_code: String,
    pub tax_exemption_code_list: Vec<String>,
    pub exempt_reason_code: String,
    #[serde(rename = "UDF")]
    pub udf: String,
    #[serde(rename = "UDF2")]
    pub udf2: String,
    pub cost_center: String,
    #[serde(rename = "GLAccount")]
    pub gl_account: String,
    pub material_group: String,
    pub billing_days_in_period: String,
    pub origin_country_code: String,
    pub dest_country_code: String,
    pub parameter1: String,
    pub parameter2: String,
    pub parameter3: String,
    pub parameter4: String,
    pub parameter5: String,
    pub parameter6: String,
    pub parameter7: String,
    pub parameter8: String,
    pub parameter9: String,
    pub parameter10: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Call duration in seconds.
    pub seconds: String,
    /// Billing address.
    pub address: Address,
    /// Point-to-point address for private line transactions.
    #[serde(rename = "P2PAddress")]
    pub p2p_address: Address,
}

/// Postal address. Used for both the billing and the point-to-point
/// location of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Address {
    pub primary_address_line: String,
    pub secondary_address_line: String,
    pub county: String,
    pub city: String,
    /// Full state name or two-character abbreviation.
    pub state: String,
    /// Zip code or Canadian postal code.
    pub postal_code: String,
    pub plus4: String,
    /// ISO country code, `XX`.
    pub country: String,
    /// Takes precedence over the address fields when set.
    pub geocode: String,
    pub verify_address: String,
}

impl RequestItem {
    /// The ten free-form rules-engine parameters, in order.
    pub fn parameters(&self) -> [&str; 10] {
        [
            &self.parameter1,
            &self.parameter2,
            &self.parameter3,
            &self.parameter4,
            &self.parameter5,
            &self.parameter6,
            &self.parameter7,
            &self.parameter8,
            &self.parameter9,
            &self.parameter10,
        ]
    }
}
