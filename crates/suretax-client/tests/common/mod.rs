//! Shared fixtures for the SureTax client integration tests.

#![allow(dead_code)]

use suretax_client::{Address, RequestItem, SuretaxClient, SuretaxConfig, TaxRequest};
use wiremock::MockServer;

/// Exact wire body the service expects for [`sample_request`].
pub const TAX_REQUEST_BODY: &str = include_str!("../fixtures/tax_request_body.json");

/// A recorded `{"d": ...}` tax response: one item message, one group with
/// four tax lines, `TransId` 616039832.
pub const TAX_RESPONSE_BODY: &str = include_str!("../fixtures/tax_response_body.json");

pub fn sample_request() -> TaxRequest {
    let item = RequestItem {
        line_number: "01".into(),
        invoice_number: "INV-002".into(),
        customer_number: "001".into(),
        orig_number: "9043101723".into(),
        term_number: "9043101723".into(),
        bill_to_number: "9043101723".into(),
        trans_date: "05/26/2017".into(),
        revenue: "100".into(),
        tax_included_code: "0".into(),
        units: "4".into(),
        unit_type: "00".into(),
        tax_situs_rule: "01".into(),
        trans_type_code: "050104".into(),
        sales_type_code: "B".into(),
        regulatory_code: "99".into(),
        billing_days_in_period: "0".into(),
        seconds: "4".into(),
        address: Address {
            verify_address: "false".into(),
            ..Default::default()
        },
        p2p_address: Address {
            verify_address: "false".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    TaxRequest {
        client_number: "000000001".into(),
        validation_key: "D4E909CF-76C1-4940-A00F-9B80FA363DE3".into(),
        data_year: "2017".into(),
        data_month: "11".into(),
        cmpl_data_year: "2016".into(),
        cmpl_data_month: "06".into(),
        total_revenue: "100".into(),
        return_file_code: "0".into(),
        client_tracking: "Certi".into(),
        response_type: "D2".into(),
        response_group: "00".into(),
        item_list: vec![item],
        ..Default::default()
    }
}

pub fn mock_client(server: &MockServer) -> SuretaxClient {
    SuretaxClient::new(SuretaxConfig::local_mock(&server.uri()).unwrap())
}
