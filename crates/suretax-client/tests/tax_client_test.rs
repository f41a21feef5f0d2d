//! Contract tests for `SuretaxClient::send` against a wiremock server.
//!
//! Verifies the double-encoded request body, the `{"d": ...}` response
//! unwrap, and the classification of every failure path.

mod common;

use suretax_client::{ResponseOutcome, SuretaxError};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{mock_client, sample_request, TAX_REQUEST_BODY, TAX_RESPONSE_BODY};

#[tokio::test]
async fn send_posts_exact_wire_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(body_string(TAX_REQUEST_BODY.trim_end()))
        .respond_with(ResponseTemplate::new(200).set_body_string(TAX_RESPONSE_BODY.trim_end()))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client.send(&sample_request()).await.unwrap();
}

#[tokio::test]
async fn send_decodes_wrapped_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TAX_RESPONSE_BODY.trim_end()))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let resp = client.send(&sample_request()).await.unwrap();

    assert_eq!(resp.trans_id, 616039832);
    assert_eq!(resp.response_code, "9999");
    assert_eq!(resp.outcome(), ResponseOutcome::Success);
    assert!(resp.is_successful());
    assert_eq!(resp.total_tax, "28.65");

    assert_eq!(resp.item_messages.len(), 1);
    assert_eq!(resp.item_messages[0].line_number, "0");
    assert_eq!(resp.item_messages[0].message, "Bill To Number is Required");
    assert_eq!(resp.item_messages[0].response_code, "9131");

    assert_eq!(resp.group_list.len(), 1);
    let group = &resp.group_list[0];
    assert_eq!(group.invoice_number, "INV-002");
    assert_eq!(group.state_code, "FL");
    assert_eq!(group.tax_list.len(), 4);

    let first = &group.tax_list[0];
    assert_eq!(first.tax_amount, "8.46");
    assert_eq!(first.tax_authority_id, "12009");
    assert!((first.tax_rate - 0.0744).abs() < 1e-12);
    assert_eq!(first.percent_taxable, 1.0);
    assert_eq!(group.tax_list[1].tax_type_desc, "FEDERAL UNIVERSAL SERVICE FUND");
}

#[tokio::test]
async fn send_returns_rejection_code_as_ok() {
    let server = MockServer::start().await;

    let payload = serde_json::json!({
        "ResponseCode": "1151",
        "Successful": "N",
        "HeaderMessage": "Failure - Invalid Validation Key",
        "ItemMessages": [],
        "GroupList": [],
        "TransId": 0
    });
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "d": payload.to_string() })),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let resp = client.send(&sample_request()).await.unwrap();
    assert_eq!(resp.outcome(), ResponseOutcome::Rejected("1151".into()));
    assert!(!resp.is_successful());
}

#[tokio::test]
async fn send_500_is_unexpected_status() {
    let server = MockServer::start().await;

    // A body that would decode fine must still be ignored on a non-200.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(TAX_RESPONSE_BODY.trim_end()))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.send(&sample_request()).await.unwrap_err();
    match &err {
        SuretaxError::UnexpectedStatus {
            status,
            status_line,
            ..
        } => {
            assert_eq!(*status, 500);
            assert_eq!(status_line, "500 Internal Server Error");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert!(!err.is_transient());
}

#[tokio::test]
async fn send_201_is_not_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_string(TAX_RESPONSE_BODY.trim_end()))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.send(&sample_request()).await.unwrap_err();
    assert_eq!(err.status(), Some(201));
}

#[tokio::test]
async fn send_invalid_inner_payload_is_payload_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"d":"{...invalid json...}"}"#))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.send(&sample_request()).await.unwrap_err();
    assert!(
        matches!(err, SuretaxError::PayloadUnmarshal { .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn send_non_json_body_is_envelope_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Service Unavailable</html>"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.send(&sample_request()).await.unwrap_err();
    assert!(
        matches!(err, SuretaxError::EnvelopeUnmarshal { .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn send_unwrapped_response_is_envelope_error() {
    let server = MockServer::start().await;

    // The service always wraps tax responses; a bare object has no `d`.
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "ResponseCode": "9999", "TransId": 1 })),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.send(&sample_request()).await.unwrap_err();
    assert!(matches!(err, SuretaxError::EnvelopeUnmarshal { .. }));
}

#[tokio::test]
async fn send_to_closed_port_is_transport_error() {
    let mut config = suretax_client::SuretaxConfig::local_mock("http://127.0.0.1:1").unwrap();
    config.request_timeout_secs = 1;
    let client = suretax_client::SuretaxClient::new(config);

    let err = client.send(&sample_request()).await.unwrap_err();
    assert!(matches!(err, SuretaxError::Transport { .. }), "got {err:?}");
    assert!(err.is_transient());
}
