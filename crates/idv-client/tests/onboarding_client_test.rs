//! Contract tests for the onboarding endpoint facade.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST | `/customers` | `create_customer_*` |
//! | PUT | `/customers/{id}/selfie` | `create_selfie_*` |
//! | POST | `/customers/{id}/liveness/selfies` | `liveness_selfie_*` |
//! | POST | `/customers/{id}/liveness/evaluation` | `evaluate_liveness_*` |
//! | PUT | `/customers/{id}/document` | `create_document_*` |
//! | PUT | `/customers/{id}/document/pages` | `document_page_*` |
//! | GET | `/customers/{id}` | `get_customer_*` |
//! | GET | `/customers/{id}/document/pages/{side}/crop` | `page_crop_*` |
//! | DELETE | `/customers/{id}` | `delete_customer_*` |

use idv_client::types::{
    CreateDocumentRequest, Image, LivenessAssertion, LivenessSelfieWarning, LivenessType, PageSide,
    SelfieErrorCode,
};
use idv_client::{IdvApiConfig, IdvClient, IdvApiError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at the mock server.
fn test_client(server: &MockServer) -> IdvClient {
    let config = IdvApiConfig::new(server.uri().parse().unwrap(), "test-token");
    IdvClient::new(config).unwrap()
}

#[tokio::test]
async fn create_customer_returns_id_and_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "abc" })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.onboarding().create_customer().await.unwrap();
    assert_eq!(resp.id, "abc");
}

#[tokio::test]
async fn create_customer_maps_server_error_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.onboarding().create_customer().await.unwrap_err();
    match err {
        IdvApiError::Api {
            endpoint,
            status,
            body,
        } => {
            assert_eq!(endpoint, "create_customer");
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance window");
        }
        other => panic!("expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn create_selfie_sends_base64_image_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/customers/abc/selfie"))
        .and(body_json(serde_json::json!({ "image": { "data": "AQID" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .onboarding()
        .create_selfie("abc", Image::from_bytes(vec![1u8, 2, 3]))
        .await
        .unwrap();
    assert!(resp.error_code.is_none());
}

#[tokio::test]
async fn create_selfie_surfaces_embedded_error_code_as_data() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/customers/abc/selfie"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "errorCode": "NO_FACE_DETECTED" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .onboarding()
        .create_selfie("abc", Image::from_bytes(vec![0u8]))
        .await
        .unwrap();
    assert_eq!(resp.error_code, Some(SelfieErrorCode::NoFaceDetected));
}

#[tokio::test]
async fn liveness_selfie_decodes_warnings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers/abc/liveness/selfies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "warnings": ["LOW_QUALITY", "EYES_CLOSED"]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .onboarding()
        .create_liveness_selfie("abc", Image::from_bytes(vec![0u8]), LivenessAssertion::None)
        .await
        .unwrap();
    assert_eq!(
        resp.warnings,
        Some(vec![
            LivenessSelfieWarning::LowQuality,
            LivenessSelfieWarning::EyesClosed
        ])
    );
}

#[tokio::test]
async fn evaluate_liveness_sends_type_and_reads_score() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers/abc/liveness/evaluation"))
        .and(body_json(serde_json::json!({ "type": "PASSIVE_LIVENESS" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "score": 0.9 })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .onboarding()
        .evaluate_liveness("abc", LivenessType::PassiveLiveness)
        .await
        .unwrap();
    assert!(resp.error_code.is_none());
    assert_eq!(resp.score, Some(0.9));
}

#[tokio::test]
async fn create_document_sends_advice_and_tolerates_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/customers/abc/document"))
        .and(body_json(serde_json::json!({
            "advice": {
                "classification": { "countries": ["INO"], "types": ["identity-card"] }
            }
        })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = CreateDocumentRequest::with_advice(["INO"], ["identity-card"]);
    client
        .onboarding()
        .create_document("abc", &request)
        .await
        .unwrap();
}

#[tokio::test]
async fn document_page_decodes_classification() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/customers/abc/document/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documentType": { "type": "identity-card", "country": "INO" },
            "pageType": "front"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .onboarding()
        .create_document_page("abc", Image::from_bytes(vec![0u8]))
        .await
        .unwrap();
    assert!(resp.error_code.is_none());
    let doc_type = resp.document_type.unwrap();
    assert_eq!(doc_type.doc_type.as_deref(), Some("identity-card"));
    assert_eq!(doc_type.country.as_deref(), Some("INO"));
    assert_eq!(resp.page_type.as_deref(), Some("front"));
}

#[tokio::test]
async fn get_customer_decodes_portrait_link_and_age() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "customer": {
                "document": { "links": { "portrait": "/customers/abc/document/portrait" } },
                "age": { "visualZone": "25" }
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.onboarding().get_customer("abc").await.unwrap();
    let customer = resp.customer.unwrap();
    assert!(customer.document.unwrap().links.portrait.is_some());
    assert_eq!(customer.age.unwrap().visual_zone.as_deref(), Some("25"));
}

#[tokio::test]
async fn page_crop_decodes_base64_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/abc/document/pages/front/crop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": "iVBORw0KGgo="
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let crop = client
        .onboarding()
        .document_page_crop("abc", PageSide::Front)
        .await
        .unwrap();
    // PNG magic prefix survives the base64 round trip.
    assert_eq!(&crop.data[..4], &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn delete_customer_issues_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/customers/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.onboarding().delete_customer("abc").await.unwrap();
}
