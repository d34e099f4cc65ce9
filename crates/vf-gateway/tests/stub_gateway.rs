//! End-to-end gateway tests against a local stub classifier.

mod common;

use pretty_assertions::assert_eq;
use vf_config::{GatewayConfig, GatewayContract};
use vf_core::{ArticleInput, FailureKind, Verdict};
use vf_gateway::{ClassifierGateway, Gateway, GatewayError};

fn gateway(url: String, contract: GatewayContract) -> Gateway {
    Gateway::from_config(&GatewayConfig {
        url,
        contract,
        ..GatewayConfig::default()
    })
    .expect("gateway builds")
}

fn article() -> ArticleInput {
    ArticleInput::new(
        "Scientists Discover New Treatment",
        "Dr. Sarah Johnson",
        "Researchers have announced a breakthrough in treating the common cold with immunotherapy.",
    )
}

#[tokio::test]
async fn html_contract_posts_multipart_fields() {
    let (url, handle) = common::serve_once(
        200,
        "text/html",
        "<html><body><h1>real</h1></body></html>",
    );

    let verdict = gateway(url, GatewayContract::Html)
        .classify(&article())
        .await
        .expect("classification succeeds");
    let captured = handle.join().expect("stub thread");

    assert_eq!(verdict.verdict, Verdict::Real);
    assert_eq!(verdict.confidence, None);
    assert_eq!(captured.method, "POST");
    assert!(captured.content_type.starts_with("multipart/form-data"));
    assert!(captured.body.contains("name=\"title\""));
    assert!(captured.body.contains("name=\"author\""));
    assert!(captured.body.contains("name=\"maintext\""));
    assert!(captured.body.contains("Dr. Sarah Johnson"));
    assert!(captured.body.contains("immunotherapy"));
}

#[tokio::test]
async fn html_contract_defaults_to_fake_without_heading() {
    let (url, handle) = common::serve_once(200, "text/html", "<p>no verdict</p>");

    let verdict = gateway(url, GatewayContract::Html)
        .classify(&article())
        .await
        .expect("classification succeeds");
    handle.join().expect("stub thread");

    assert_eq!(verdict.verdict, Verdict::Fake);
}

#[tokio::test]
async fn server_error_is_unreachable() {
    let (url, handle) = common::serve_once(500, "text/plain", "internal error");

    let err = gateway(url, GatewayContract::Html)
        .classify(&article())
        .await
        .expect_err("500 must fail");
    handle.join().expect("stub thread");

    assert!(matches!(err, GatewayError::Status { status: 500, .. }));
    assert_eq!(err.kind(), FailureKind::GatewayUnreachable);
}

#[tokio::test]
async fn json_contract_reads_confidence() {
    let (url, handle) = common::serve_once(
        200,
        "application/json",
        r#"{"verdict": "REAL", "confidence": 0.91}"#,
    );

    let verdict = gateway(url, GatewayContract::Json)
        .classify(&article())
        .await
        .expect("classification succeeds");
    handle.join().expect("stub thread");

    assert_eq!(verdict.verdict, Verdict::Real);
    assert_eq!(verdict.confidence, Some(91));
}

#[tokio::test]
async fn json_contract_rejects_markup() {
    let (url, handle) = common::serve_once(200, "text/html", "<h1>real</h1>");

    let err = gateway(url, GatewayContract::Json)
        .classify(&article())
        .await
        .expect_err("markup is not json");
    handle.join().expect("stub thread");

    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}
