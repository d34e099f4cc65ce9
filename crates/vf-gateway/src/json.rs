//! Structured JSON contract.
//!
//! Same multipart request as the HTML contract; the response body is
//! `{"verdict": "real", "confidence": 0.93}`. Both fields are optional.
//! Confidence may be a fraction (`0.0..=1.0`) or a percentage.

use serde::Deserialize;
use vf_core::ArticleInput;

use crate::error::GatewayError;
use crate::http::GatewayHttp;
use crate::{ClassifierGateway, GatewayVerdict};

#[derive(Debug, Deserialize)]
struct VerdictBody {
    verdict: Option<String>,
    confidence: Option<f64>,
}

/// Adapter for gateways that return a typed verdict.
#[derive(Debug, Clone)]
pub struct JsonGateway {
    http: GatewayHttp,
}

impl JsonGateway {
    #[must_use]
    pub const fn new(http: GatewayHttp) -> Self {
        Self { http }
    }
}

impl ClassifierGateway for JsonGateway {
    async fn classify(&self, article: &ArticleInput) -> Result<GatewayVerdict, GatewayError> {
        let body = self.http.post_article(article).await?;
        parse_verdict_body(&body)
    }
}

/// Parse a JSON verdict body.
///
/// # Errors
///
/// Returns [`GatewayError::MalformedResponse`] if `body` is not a JSON object
/// of the expected shape.
pub fn parse_verdict_body(body: &str) -> Result<GatewayVerdict, GatewayError> {
    let parsed: VerdictBody = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
    Ok(GatewayVerdict::from_token(
        parsed.verdict,
        parsed.confidence.and_then(normalize_confidence),
    ))
}

/// Convert a raw confidence to a whole percentage in `0..=100`.
///
/// Values in `0.0..=1.0` are read as fractions. Non-finite values are dropped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_confidence(raw: f64) -> Option<u8> {
    if !raw.is_finite() {
        return None;
    }
    let percent = if (0.0..=1.0).contains(&raw) {
        raw * 100.0
    } else {
        raw
    };
    Some(percent.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use vf_core::Verdict;

    #[test]
    fn parses_full_body() {
        let verdict = parse_verdict_body(r#"{"verdict": "real", "confidence": 0.93}"#).unwrap();
        assert_eq!(verdict.verdict, Verdict::Real);
        assert_eq!(verdict.confidence, Some(93));
    }

    #[test]
    fn missing_fields_fail_closed() {
        let verdict = parse_verdict_body("{}").unwrap();
        assert_eq!(verdict.verdict, Verdict::Fake);
        assert_eq!(verdict.confidence, None);
    }

    #[test]
    fn unknown_verdict_is_fake() {
        let verdict = parse_verdict_body(r#"{"verdict": "satire", "confidence": 70}"#).unwrap();
        assert_eq!(verdict.verdict, Verdict::Fake);
        assert_eq!(verdict.confidence, Some(70));
    }

    #[rstest]
    #[case("<h1>real</h1>")]
    #[case("")]
    #[case("[1, 2]")]
    #[case(r#"{"verdict": 1}"#)]
    fn malformed_bodies_are_errors(#[case] body: &str) {
        let err = parse_verdict_body(body).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[rstest]
    #[case(0.0, Some(0))]
    #[case(0.86, Some(86))]
    #[case(1.0, Some(100))]
    #[case(42.0, Some(42))]
    #[case(150.0, Some(100))]
    #[case(-3.0, Some(0))]
    #[case(f64::NAN, None)]
    fn confidence_normalization(#[case] raw: f64, #[case] expected: Option<u8>) {
        assert_eq!(normalize_confidence(raw), expected);
    }
}
