//! # vf-gateway
//!
//! Classifier gateway clients for VeriFact.
//!
//! The controller only sees the [`ClassifierGateway`] capability. Two
//! adapters implement it over the same multipart request:
//! - [`HtmlFormGateway`] reads the verdict out of the first `<h1>` of an HTML
//!   page (the legacy classifier)
//! - [`JsonGateway`] reads a typed `{"verdict", "confidence"}` body

mod error;
pub mod html;
mod http;
pub mod json;

pub use error::GatewayError;
pub use html::HtmlFormGateway;
pub use http::{GatewayHttp, TEXT_FIELD, check_response};
pub use json::JsonGateway;

use std::future::Future;

use vf_config::{GatewayConfig, GatewayContract};
use vf_core::{ArticleInput, Verdict};

// ── Types ──────────────────────────────────────────────────────────

/// Normalized classifier answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayVerdict {
    pub verdict: Verdict,
    /// Percentage in `0..=100`, when the contract carries one.
    pub confidence: Option<u8>,
    /// Raw token as received, for diagnostics.
    pub token: Option<String>,
}

impl GatewayVerdict {
    /// Apply the fail-closed verdict rule to a raw token.
    ///
    /// Tokens that are neither `REAL` nor `FAKE` are logged; they may mean
    /// the gateway's response format changed.
    #[must_use]
    pub fn from_token(token: Option<String>, confidence: Option<u8>) -> Self {
        let verdict = Verdict::from_token(token.as_deref());
        let recognized = token
            .as_deref()
            .map(|t| t.trim().to_uppercase())
            .is_some_and(|t| t == "REAL" || t == "FAKE");
        if !recognized {
            tracing::warn!(token = ?token, "unrecognized verdict token; defaulting to FAKE");
        }
        Self {
            verdict,
            confidence: confidence.map(|c| c.min(100)),
            token,
        }
    }
}

/// Capability to classify one article.
///
/// Implementations issue exactly one request per call and never retry.
pub trait ClassifierGateway {
    fn classify(
        &self,
        article: &ArticleInput,
    ) -> impl Future<Output = Result<GatewayVerdict, GatewayError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// Gateway selected from configuration.
#[derive(Debug, Clone)]
pub enum Gateway {
    Html(HtmlFormGateway),
    Json(JsonGateway),
}

impl Gateway {
    /// Build the adapter named by `config.contract`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = GatewayHttp::new(config.url.clone(), &config.user_agent)?;
        Ok(match config.contract {
            GatewayContract::Html => Self::Html(HtmlFormGateway::new(http)),
            GatewayContract::Json => Self::Json(JsonGateway::new(http)),
        })
    }
}

impl ClassifierGateway for Gateway {
    async fn classify(&self, article: &ArticleInput) -> Result<GatewayVerdict, GatewayError> {
        match self {
            Self::Html(gateway) => gateway.classify(article).await,
            Self::Json(gateway) => gateway.classify(article).await,
        }
    }
}
