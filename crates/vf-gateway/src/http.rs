//! Shared HTTP plumbing for gateway adapters.
//!
//! Both contracts send the same multipart form; they only differ in how the
//! response body is read. Status checks live here so adapters stay focused on
//! response mapping.

use vf_core::ArticleInput;

use crate::error::GatewayError;

/// Multipart field carrying the article body. The classifier expects
/// `maintext`, not `text`.
pub const TEXT_FIELD: &str = "maintext";

/// HTTP client bound to one gateway endpoint.
#[derive(Debug, Clone)]
pub struct GatewayHttp {
    http: reqwest::Client,
    url: String,
}

impl GatewayHttp {
    /// Build a client for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(url: impl Into<String>, user_agent: &str) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the article as a multipart form and return the body text of a
    /// successful response.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure or non-success status.
    pub async fn post_article(&self, article: &ArticleInput) -> Result<String, GatewayError> {
        let form = reqwest::multipart::Form::new()
            .text("title", article.title.clone())
            .text("author", article.author.clone())
            .text(TEXT_FIELD, article.text.clone());

        tracing::debug!(url = %self.url, "posting article to gateway");
        let resp = check_response(self.http.post(&self.url).multipart(form).send().await?).await?;
        Ok(resp.text().await?)
    }
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise
/// [`GatewayError::Status`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    if !resp.status().is_success() {
        return Err(GatewayError::Status {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
