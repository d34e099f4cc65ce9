//! Legacy HTML contract.
//!
//! The classifier answers with a page like
//! `<html><body><h1>real</h1></body></html>`. The first `<h1>` carries the
//! verdict token and there is no confidence value.

use scraper::{Html, Selector};
use vf_core::ArticleInput;

use crate::error::GatewayError;
use crate::http::GatewayHttp;
use crate::{ClassifierGateway, GatewayVerdict};

/// Adapter for gateways that embed the verdict in markup.
#[derive(Debug, Clone)]
pub struct HtmlFormGateway {
    http: GatewayHttp,
}

impl HtmlFormGateway {
    #[must_use]
    pub const fn new(http: GatewayHttp) -> Self {
        Self { http }
    }
}

impl ClassifierGateway for HtmlFormGateway {
    async fn classify(&self, article: &ArticleInput) -> Result<GatewayVerdict, GatewayError> {
        let body = self.http.post_article(article).await?;
        Ok(GatewayVerdict::from_token(extract_heading_token(&body), None))
    }
}

/// Text content of the first `<h1>` in `html`, trimmed.
///
/// Returns `None` when the document has no `<h1>`.
#[must_use]
pub fn extract_heading_token(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h1").ok()?;
    document
        .select(&selector)
        .next()
        .map(|heading| heading.text().collect::<String>().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use vf_core::Verdict;

    #[rstest]
    #[case("<html><body><h1>real</h1></body></html>", Some("real"))]
    #[case("<html><body><h1>fake</h1></body></html>", Some("fake"))]
    #[case("<h1>\n  REAL \n</h1>", Some("REAL"))]
    #[case("<h1><span>Re</span>al</h1>", Some("Real"))]
    #[case("<h1>first</h1><h1>second</h1>", Some("first"))]
    #[case("<h2>real</h2>", None)]
    #[case("", None)]
    #[case("real", None)]
    fn heading_extraction(#[case] html: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_heading_token(html).as_deref(), expected);
    }

    #[rstest]
    #[case("<h1>real</h1>", Verdict::Real)]
    #[case("<h1>Real</h1>", Verdict::Real)]
    #[case("<h1>fake</h1>", Verdict::Fake)]
    #[case("<h1>unknown</h1>", Verdict::Fake)]
    #[case("<p>nothing here</p>", Verdict::Fake)]
    fn markup_to_verdict(#[case] html: &str, #[case] expected: Verdict) {
        let verdict = GatewayVerdict::from_token(extract_heading_token(html), None);
        assert_eq!(verdict.verdict, expected);
        assert_eq!(verdict.confidence, None);
    }
}
