use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::model::Language;

use super::traits::CatalogOperations;

/// Loads the language catalog from its remote location.
#[derive(Clone)]
pub struct CatalogService {
    client: Client,
    url: String,
    cancel_token: CancellationToken,
}

impl CatalogService {
    /// Create a new CatalogService
    pub fn new(cancel_token: CancellationToken) -> Self {
        Self::new_with_config(cancel_token, ServiceConfig::default())
    }

    pub fn new_with_config(cancel_token: CancellationToken, config: ServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeouts.catalog_request)
            .user_agent(user_agent())
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: config.endpoints.catalog_url,
            cancel_token,
        }
    }
}

impl CatalogOperations for CatalogService {
    async fn load_catalog(&self) -> Result<Vec<Language>, ApiError> {
        if self.cancel_token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        debug!(url = %self.url, "Loading language catalog");

        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        parse_catalog(&body)
    }
}

/// Parse a catalog body, a bare JSON array of `{title, value}` entries.
/// Entries are taken verbatim in response order.
pub(crate) fn parse_catalog(body: &str) -> Result<Vec<Language>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) fn user_agent() -> String {
    format!("reposcout/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_preserves_order() {
        let body = r#"[
            {"title": "All", "value": ""},
            {"title": "Rust", "value": "rust"},
            {"title": "Emacs Lisp", "value": "emacs-lisp"}
        ]"#;

        let catalog = parse_catalog(body).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].title, "All");
        assert_eq!(catalog[1].value, "rust");
        assert_eq!(catalog[2].title, "Emacs Lisp");
    }

    #[test]
    fn test_parse_catalog_empty_array() {
        let catalog = parse_catalog("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_catalog_malformed() {
        assert!(matches!(
            parse_catalog("{ not a catalog }"),
            Err(ApiError::Decode(_))
        ));
    }
}
