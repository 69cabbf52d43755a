use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::model::{RepoSummary, SearchPage};

use super::catalog::user_agent;
use super::traits::SearchOperations;

/// Queries the GitHub repository search API.
#[derive(Clone)]
pub struct GithubService {
    client: Client,
    search_url: String,
    /// GitHub token for API authentication (optional)
    github_token: Option<String>,
    cancel_token: CancellationToken,
}

impl GithubService {
    /// Create a new GithubService
    pub fn new(cancel_token: CancellationToken) -> Self {
        Self::new_with_config(cancel_token, ServiceConfig::default())
    }

    pub fn new_with_config(cancel_token: CancellationToken, config: ServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeouts.search_request)
            .user_agent(user_agent())
            .build()
            .unwrap_or_default();

        let github_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok();

        Self {
            client,
            search_url: config.endpoints.search_url,
            github_token,
            cancel_token,
        }
    }
}

impl SearchOperations for GithubService {
    async fn search_repositories(&self, language: &str) -> Result<Vec<RepoSummary>, ApiError> {
        if self.cancel_token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let url = search_url(&self.search_url, language);
        debug!(%language, "Searching repositories");

        let mut req = self.client.get(&url);
        if let Some(token) = &self.github_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.as_u16() == 403 || status.as_u16() == 429 {
            let remaining = resp
                .headers()
                .get("x-ratelimit-remaining")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(0);

            if remaining == 0 {
                warn!(%language, "GitHub search rate limit exceeded");
                return Err(ApiError::RateLimited);
            }
        }

        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        parse_search_page(&body)
    }
}

/// Build the search URL for a language, sorted by stars descending.
/// The language filter is keyed by the catalog entry's display title.
fn search_url(base: &str, language: &str) -> String {
    format!(
        "{}?q=language:{}&sort=stars&order=desc",
        base,
        urlencoding(language)
    )
}

/// Parse a search response body into its result items.
pub(crate) fn parse_search_page(body: &str) -> Result<Vec<RepoSummary>, ApiError> {
    let page: SearchPage =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(page.items)
}

/// Percent-encode the characters that appear in catalog titles and would
/// break the query string ("Emacs Lisp", "C++", "C#").
fn urlencoding(s: &str) -> String {
    s.replace('%', "%25")
        .replace(' ', "%20")
        .replace('+', "%2B")
        .replace('#', "%23")
}
