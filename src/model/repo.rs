use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Deserialize;

/// One repository drawn from a search result page.
///
/// Field names follow our own vocabulary; the `rename` attributes map
/// them onto the GitHub wire format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    #[serde(rename = "open_issues_count")]
    pub open_issues: u64,
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RepoSummary {
    /// Description, or the placeholder shown when a repository has none.
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("No description available")
    }
}

/// Wire shape of the search endpoint response body.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<RepoSummary>,
}

/// Pick one repository uniformly at random from a result page.
pub fn pick_random(mut items: Vec<RepoSummary>) -> Option<RepoSummary> {
    if items.is_empty() {
        return None;
    }
    let idx = rand::thread_rng().gen_range(0..items.len());
    Some(items.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> RepoSummary {
        RepoSummary {
            name: name.to_string(),
            full_name: format!("owner/{}", name),
            description: None,
            stars: 0,
            forks: 0,
            open_issues: 0,
            url: format!("https://github.com/owner/{}", name),
            updated_at: None,
        }
    }

    #[test]
    fn test_pick_random_empty() {
        assert_eq!(pick_random(Vec::new()), None);
    }

    #[test]
    fn test_pick_random_single() {
        let picked = pick_random(vec![repo("only")]).unwrap();
        assert_eq!(picked.name, "only");
    }

    #[test]
    fn test_pick_random_stays_within_page() {
        let items = vec![repo("a"), repo("b"), repo("c")];
        for _ in 0..50 {
            let picked = pick_random(items.clone()).unwrap();
            assert!(items.contains(&picked));
        }
    }

    #[test]
    fn test_description_fallback() {
        let mut r = repo("x");
        assert_eq!(r.description_or_default(), "No description available");

        r.description = Some("a tool".to_string());
        assert_eq!(r.description_or_default(), "a tool");
    }
}
