use std::time::Duration;

/// Fixed location of the language catalog resource.
pub const CATALOG_URL: &str =
    "https://raw.githubusercontent.com/kamranahmedse/githunt/master/src/components/filters/language-filter/languages.json";

/// GitHub repository search endpoint.
pub const SEARCH_URL: &str = "https://api.github.com/search/repositories";

#[derive(Debug, Clone)]
pub struct Timeouts {
    pub catalog_request: Duration,
    pub search_request: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            catalog_request: Duration::from_secs(30),
            search_request: Duration::from_secs(30),
        }
    }
}

impl Timeouts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog_request(mut self, timeout: Duration) -> Self {
        self.catalog_request = timeout;
        self
    }

    pub fn with_search_request(mut self, timeout: Duration) -> Self {
        self.search_request = timeout;
        self
    }
}

/// Remote endpoints the services talk to. Overridable so tests and
/// mirrors can point elsewhere.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub catalog_url: String,
    pub search_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            catalog_url: CATALOG_URL.to_string(),
            search_url: SEARCH_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub endpoints: Endpoints,
    pub timeouts: Timeouts,
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}
