use crate::error::ApiError;
use crate::model::{Language, RepoSummary};

pub trait CatalogOperations: Clone + Send + Sync {
    fn load_catalog(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Language>, ApiError>> + Send;
}

pub trait SearchOperations: Clone + Send + Sync {
    fn search_repositories(
        &self,
        language: &str,
    ) -> impl std::future::Future<Output = Result<Vec<RepoSummary>, ApiError>> + Send;
}
