use async_trait::async_trait;

use crate::modules::onboarding::application::ports::outgoing::{ProfileQuery, ProfileSummary};

#[derive(Debug, thiserror::Error)]
pub enum SearchEmployeesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISearchEmployeesUseCase: Send + Sync {
    async fn execute(&self, query: &str) -> Result<Vec<ProfileSummary>, SearchEmployeesError>;
}

pub struct SearchEmployeesUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    profile_query: Q,
}

impl<Q> SearchEmployeesUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> ISearchEmployeesUseCase for SearchEmployeesUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, query: &str) -> Result<Vec<ProfileSummary>, SearchEmployeesError> {
        // An empty query is a full directory listing; the store treats the
        // empty pattern as match-all.
        self.profile_query
            .search(query.trim())
            .await
            .map_err(SearchEmployeesError::RepositoryError)
    }
}
