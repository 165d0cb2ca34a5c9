use async_trait::async_trait;

use crate::modules::onboarding::application::domain::entities::ProfileStatus;
use crate::modules::onboarding::application::ports::outgoing::{ProfileQuery, ProfileSummary};

#[derive(Debug, thiserror::Error)]
pub enum ListProfilesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// HR triage list, one status bucket at a time.
#[async_trait]
pub trait IListProfilesByStatusUseCase: Send + Sync {
    async fn execute(&self, status: ProfileStatus) -> Result<Vec<ProfileSummary>, ListProfilesError>;
}

pub struct ListProfilesByStatusUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    profile_query: Q,
}

impl<Q> ListProfilesByStatusUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> IListProfilesByStatusUseCase for ListProfilesByStatusUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        status: ProfileStatus,
    ) -> Result<Vec<ProfileSummary>, ListProfilesError> {
        self.profile_query
            .list_by_status(status)
            .await
            .map_err(ListProfilesError::RepositoryError)
    }
}
