use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::entities::UserProfile;
use crate::modules::onboarding::application::ports::outgoing::ProfileQuery;

#[derive(Debug, thiserror::Error)]
pub enum FetchProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchMyProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError>;
}

pub struct FetchMyProfileUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    profile_query: Q,
}

impl<Q> FetchMyProfileUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> IFetchMyProfileUseCase for FetchMyProfileUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        self.profile_query
            .find_by_user_id(user_id)
            .await
            .map_err(FetchProfileError::RepositoryError)?
            .ok_or(FetchProfileError::ProfileNotFound)
    }
}
