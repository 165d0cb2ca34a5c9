use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::draft::{DraftValidationError, ProfileDraft};
use crate::modules::onboarding::application::domain::entities::UserProfile;
use crate::modules::onboarding::application::ports::outgoing::{
    ProfileQuery, ProfileRepository, ProfileRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum SubmitOnboardingError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Application cannot be edited in its current state")]
    NotEditable,

    #[error(transparent)]
    Validation(#[from] DraftValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISubmitOnboardingUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        draft: ProfileDraft,
    ) -> Result<UserProfile, SubmitOnboardingError>;
}

pub struct SubmitOnboardingUseCase<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    profile_query: Q,
    profile_repository: R,
}

impl<Q, R> SubmitOnboardingUseCase<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    pub fn new(profile_query: Q, profile_repository: R) -> Self {
        Self {
            profile_query,
            profile_repository,
        }
    }
}

#[async_trait]
impl<Q, R> ISubmitOnboardingUseCase for SubmitOnboardingUseCase<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        draft: ProfileDraft,
    ) -> Result<UserProfile, SubmitOnboardingError> {
        let profile = self
            .profile_query
            .find_by_user_id(user_id)
            .await
            .map_err(SubmitOnboardingError::RepositoryError)?
            .ok_or(SubmitOnboardingError::ProfileNotFound)?;

        // Pending applications are frozen until HR decides; approved ones
        // are read-only for good.
        if !profile.status.can_submit() {
            return Err(SubmitOnboardingError::NotEditable);
        }

        draft.validate()?;

        let updated = self
            .profile_repository
            .apply_submission(user_id, draft)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::ProfileNotFound => SubmitOnboardingError::ProfileNotFound,
                other => SubmitOnboardingError::RepositoryError(other.to_string()),
            })?;

        Ok(updated)
    }
}
