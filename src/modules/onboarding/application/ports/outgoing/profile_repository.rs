use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::draft::ProfileDraft;
use crate::modules::onboarding::application::domain::entities::{ProfileStatus, UserProfile};

#[async_trait]
pub trait ProfileRepository {
    /// Skeleton profile created at registration, status NeverSubmitted.
    async fn create_initial(
        &self,
        user_id: Uuid,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<UserProfile, ProfileRepositoryError>;

    /// Overwrite the employee-owned fields, clear feedback, set Pending.
    /// The state-machine guard runs in the use case; this just persists.
    async fn apply_submission(
        &self,
        user_id: Uuid,
        draft: ProfileDraft,
    ) -> Result<UserProfile, ProfileRepositoryError>;

    /// HR decision: status + feedback only, never the employee fields.
    async fn set_review(
        &self,
        profile_id: Uuid,
        status: ProfileStatus,
        feedback: String,
    ) -> Result<(), ProfileRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
