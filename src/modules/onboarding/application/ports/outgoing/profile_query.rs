use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::entities::{ProfileStatus, UserProfile};

/// Row shape for HR triage lists and search results.
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct ProfileSummary {
    pub profile_id: Uuid,
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub email: String,
    pub status: ProfileStatus,
}

#[async_trait]
pub trait ProfileQuery {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, String>;

    async fn find_by_id(&self, profile_id: Uuid) -> Result<Option<UserProfile>, String>;

    async fn list_by_status(
        &self,
        status: ProfileStatus,
    ) -> Result<Vec<ProfileSummary>, String>;

    /// Case-insensitive substring match over first/last/preferred name and
    /// email.
    async fn search(&self, query: &str) -> Result<Vec<ProfileSummary>, String>;
}
