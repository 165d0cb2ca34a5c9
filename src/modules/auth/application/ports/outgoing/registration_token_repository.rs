use crate::modules::auth::application::domain::entities::RegistrationToken;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait RegistrationTokenRepository {
    async fn insert(&self, token: RegistrationToken) -> Result<(), TokenRepositoryError>;

    /// Lookup is by digest only; raw secrets are never persisted.
    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RegistrationToken>, TokenRepositoryError>;

    /// Most recent unconsumed token for an email, if any. Used for the
    /// duplicate-invitation check.
    async fn find_open_by_email(
        &self,
        email: &str,
    ) -> Result<Option<RegistrationToken>, TokenRepositoryError>;

    async fn mark_used(&self, token_id: Uuid) -> Result<(), TokenRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Token not found")]
    TokenNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
