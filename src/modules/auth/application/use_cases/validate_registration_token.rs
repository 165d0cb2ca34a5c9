use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::ports::outgoing::registration_token_repository::RegistrationTokenRepository;
use crate::modules::auth::application::services::token_secret;

#[derive(Debug, thiserror::Error)]
pub enum ValidateTokenError {
    #[error("Invalid or expired registration token")]
    InvalidOrExpired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Read-only pre-check used by the signup page. Never consumes the token.
#[async_trait]
pub trait IValidateRegistrationTokenUseCase: Send + Sync {
    /// Returns the email the token is bound to.
    async fn execute(&self, secret: &str) -> Result<String, ValidateTokenError>;
}

pub struct ValidateRegistrationTokenUseCase<R>
where
    R: RegistrationTokenRepository + Send + Sync,
{
    token_repository: R,
}

impl<R> ValidateRegistrationTokenUseCase<R>
where
    R: RegistrationTokenRepository + Send + Sync,
{
    pub fn new(token_repository: R) -> Self {
        Self { token_repository }
    }
}

#[async_trait]
impl<R> IValidateRegistrationTokenUseCase for ValidateRegistrationTokenUseCase<R>
where
    R: RegistrationTokenRepository + Send + Sync,
{
    async fn execute(&self, secret: &str) -> Result<String, ValidateTokenError> {
        let token = self
            .token_repository
            .find_by_hash(&token_secret::hash_secret(secret))
            .await
            .map_err(|e| ValidateTokenError::RepositoryError(e.to_string()))?
            .ok_or(ValidateTokenError::InvalidOrExpired)?;

        if !token.is_valid(Utc::now()) {
            return Err(ValidateTokenError::InvalidOrExpired);
        }

        Ok(token.email)
    }
}
