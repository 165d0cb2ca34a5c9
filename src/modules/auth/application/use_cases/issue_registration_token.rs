use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::RegistrationToken;
use crate::modules::auth::application::ports::outgoing::{
    registration_token_repository::RegistrationTokenRepository, user_query::UserQuery,
};
use crate::modules::auth::application::services::token_secret;
use crate::modules::email::application::ports::outgoing::UserEmailNotifier;

/// Invitation links die after three hours.
const TOKEN_TTL: Duration = Duration::hours(3);

#[derive(Debug, thiserror::Error)]
pub enum IssueTokenError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("An account with this email already exists")]
    DuplicateUser,

    #[error("A valid registration token already exists for this email")]
    DuplicateToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct IssuedToken {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait IIssueRegistrationTokenUseCase: Send + Sync {
    async fn execute(&self, email: String) -> Result<IssuedToken, IssueTokenError>;
}

pub struct IssueRegistrationTokenUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: RegistrationTokenRepository + Send + Sync,
{
    user_query: Q,
    token_repository: R,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R> IssueRegistrationTokenUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: RegistrationTokenRepository + Send + Sync,
{
    pub fn new(user_query: Q, token_repository: R, email_notifier: Arc<dyn UserEmailNotifier>) -> Self {
        Self {
            user_query,
            token_repository,
            email_notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IIssueRegistrationTokenUseCase for IssueRegistrationTokenUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: RegistrationTokenRepository + Send + Sync,
{
    async fn execute(&self, email: String) -> Result<IssuedToken, IssueTokenError> {
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(IssueTokenError::InvalidEmail);
        }

        // An email that already has an account never gets another invitation.
        if let Ok(Some(_)) = self.user_query.find_by_email(&email).await {
            return Err(IssueTokenError::DuplicateUser);
        }

        // An expired open token is fine to shadow with a fresh one; an
        // unexpired one is not.
        let now = Utc::now();
        if let Some(existing) = self
            .token_repository
            .find_open_by_email(&email)
            .await
            .map_err(|e| IssueTokenError::RepositoryError(e.to_string()))?
        {
            if existing.is_valid(now) {
                return Err(IssueTokenError::DuplicateToken);
            }
        }

        let secret = token_secret::generate_secret();
        let token = RegistrationToken {
            id: Uuid::new_v4(),
            email: email.clone(),
            token_hash: token_secret::hash_secret(&secret),
            expires_at: now + TOKEN_TTL,
            used: false,
            created_at: now,
        };

        self.token_repository
            .insert(token.clone())
            .await
            .map_err(|e| IssueTokenError::RepositoryError(e.to_string()))?;

        // Fire-and-forget: the token stays issued even if the invitation
        // email never leaves the building.
        if let Err(e) = self
            .email_notifier
            .send_registration_invitation(&email, &secret, token.expires_at)
            .await
        {
            tracing::warn!(email = %email, error = %e, "Failed to send invitation email");
        }

        Ok(IssuedToken {
            email,
            expires_at: token.expires_at,
        })
    }
}
