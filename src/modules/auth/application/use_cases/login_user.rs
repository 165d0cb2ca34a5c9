use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, token_provider::TokenProvider, user_query::UserQuery,
};
use crate::modules::onboarding::application::domain::entities::ProfileStatus;
use crate::modules::onboarding::application::ports::outgoing::ProfileQuery;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Where the frontend should land the user after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LandingPage {
    HrHome,
    Onboarding,
    Dashboard,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub session_token: String,
    pub landing_page: LandingPage,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    /// `identifier` is the account email; usernames are also accepted.
    async fn execute(&self, identifier: &str, password: &str) -> Result<LoginOutput, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
    profile_query: Arc<dyn ProfileQuery + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        user_query: Q,
        profile_query: Arc<dyn ProfileQuery + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            profile_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, identifier: &str, password: &str) -> Result<LoginOutput, LoginError> {
        // One opaque error for every credential failure.
        let by_email = self
            .user_query
            .find_by_email(identifier)
            .await
            .map_err(LoginError::RepositoryError)?;
        let user = match by_email {
            Some(user) => user,
            None => self
                .user_query
                .find_by_username(identifier)
                .await
                .map_err(LoginError::RepositoryError)?
                .ok_or(LoginError::InvalidCredentials)?,
        };

        let verified = self
            .password_hasher
            .verify_password(password, &user.password_hash)
            .map_err(LoginError::RepositoryError)?;
        if !verified {
            return Err(LoginError::InvalidCredentials);
        }

        let landing_page = if user.role == Role::Hr {
            LandingPage::HrHome
        } else {
            let profile = self
                .profile_query
                .find_by_user_id(user.id)
                .await
                .map_err(LoginError::RepositoryError)?;
            match profile.map(|p| p.status) {
                Some(ProfileStatus::Approved) => LandingPage::Dashboard,
                _ => LandingPage::Onboarding,
            }
        };

        let session_token = self
            .token_provider
            .generate_session_token(user.id, user.role)
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        Ok(LoginOutput {
            user,
            session_token,
            landing_page,
        })
    }
}
