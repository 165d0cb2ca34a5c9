use crate::modules::auth::application::domain::entities::Role;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub user_id: Uuid,
    pub role: Role,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Session credential issuance and verification, opaque to the workflows.
pub trait TokenProvider: Send + Sync {
    fn generate_session_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError>;

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
