use std::sync::Arc;

use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::services::jwt::{JwtConfig, JwtTokenService};

/// A token provider keyed on a fixed test secret, plus one valid HR token
/// and one valid employee token signed with it.
pub fn test_token_provider() -> (Arc<dyn TokenProvider + Send + Sync>, String, String) {
    let service = JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only".to_string(),
        issuer: "onboard-backend".to_string(),
        access_token_expiry: 3600,
    });

    let hr_token = service
        .generate_session_token(Uuid::new_v4(), Role::Hr)
        .unwrap();
    let employee_token = service
        .generate_session_token(Uuid::new_v4(), Role::Employee)
        .unwrap();

    (Arc::new(service), hr_token, employee_token)
}
