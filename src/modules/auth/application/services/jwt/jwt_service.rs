use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    SessionClaims, TokenError, TokenProvider,
};

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,          // User ID
    pub role: Role,         // employee | hr
    pub exp: i64,           // Expiration timestamp
    pub token_type: String, // Always "access"
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_session_token(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.access_token_expiry);
        let claims = JwtClaims {
            sub: user_id,
            role,
            exp: expiration.timestamp(),
            token_type: "access".to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::GenerationFailed(e.to_string()))
    }

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // We will enforce manually

        let decoded = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        if decoded.claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        if decoded.claims.token_type != "access" {
            return Err(TokenError::Invalid);
        }

        Ok(SessionClaims {
            user_id: decoded.claims.sub,
            role: decoded.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "testsecretkey".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 3600,
        })
    }

    #[test]
    fn test_session_token_round_trip() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.generate_session_token(user_id, Role::Hr).unwrap();
        let claims = svc.verify_session_token(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.role, Role::Hr);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let svc = JwtTokenService::new(JwtConfig {
            secret_key: "testsecretkey".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: -10,
        });

        let token = svc
            .generate_session_token(Uuid::new_v4(), Role::Employee)
            .unwrap();

        assert!(matches!(
            svc.verify_session_token(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            service().verify_session_token("not-a-jwt"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "differentsecret".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 3600,
        });

        let token = other
            .generate_session_token(Uuid::new_v4(), Role::Employee)
            .unwrap();

        assert!(service().verify_session_token(&token).is_err());
    }
}
