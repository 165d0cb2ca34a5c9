use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "28800".to_string()) // Default 8 hours
            .parse::<i64>()
            .expect("Invalid JWT_ACCESS_EXPIRY value");

        Self {
            secret_key,
            issuer: String::from("onboard-backend"),
            access_token_expiry,
        }
    }
}
