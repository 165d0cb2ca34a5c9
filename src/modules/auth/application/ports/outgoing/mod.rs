pub mod password_hasher;
pub mod registration_token_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use registration_token_repository::{RegistrationTokenRepository, TokenRepositoryError};
pub use user_repository::{UserRepository, UserRepositoryError};
