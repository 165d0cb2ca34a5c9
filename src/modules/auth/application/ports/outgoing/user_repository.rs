use crate::modules::auth::application::domain::entities::{Role, User};
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;

    async fn update_role(&self, user_id: Uuid, role: Role) -> Result<(), UserRepositoryError>;
}

#[derive(Debug)]
pub enum UserRepositoryError {
    UserAlreadyExists,
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::UserAlreadyExists => write!(f, "User already exists"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
