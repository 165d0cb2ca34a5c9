use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{
    user_query::UserQuery, user_repository::UserRepository, UserRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum ChangeRoleError {
    #[error("User not found")]
    UserNotFound,

    #[error("Cannot change your own role")]
    CannotChangeOwnRole,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangeUserRoleUseCase: Send + Sync {
    async fn execute(
        &self,
        actor_id: Uuid,
        target_id: Uuid,
        role: Role,
    ) -> Result<(), ChangeRoleError>;
}

pub struct ChangeUserRoleUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
}

impl<Q, R> ChangeUserRoleUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(user_query: Q, user_repository: R) -> Self {
        Self {
            user_query,
            user_repository,
        }
    }
}

#[async_trait]
impl<Q, R> IChangeUserRoleUseCase for ChangeUserRoleUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor_id: Uuid,
        target_id: Uuid,
        role: Role,
    ) -> Result<(), ChangeRoleError> {
        // An HR user locking themselves out of the HR surface is never intended.
        if actor_id == target_id {
            return Err(ChangeRoleError::CannotChangeOwnRole);
        }

        self.user_query
            .find_by_id(target_id)
            .await
            .map_err(ChangeRoleError::RepositoryError)?
            .ok_or(ChangeRoleError::UserNotFound)?;

        self.user_repository
            .update_role(target_id, role)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangeRoleError::UserNotFound,
                other => ChangeRoleError::RepositoryError(other.to_string()),
            })
    }
}
