use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::RegistrationToken;
use crate::modules::auth::application::ports::outgoing::registration_token_repository::{
    RegistrationTokenRepository, TokenRepositoryError,
};

use super::sea_orm_entity::registration_tokens::{
    ActiveModel as TokenActiveModel, Column, Entity as TokenEntity, Model as TokenModel,
};

#[derive(Clone, Debug)]
pub struct RegistrationTokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegistrationTokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_token(model: TokenModel) -> RegistrationToken {
        RegistrationToken {
            id: model.id,
            email: model.email,
            token_hash: model.token_hash,
            expires_at: model.expires_at.with_timezone(&chrono::Utc),
            used: model.used,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl RegistrationTokenRepository for RegistrationTokenRepositoryPostgres {
    async fn insert(&self, token: RegistrationToken) -> Result<(), TokenRepositoryError> {
        let active = TokenActiveModel {
            id: Set(token.id),
            email: Set(token.email),
            token_hash: Set(token.token_hash),
            expires_at: Set(token.expires_at.into()),
            used: Set(token.used),
            created_at: Set(token.created_at.into()),
        };

        active
            .insert(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RegistrationToken>, TokenRepositoryError> {
        let model = TokenEntity::find()
            .filter(Column::TokenHash.eq(token_hash))
            .one(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_token))
    }

    async fn find_open_by_email(
        &self,
        email: &str,
    ) -> Result<Option<RegistrationToken>, TokenRepositoryError> {
        let model = TokenEntity::find()
            .filter(Column::Email.eq(email))
            .filter(Column::Used.eq(false))
            .order_by_desc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_token))
    }

    async fn mark_used(&self, token_id: Uuid) -> Result<(), TokenRepositoryError> {
        let token = TokenEntity::find_by_id(token_id)
            .one(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(TokenRepositoryError::TokenNotFound)?;

        let mut active: TokenActiveModel = token.into();
        active.used = Set(true);

        active
            .update(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
