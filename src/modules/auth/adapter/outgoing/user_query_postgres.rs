use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;

use super::sea_orm_entity::users::{Column, Entity as UserEntity, Model as UserModel};
use super::user_repository_postgres::UserRepositoryPostgres;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map(model: Option<UserModel>) -> Result<Option<User>, String> {
        model
            .map(|m| UserRepositoryPostgres::map_to_user(m).map_err(|e| e.to_string()))
            .transpose()
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;
        Self::map(model)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, String> {
        let model = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;
        Self::map(model)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        let model = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;
        Self::map(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(username: &str, email: &str) -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: "employee".to_string(),
            first_name: None,
            last_name: None,
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_find_by_username_maps_role() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("ada", "ada@x.com")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let user = query.find_by_username("ada").await.unwrap().unwrap();
        assert_eq!(user.role, Role::Employee);
        assert_eq!(user.email, "ada@x.com");
    }

    #[tokio::test]
    async fn test_find_by_email_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        assert!(query.find_by_email("nobody@x.com").await.unwrap().is_none());
    }
}
