use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::entities::{ProfileStatus, UserProfile};
use crate::modules::onboarding::application::ports::outgoing::profile_query::{
    ProfileQuery, ProfileSummary,
};

use super::profile_repository_postgres::ProfileRepositoryPostgres;
use super::sea_orm_entity::user_profiles::{Column, Entity as ProfileEntity, Model as ProfileModel};

#[derive(Clone, Debug)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_summary(model: ProfileModel) -> Result<ProfileSummary, String> {
        let status = ProfileStatus::parse(&model.status)
            .ok_or_else(|| format!("Unknown profile status in store: {}", model.status))?;

        Ok(ProfileSummary {
            profile_id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            preferred_name: model.preferred_name,
            email: model.email,
            status,
        })
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, String> {
        let model = ProfileEntity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        model.map(ProfileRepositoryPostgres::map_to_profile).transpose()
    }

    async fn find_by_id(&self, profile_id: Uuid) -> Result<Option<UserProfile>, String> {
        let model = ProfileEntity::find_by_id(profile_id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        model.map(ProfileRepositoryPostgres::map_to_profile).transpose()
    }

    async fn list_by_status(&self, status: ProfileStatus) -> Result<Vec<ProfileSummary>, String> {
        let models = ProfileEntity::find()
            .filter(Column::Status.eq(status.as_str()))
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        models.into_iter().map(Self::map_to_summary).collect()
    }

    async fn search(&self, query: &str) -> Result<Vec<ProfileSummary>, String> {
        let pattern = format!("%{}%", query);

        let models = ProfileEntity::find()
            .filter(
                Condition::any()
                    .add(Expr::col(Column::FirstName).ilike(pattern.as_str()))
                    .add(Expr::col(Column::LastName).ilike(pattern.as_str()))
                    .add(Expr::col(Column::PreferredName).ilike(pattern.as_str()))
                    .add(Expr::col(Column::Email).ilike(pattern.as_str())),
            )
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        models.into_iter().map(Self::map_to_summary).collect()
    }
}
