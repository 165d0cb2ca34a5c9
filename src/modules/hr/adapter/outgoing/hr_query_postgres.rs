use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::registration_tokens::{
    Column as TokenColumn, Entity as TokenEntity,
};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::documents::adapter::outgoing::sea_orm_entity::documents::{
    Column as DocumentColumn, Entity as DocumentEntity,
};
use crate::modules::documents::application::domain::entities::{DocumentStatus, DocumentType};
use crate::modules::hr::application::ports::outgoing::{
    DashboardCounts, HrQuery, OpenTokenRow, VisaEmployeeRow,
};
use crate::modules::onboarding::adapter::outgoing::sea_orm_entity::user_profiles::{
    Column as ProfileColumn, Entity as ProfileEntity,
};
use crate::modules::onboarding::application::domain::entities::{ProfileStatus, VisaCategory};

#[derive(Clone, Debug)]
pub struct HrQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HrQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HrQuery for HrQueryPostgres {
    async fn dashboard_counts(&self, now: DateTime<Utc>) -> Result<DashboardCounts, String> {
        let total_employees = UserEntity::find()
            .filter(UserColumn::Role.eq(Role::Employee.as_str()))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        let pending_applications = ProfileEntity::find()
            .filter(ProfileColumn::Status.eq(ProfileStatus::Pending.as_str()))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        let visa_employees = ProfileEntity::find()
            .filter(ProfileColumn::VisaType.eq(VisaCategory::F1CptOpt.as_str()))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        let active_tokens = TokenEntity::find()
            .filter(TokenColumn::Used.eq(false))
            .filter(TokenColumn::ExpiresAt.gt(now))
            .count(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(DashboardCounts {
            total_employees,
            pending_applications,
            visa_employees,
            active_tokens,
        })
    }

    async fn visa_employees(&self) -> Result<Vec<VisaEmployeeRow>, String> {
        let profiles = ProfileEntity::find()
            .filter(ProfileColumn::VisaType.eq(VisaCategory::F1CptOpt.as_str()))
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        if profiles.is_empty() {
            return Ok(vec![]);
        }

        let user_ids: Vec<Uuid> = profiles.iter().map(|p| p.user_id).collect();
        let checklist: Vec<&str> = DocumentType::VISA_CHECKLIST
            .iter()
            .map(|t| t.as_str())
            .collect();

        let documents = DocumentEntity::find()
            .filter(DocumentColumn::UserId.is_in(user_ids))
            .filter(DocumentColumn::DocType.is_in(checklist))
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        let mut slots_by_user: HashMap<Uuid, Vec<(DocumentType, DocumentStatus)>> = HashMap::new();
        for doc in documents {
            let doc_type = DocumentType::parse(&doc.doc_type)
                .ok_or_else(|| format!("Unknown document type in store: {}", doc.doc_type))?;
            let status = DocumentStatus::parse(&doc.status)
                .ok_or_else(|| format!("Unknown document status in store: {}", doc.status))?;
            slots_by_user
                .entry(doc.user_id)
                .or_default()
                .push((doc_type, status));
        }

        profiles
            .into_iter()
            .map(|p| {
                let profile_status = ProfileStatus::parse(&p.status)
                    .ok_or_else(|| format!("Unknown profile status in store: {}", p.status))?;

                Ok(VisaEmployeeRow {
                    user_id: p.user_id,
                    first_name: p.first_name,
                    last_name: p.last_name,
                    preferred_name: p.preferred_name,
                    email: p.email,
                    profile_status,
                    visa_end_date: p.visa_end_date,
                    checklist: slots_by_user.remove(&p.user_id).unwrap_or_default(),
                })
            })
            .collect()
    }

    async fn open_tokens_without_account(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<OpenTokenRow>, String> {
        let tokens = TokenEntity::find()
            .filter(TokenColumn::Used.eq(false))
            .filter(TokenColumn::ExpiresAt.gt(now))
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        if tokens.is_empty() {
            return Ok(vec![]);
        }

        let emails: Vec<String> = tokens.iter().map(|t| t.email.clone()).collect();
        let registered: HashSet<String> = UserEntity::find()
            .filter(UserColumn::Email.is_in(emails))
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?
            .into_iter()
            .map(|u| u.email)
            .collect();

        Ok(tokens
            .into_iter()
            .filter(|t| !registered.contains(&t.email))
            .map(|t| OpenTokenRow {
                email: t.email,
                created_at: t.created_at.with_timezone(&Utc),
                expires_at: t.expires_at.with_timezone(&Utc),
            })
            .collect())
    }
}
