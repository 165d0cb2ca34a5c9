use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::documents::application::domain::entities::{DocumentStatus, DocumentType};
use crate::modules::onboarding::application::domain::entities::ProfileStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct DashboardCounts {
    pub total_employees: u64,
    pub pending_applications: u64,
    pub visa_employees: u64,
    pub active_tokens: u64,
}

/// One F1-tracked employee with their checklist slots, as stored.
#[derive(Debug, Clone)]
pub struct VisaEmployeeRow {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub email: String,
    pub profile_status: ProfileStatus,
    pub visa_end_date: Option<NaiveDate>,
    pub checklist: Vec<(DocumentType, DocumentStatus)>,
}

/// A valid unconsumed registration token whose email has no account yet.
#[derive(Debug, Clone)]
pub struct OpenTokenRow {
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Read-only aggregation for the HR dashboards. One implementation over the
/// relational store; no mutation goes through here.
#[async_trait]
pub trait HrQuery {
    async fn dashboard_counts(&self, now: DateTime<Utc>) -> Result<DashboardCounts, String>;

    /// Every profile tracked by the visa checklist, checklist slots included.
    async fn visa_employees(&self) -> Result<Vec<VisaEmployeeRow>, String>;

    async fn open_tokens_without_account(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<OpenTokenRow>, String>;
}
