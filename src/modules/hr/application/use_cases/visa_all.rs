use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::documents::application::domain::entities::DocumentStatus;
use crate::modules::hr::application::ports::outgoing::HrQuery;

#[derive(Debug, thiserror::Error)]
pub enum VisaAllError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct VisaEmployeeSummary {
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub email: String,
    pub visa_end_date: Option<NaiveDate>,
    /// Whole days until the work authorization ends; negative once expired
    pub days_remaining: Option<i64>,
    /// Approved checklist slots, in checklist order
    pub approved_documents: usize,
}

#[async_trait]
pub trait IVisaAllUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<VisaEmployeeSummary>, VisaAllError>;
}

/// The "all visa employees" board: anyone with at least one approved
/// checklist document, ordered by last then first name.
pub struct VisaAllUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    hr_query: Q,
}

impl<Q> VisaAllUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    pub fn new(hr_query: Q) -> Self {
        Self { hr_query }
    }
}

#[async_trait]
impl<Q> IVisaAllUseCase for VisaAllUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<VisaEmployeeSummary>, VisaAllError> {
        let employees = self
            .hr_query
            .visa_employees()
            .await
            .map_err(VisaAllError::RepositoryError)?;

        let today = Utc::now().date_naive();

        let mut rows: Vec<VisaEmployeeSummary> = employees
            .into_iter()
            .filter_map(|e| {
                let approved_documents = e
                    .checklist
                    .iter()
                    .filter(|(_, status)| *status == DocumentStatus::Approved)
                    .count();

                if approved_documents == 0 {
                    return None;
                }

                let days_remaining = e
                    .visa_end_date
                    .map(|end| end.signed_duration_since(today).num_days());

                Some(VisaEmployeeSummary {
                    user_id: e.user_id,
                    first_name: e.first_name,
                    last_name: e.last_name,
                    preferred_name: e.preferred_name,
                    email: e.email,
                    visa_end_date: e.visa_end_date,
                    days_remaining,
                    approved_documents,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            (a.last_name.as_deref(), a.first_name.as_deref())
                .cmp(&(b.last_name.as_deref(), b.first_name.as_deref()))
        });

        Ok(rows)
    }
}
