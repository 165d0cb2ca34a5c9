use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::documents::application::domain::checklist::{compute_next_step, NextStep};
use crate::modules::hr::application::ports::outgoing::{HrQuery, VisaEmployeeRow};
use crate::modules::onboarding::application::domain::entities::ProfileStatus;

#[derive(Debug, thiserror::Error)]
pub enum VisaInProgressError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// One line on the "in progress" board: who, and what HR is waiting on.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct VisaProgressRow {
    /// Absent for invited people who have not registered yet
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    #[schema(example = "OPT EAD awaiting HR review")]
    pub pending_action: String,
}

fn display_name(row: &VisaEmployeeRow) -> String {
    let first = row
        .preferred_name
        .clone()
        .or_else(|| row.first_name.clone())
        .unwrap_or_default();
    let last = row.last_name.clone().unwrap_or_default();

    let full = format!("{} {}", first, last).trim().to_string();
    if full.is_empty() {
        row.email.clone()
    } else {
        full
    }
}

#[async_trait]
pub trait IVisaInProgressUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<VisaProgressRow>, VisaInProgressError>;
}

/// Merges three sources of "something is still outstanding": approved
/// employees with an unfinished checklist, applications pending HR review,
/// and invitations nobody has acted on yet.
pub struct VisaInProgressUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    hr_query: Q,
}

impl<Q> VisaInProgressUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    pub fn new(hr_query: Q) -> Self {
        Self { hr_query }
    }
}

#[async_trait]
impl<Q> IVisaInProgressUseCase for VisaInProgressUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<VisaProgressRow>, VisaInProgressError> {
        let employees = self
            .hr_query
            .visa_employees()
            .await
            .map_err(VisaInProgressError::RepositoryError)?;

        let mut rows: Vec<VisaProgressRow> = Vec::new();

        for employee in &employees {
            let pending_action = match employee.profile_status {
                ProfileStatus::Pending => {
                    Some("Onboarding application pending review".to_string())
                }
                ProfileStatus::Approved => {
                    let next_step = compute_next_step(&employee.checklist);
                    if next_step == NextStep::Complete {
                        None
                    } else {
                        Some(next_step.description())
                    }
                }
                // Never-submitted and rejected applications show up on the
                // onboarding board, not here.
                _ => None,
            };

            if let Some(pending_action) = pending_action {
                rows.push(VisaProgressRow {
                    user_id: Some(employee.user_id),
                    name: display_name(employee),
                    email: employee.email.clone(),
                    pending_action,
                });
            }
        }

        let open_tokens = self
            .hr_query
            .open_tokens_without_account(Utc::now())
            .await
            .map_err(VisaInProgressError::RepositoryError)?;

        for token in open_tokens {
            rows.push(VisaProgressRow {
                user_id: None,
                name: token.email.clone(),
                email: token.email,
                pending_action: "Registration token sent".to_string(),
            });
        }

        Ok(rows)
    }
}
