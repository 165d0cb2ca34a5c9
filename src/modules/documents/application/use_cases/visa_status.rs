use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::documents::application::domain::checklist::{compute_next_step, NextStep};
use crate::modules::documents::application::domain::entities::Document;
use crate::modules::documents::application::ports::outgoing::DocumentRepository;
use crate::modules::onboarding::application::ports::outgoing::ProfileQuery;

#[derive(Debug, thiserror::Error)]
pub enum VisaStatusError {
    #[error("The visa checklist does not apply to this employee")]
    NotApplicable,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VisaStatus {
    pub next_step: NextStep,
    /// Human-readable version of the next step
    #[schema(example = "OPT EAD awaiting HR review")]
    pub message: String,
    pub documents: Vec<Document>,
}

#[async_trait]
pub trait IVisaStatusUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<VisaStatus, VisaStatusError>;
}

pub struct VisaStatusUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    document_repository: R,
    profile_query: Arc<dyn ProfileQuery + Send + Sync>,
}

impl<R> VisaStatusUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    pub fn new(document_repository: R, profile_query: Arc<dyn ProfileQuery + Send + Sync>) -> Self {
        Self {
            document_repository,
            profile_query,
        }
    }
}

#[async_trait]
impl<R> IVisaStatusUseCase for VisaStatusUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<VisaStatus, VisaStatusError> {
        let tracked = self
            .profile_query
            .find_by_user_id(user_id)
            .await
            .map_err(VisaStatusError::RepositoryError)?
            .map(|p| p.is_visa_tracked())
            .unwrap_or(false);

        if !tracked {
            return Err(VisaStatusError::NotApplicable);
        }

        let documents = self
            .document_repository
            .list_checklist_for_user(user_id)
            .await
            .map_err(|e| VisaStatusError::RepositoryError(e.to_string()))?;

        let slots: Vec<_> = documents.iter().map(|d| (d.doc_type, d.status)).collect();
        let next_step = compute_next_step(&slots);

        Ok(VisaStatus {
            next_step,
            message: next_step.description(),
            documents,
        })
    }
}
