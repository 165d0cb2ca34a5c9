use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::documents::application::domain::entities::DocumentStatus;
use crate::modules::documents::application::ports::outgoing::{
    DocumentRepository, DocumentRepositoryError,
};
use crate::modules::email::application::ports::outgoing::UserEmailNotifier;

#[derive(Debug, thiserror::Error)]
pub enum ReviewDocumentError {
    #[error("Document not found")]
    DocumentNotFound,

    #[error("Only pending documents can be reviewed")]
    NotPending,

    #[error("Feedback is required when rejecting")]
    FeedbackRequired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentDecision {
    Approve,
    Reject,
}

#[async_trait]
pub trait IReviewDocumentUseCase: Send + Sync {
    async fn execute(
        &self,
        document_id: Uuid,
        decision: DocumentDecision,
        feedback: Option<String>,
    ) -> Result<(), ReviewDocumentError>;
}

pub struct ReviewDocumentUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    document_repository: R,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    notifier: Arc<dyn UserEmailNotifier>,
}

impl<R> ReviewDocumentUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    pub fn new(
        document_repository: R,
        user_query: Arc<dyn UserQuery + Send + Sync>,
        notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            document_repository,
            user_query,
            notifier,
        }
    }
}

#[async_trait]
impl<R> IReviewDocumentUseCase for ReviewDocumentUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    async fn execute(
        &self,
        document_id: Uuid,
        decision: DocumentDecision,
        feedback: Option<String>,
    ) -> Result<(), ReviewDocumentError> {
        let document = self
            .document_repository
            .find_by_id(document_id)
            .await
            .map_err(|e| ReviewDocumentError::RepositoryError(e.to_string()))?
            .ok_or(ReviewDocumentError::DocumentNotFound)?;

        if document.status != DocumentStatus::Pending {
            return Err(ReviewDocumentError::NotPending);
        }

        let feedback = feedback.unwrap_or_default();
        let status = match decision {
            DocumentDecision::Approve => DocumentStatus::Approved,
            DocumentDecision::Reject => {
                if feedback.trim().is_empty() {
                    return Err(ReviewDocumentError::FeedbackRequired);
                }
                DocumentStatus::Rejected
            }
        };

        self.document_repository
            .set_review(document_id, status, feedback.clone())
            .await
            .map_err(|e| match e {
                DocumentRepositoryError::DocumentNotFound => ReviewDocumentError::DocumentNotFound,
                other => ReviewDocumentError::RepositoryError(other.to_string()),
            })?;

        // Best-effort notification to the owner.
        match self.user_query.find_by_id(document.user_id).await {
            Ok(Some(owner)) => {
                if let Err(e) = self
                    .notifier
                    .send_document_decision(
                        &owner.email,
                        document.doc_type.display_name(),
                        status == DocumentStatus::Approved,
                        &feedback,
                    )
                    .await
                {
                    warn!(email = %owner.email, error = %e, "Failed to send document decision email");
                }
            }
            Ok(None) => {
                warn!(user_id = %document.user_id, "Document owner has no user record");
            }
            Err(e) => {
                warn!(user_id = %document.user_id, error = %e, "Owner lookup failed for decision email");
            }
        }

        Ok(())
    }
}
