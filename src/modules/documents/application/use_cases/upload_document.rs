use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::documents::application::domain::entities::{
    Document, DocumentStatus, DocumentType,
};
use crate::modules::documents::application::domain::policies::{UploadPolicy, UploadPolicyError};
use crate::modules::documents::application::ports::outgoing::{BlobStore, DocumentRepository};
use crate::modules::onboarding::application::ports::outgoing::ProfileQuery;

#[derive(Debug, thiserror::Error)]
pub enum UploadDocumentError {
    #[error(transparent)]
    Policy(#[from] UploadPolicyError),

    #[error("The visa checklist does not apply to this employee")]
    NotApplicable,

    #[error("Storage error")]
    StorageError,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct UploadInput {
    pub user_id: Uuid,
    pub doc_type: DocumentType,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait IUploadDocumentUseCase: Send + Sync {
    async fn execute(&self, input: UploadInput) -> Result<Document, UploadDocumentError>;
}

pub struct UploadDocumentUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    document_repository: R,
    profile_query: Arc<dyn ProfileQuery + Send + Sync>,
    blob_store: Arc<dyn BlobStore>,
    policy: UploadPolicy,
}

impl<R> UploadDocumentUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    pub fn new(
        document_repository: R,
        profile_query: Arc<dyn ProfileQuery + Send + Sync>,
        blob_store: Arc<dyn BlobStore>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            document_repository,
            profile_query,
            blob_store,
            policy,
        }
    }
}

#[async_trait]
impl<R> IUploadDocumentUseCase for UploadDocumentUseCase<R>
where
    R: DocumentRepository + Send + Sync,
{
    async fn execute(&self, input: UploadInput) -> Result<Document, UploadDocumentError> {
        self.policy
            .check(&input.file_name, &input.content_type, input.bytes.len())?;

        // Checklist slots are only meaningful for F1(CPT/OPT) employees.
        if input.doc_type.is_checklist() {
            let tracked = self
                .profile_query
                .find_by_user_id(input.user_id)
                .await
                .map_err(UploadDocumentError::RepositoryError)?
                .map(|p| p.is_visa_tracked())
                .unwrap_or(false);

            if !tracked {
                return Err(UploadDocumentError::NotApplicable);
            }
        }

        let previous = self
            .document_repository
            .find_by_user_and_type(input.user_id, input.doc_type)
            .await
            .map_err(|e| UploadDocumentError::RepositoryError(e.to_string()))?;

        let object_path = format!(
            "{}/{}/{}_{}",
            input.user_id,
            input.doc_type.as_str(),
            Uuid::new_v4(),
            input.file_name
        );

        self.blob_store
            .put(&object_path, input.bytes, &input.content_type)
            .await
            .map_err(|_| UploadDocumentError::StorageError)?;

        let document = Document {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            doc_type: input.doc_type,
            object_path: object_path.clone(),
            file_name: input.file_name,
            content_type: input.content_type,
            status: DocumentStatus::Pending,
            feedback: String::new(),
            uploaded_at: Utc::now(),
        };

        let stored = match self.document_repository.replace(document).await {
            Ok(doc) => doc,
            Err(e) => {
                // The blob is orphaned if the row never lands; clean up so
                // retries do not accumulate garbage.
                if let Err(del) = self.blob_store.delete(&object_path).await {
                    warn!(object_path = %object_path, error = %del, "Orphaned blob cleanup failed");
                }
                return Err(UploadDocumentError::RepositoryError(e.to_string()));
            }
        };

        // The replaced row is gone; its blob goes with it, best-effort.
        if let Some(prev) = previous {
            if prev.object_path != stored.object_path {
                if let Err(e) = self.blob_store.delete(&prev.object_path).await {
                    warn!(object_path = %prev.object_path, error = %e, "Stale blob cleanup failed");
                }
            }
        }

        Ok(stored)
    }
}
