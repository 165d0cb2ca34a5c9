use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::documents::application::ports::outgoing::{
    BlobStore, BlobStoreError, DocumentRepository,
};

#[derive(Debug, thiserror::Error)]
pub enum DownloadDocumentError {
    #[error("Document not found")]
    DocumentNotFound,

    #[error("Not allowed to access this document")]
    Forbidden,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

pub struct DownloadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait IDownloadDocumentUseCase: Send + Sync {
    async fn execute(
        &self,
        document_id: Uuid,
        requester_id: Uuid,
        requester_role: Role,
    ) -> Result<DownloadedFile, DownloadDocumentError>;
}

/// Serves the stored file for a document row. An employee may only fetch
/// their own documents; HR may fetch anyone's.
pub struct DownloadDocumentUseCase<R, B>
where
    R: DocumentRepository + Send + Sync,
    B: BlobStore + Send + Sync,
{
    document_repository: R,
    blob_store: B,
}

impl<R, B> DownloadDocumentUseCase<R, B>
where
    R: DocumentRepository + Send + Sync,
    B: BlobStore + Send + Sync,
{
    pub fn new(document_repository: R, blob_store: B) -> Self {
        Self {
            document_repository,
            blob_store,
        }
    }
}

#[async_trait]
impl<R, B> IDownloadDocumentUseCase for DownloadDocumentUseCase<R, B>
where
    R: DocumentRepository + Send + Sync,
    B: BlobStore + Send + Sync,
{
    async fn execute(
        &self,
        document_id: Uuid,
        requester_id: Uuid,
        requester_role: Role,
    ) -> Result<DownloadedFile, DownloadDocumentError> {
        let document = self
            .document_repository
            .find_by_id(document_id)
            .await
            .map_err(|e| DownloadDocumentError::RepositoryError(e.to_string()))?
            .ok_or(DownloadDocumentError::DocumentNotFound)?;

        if document.user_id != requester_id && requester_role != Role::Hr {
            return Err(DownloadDocumentError::Forbidden);
        }

        let bytes = self
            .blob_store
            .get(&document.object_path)
            .await
            .map_err(|e| match e {
                // A row pointing at a missing object is a data bug; surface
                // it as not-found rather than a server error.
                BlobStoreError::ObjectNotFound => DownloadDocumentError::DocumentNotFound,
                other => DownloadDocumentError::StorageError(other.to_string()),
            })?;

        Ok(DownloadedFile {
            file_name: document.file_name,
            content_type: document.content_type,
            bytes,
        })
    }
}
