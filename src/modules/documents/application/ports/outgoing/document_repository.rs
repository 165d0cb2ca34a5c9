use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::documents::application::domain::entities::{
    Document, DocumentStatus, DocumentType,
};

#[async_trait]
pub trait DocumentRepository {
    async fn find_by_id(&self, document_id: Uuid) -> Result<Option<Document>, DocumentRepositoryError>;

    async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        doc_type: DocumentType,
    ) -> Result<Option<Document>, DocumentRepositoryError>;

    /// All checklist rows for a user, in no particular order.
    async fn list_checklist_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Document>, DocumentRepositoryError>;

    /// Replace-in-place: removes any existing row for `(user_id, doc_type)`
    /// before inserting, so a slot never holds two entries.
    async fn replace(&self, document: Document) -> Result<Document, DocumentRepositoryError>;

    async fn set_review(
        &self,
        document_id: Uuid,
        status: DocumentStatus,
        feedback: String,
    ) -> Result<(), DocumentRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentRepositoryError {
    #[error("Document not found")]
    DocumentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
