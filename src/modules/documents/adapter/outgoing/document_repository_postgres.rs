use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::documents::application::domain::entities::{
    Document, DocumentStatus, DocumentType,
};
use crate::modules::documents::application::ports::outgoing::{
    DocumentRepository, DocumentRepositoryError,
};

use super::sea_orm_entity::documents::{
    ActiveModel as DocumentActiveModel, Column, Entity as DocumentEntity, Model as DocumentModel,
};

#[derive(Clone, Debug)]
pub struct DocumentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub(super) fn map_to_document(model: DocumentModel) -> Result<Document, String> {
        let doc_type = DocumentType::parse(&model.doc_type)
            .ok_or_else(|| format!("Unknown document type in store: {}", model.doc_type))?;
        let status = DocumentStatus::parse(&model.status)
            .ok_or_else(|| format!("Unknown document status in store: {}", model.status))?;

        Ok(Document {
            id: model.id,
            user_id: model.user_id,
            doc_type,
            object_path: model.object_path,
            file_name: model.file_name,
            content_type: model.content_type,
            status,
            feedback: model.feedback,
            uploaded_at: model.uploaded_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait]
impl DocumentRepository for DocumentRepositoryPostgres {
    async fn find_by_id(
        &self,
        document_id: Uuid,
    ) -> Result<Option<Document>, DocumentRepositoryError> {
        DocumentEntity::find_by_id(document_id)
            .one(&*self.db)
            .await
            .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))?
            .map(Self::map_to_document)
            .transpose()
            .map_err(DocumentRepositoryError::DatabaseError)
    }

    async fn find_by_user_and_type(
        &self,
        user_id: Uuid,
        doc_type: DocumentType,
    ) -> Result<Option<Document>, DocumentRepositoryError> {
        DocumentEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DocType.eq(doc_type.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))?
            .map(Self::map_to_document)
            .transpose()
            .map_err(DocumentRepositoryError::DatabaseError)
    }

    async fn list_checklist_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Document>, DocumentRepositoryError> {
        let checklist: Vec<&str> = DocumentType::VISA_CHECKLIST
            .iter()
            .map(|t| t.as_str())
            .collect();

        let models = DocumentEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DocType.is_in(checklist))
            .all(&*self.db)
            .await
            .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(Self::map_to_document)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DocumentRepositoryError::DatabaseError)
    }

    async fn replace(&self, document: Document) -> Result<Document, DocumentRepositoryError> {
        // The unique index on (user_id, doc_type) keeps a slot single-rowed,
        // so the stale row has to go before the new one lands.
        DocumentEntity::delete_many()
            .filter(Column::UserId.eq(document.user_id))
            .filter(Column::DocType.eq(document.doc_type.as_str()))
            .exec(&*self.db)
            .await
            .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))?;

        let active = DocumentActiveModel {
            id: Set(document.id),
            user_id: Set(document.user_id),
            doc_type: Set(document.doc_type.as_str().to_string()),
            object_path: Set(document.object_path),
            file_name: Set(document.file_name),
            content_type: Set(document.content_type),
            status: Set(document.status.as_str().to_string()),
            feedback: Set(document.feedback),
            uploaded_at: Set(document.uploaded_at.fixed_offset()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_document(inserted).map_err(DocumentRepositoryError::DatabaseError)
    }

    async fn set_review(
        &self,
        document_id: Uuid,
        status: DocumentStatus,
        feedback: String,
    ) -> Result<(), DocumentRepositoryError> {
        let existing = DocumentEntity::find_by_id(document_id)
            .one(&*self.db)
            .await
            .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(DocumentRepositoryError::DocumentNotFound)?;

        let mut active: DocumentActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.feedback = Set(feedback);

        active
            .update(&*self.db)
            .await
            .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
