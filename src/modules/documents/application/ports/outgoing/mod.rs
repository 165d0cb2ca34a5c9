pub mod blob_store;
pub mod document_repository;

pub use blob_store::{BlobStore, BlobStoreError};
pub use document_repository::{DocumentRepository, DocumentRepositoryError};
