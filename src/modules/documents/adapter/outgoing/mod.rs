pub mod cloud_storage;
pub mod document_repository_postgres;
pub mod sea_orm_entity;

pub use cloud_storage::GcsBlobStore;
pub use document_repository_postgres::DocumentRepositoryPostgres;
