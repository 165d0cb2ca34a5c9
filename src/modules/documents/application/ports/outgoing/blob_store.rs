use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobStoreError {
    #[error("Object not found")]
    ObjectNotFound,

    #[error("Access denied")]
    AccessDenied,

    #[error("Storage infrastructure error")]
    Infrastructure,
}

/// Opaque byte storage keyed by object path. Paths are generated by the
/// upload use case and persisted on document rows; nothing else interprets
/// them.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(
        &self,
        object_path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobStoreError>;

    async fn get(&self, object_path: &str) -> Result<Vec<u8>, BlobStoreError>;

    async fn delete(&self, object_path: &str) -> Result<(), BlobStoreError>;
}
