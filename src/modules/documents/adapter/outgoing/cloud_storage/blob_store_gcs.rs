use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::modules::documents::application::ports::outgoing::{BlobStore, BlobStoreError};

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_storage_error(msg: &str) -> BlobStoreError {
    let m = msg.to_lowercase();

    if m.contains("404") || m.contains("not found") {
        BlobStoreError::ObjectNotFound
    } else if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        BlobStoreError::AccessDenied
    } else {
        BlobStoreError::Infrastructure
    }
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types/streams.
///
/// Tests will implement this trait with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;

    async fn download_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<Vec<u8>, String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str)
        -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0.upload_object(bucket_resource, object_name, bytes).await
    }

    async fn download_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<Vec<u8>, String> {
        self.0
            .download_object_bytes(bucket_resource, object_name)
            .await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

/// Production adapter: implements the BlobStore port against a single
/// documents bucket.
#[derive(Clone)]
pub struct GcsBlobStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl GcsBlobStore {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket,
        }
    }

    /// Get or initialize the GCS client.
    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: String) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket,
        }
    }
}

#[async_trait]
impl BlobStore for GcsBlobStore {
    async fn put(
        &self,
        object_path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), BlobStoreError> {
        // Content type is served from the document row, not object metadata.
        let client = self
            .get_client()
            .await
            .map_err(|_| BlobStoreError::Infrastructure)?;

        client
            .upload_object(&bucket_resource(&self.bucket), object_path, bytes)
            .await
            .map_err(|e| map_storage_error(&e))
    }

    async fn get(&self, object_path: &str) -> Result<Vec<u8>, BlobStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|_| BlobStoreError::Infrastructure)?;

        client
            .download_object_bytes(&bucket_resource(&self.bucket), object_path)
            .await
            .map_err(|e| map_storage_error(&e))
    }

    async fn delete(&self, object_path: &str) -> Result<(), BlobStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|_| BlobStoreError::Infrastructure)?;

        client
            .delete_object(&bucket_resource(&self.bucket), object_path)
            .await
            .map_err(|e| map_storage_error(&e))
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                e
            })?;

        tracing::info!("GCS storage client created");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_unbuffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    async fn download_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<Vec<u8>, String> {
        let mut stream = self
            .storage
            .read_object(bucket_resource.to_string(), object_name.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let mut out: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| e.to_string())?;
            out.extend_from_slice(&chunk);
        }

        Ok(out)
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeGcsClient {
        last_upload_call: Mutex<Option<(String, String, Vec<u8>)>>,
        last_download_call: Mutex<Option<(String, String)>>,
        last_delete_call: Mutex<Option<(String, String)>>,
        upload_result: Mutex<Result<(), String>>,
        download_result: Mutex<Result<Vec<u8>, String>>,
        delete_result: Mutex<Result<(), String>>,
    }

    impl Default for FakeGcsClient {
        fn default() -> Self {
            Self {
                last_upload_call: Mutex::new(None),
                last_download_call: Mutex::new(None),
                last_delete_call: Mutex::new(None),
                upload_result: Mutex::new(Ok(())),
                download_result: Mutex::new(Ok(Vec::new())),
                delete_result: Mutex::new(Ok(())),
            }
        }
    }

    impl FakeGcsClient {
        fn new() -> Self {
            Self::default()
        }

        fn set_download_result(&self, r: Result<Vec<u8>, String>) {
            *self.download_result.lock().unwrap() = r;
        }

        fn set_upload_result(&self, r: Result<(), String>) {
            *self.upload_result.lock().unwrap() = r;
        }

        fn set_delete_result(&self, r: Result<(), String>) {
            *self.delete_result.lock().unwrap() = r;
        }
    }

    #[async_trait]
    impl GcsClient for FakeGcsClient {
        async fn upload_object(
            &self,
            bucket_resource: &str,
            object_name: &str,
            bytes: Vec<u8>,
        ) -> Result<(), String> {
            *self.last_upload_call.lock().unwrap() = Some((
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes,
            ));

            self.upload_result.lock().unwrap().clone()
        }

        async fn download_object_bytes(
            &self,
            bucket_resource: &str,
            object_name: &str,
        ) -> Result<Vec<u8>, String> {
            *self.last_download_call.lock().unwrap() =
                Some((bucket_resource.to_string(), object_name.to_string()));

            self.download_result.lock().unwrap().clone()
        }

        async fn delete_object(
            &self,
            bucket_resource: &str,
            object_name: &str,
        ) -> Result<(), String> {
            *self.last_delete_call.lock().unwrap() =
                Some((bucket_resource.to_string(), object_name.to_string()));

            self.delete_result.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn test_put_uses_bucket_resource() {
        let fake = Arc::new(FakeGcsClient::new());
        let store = GcsBlobStore::with_client(fake.clone(), "hr-documents".to_string());

        store
            .put("u1/i983/file.pdf", b"%PDF".to_vec(), "application/pdf")
            .await
            .unwrap();

        let call = fake.last_upload_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/hr-documents");
        assert_eq!(call.1, "u1/i983/file.pdf");
        assert_eq!(call.2, b"%PDF".to_vec());
    }

    #[tokio::test]
    async fn test_put_maps_access_denied() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_upload_result(Err("Permission denied".to_string()));

        let store = GcsBlobStore::with_client(fake, "hr-documents".to_string());
        let err = store
            .put("p", Vec::new(), "application/pdf")
            .await
            .unwrap_err();

        assert_eq!(err, BlobStoreError::AccessDenied);
    }

    #[tokio::test]
    async fn test_get_success() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_download_result(Ok(b"%PDF-1.4".to_vec()));

        let store = GcsBlobStore::with_client(fake.clone(), "hr-documents".to_string());
        let bytes = store.get("u1/opt_ead/card.pdf").await.unwrap();

        assert_eq!(bytes, b"%PDF-1.4".to_vec());

        let call = fake.last_download_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/hr-documents");
        assert_eq!(call.1, "u1/opt_ead/card.pdf");
    }

    #[tokio::test]
    async fn test_get_maps_object_not_found() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_download_result(Err("Not Found (404)".to_string()));

        let store = GcsBlobStore::with_client(fake, "hr-documents".to_string());
        let err = store.get("missing").await.unwrap_err();

        assert_eq!(err, BlobStoreError::ObjectNotFound);
    }

    #[tokio::test]
    async fn test_get_maps_infrastructure_fallback() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_download_result(Err("connection timeout".to_string()));

        let store = GcsBlobStore::with_client(fake, "hr-documents".to_string());
        let err = store.get("p").await.unwrap_err();

        assert_eq!(err, BlobStoreError::Infrastructure);
    }

    #[tokio::test]
    async fn test_delete_uses_bucket_resource() {
        let fake = Arc::new(FakeGcsClient::new());
        let store = GcsBlobStore::with_client(fake.clone(), "hr-documents".to_string());

        store.delete("u1/i20/old.pdf").await.unwrap();

        let call = fake.last_delete_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.0, "projects/_/buckets/hr-documents");
        assert_eq!(call.1, "u1/i20/old.pdf");
    }

    #[tokio::test]
    async fn test_delete_maps_not_found() {
        let fake = Arc::new(FakeGcsClient::new());
        fake.set_delete_result(Err("object not found".to_string()));

        let store = GcsBlobStore::with_client(fake, "hr-documents".to_string());
        let err = store.delete("gone").await.unwrap_err();

        assert_eq!(err, BlobStoreError::ObjectNotFound);
    }
}
