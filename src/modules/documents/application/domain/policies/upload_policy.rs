#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_file_name_len: usize,
    pub allowed_content_types: &'static [&'static str],
    pub bucket_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("File exceeds the {0} byte limit")]
    FileTooLarge(usize),

    #[error("Empty file")]
    EmptyFile,

    #[error("Content type '{0}' is not allowed")]
    UnsupportedContentType(String),

    #[error("File name too long")]
    FileNameTooLong,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "onboard-documents";
    pub const DEFAULT_ALLOWED_CONTENT_TYPES: &'static [&'static str] =
        &["application/pdf", "image/jpeg", "image/png"];

    /// Load policy with `bucket_name` from `DOCUMENT_UPLOAD_BUCKET`,
    /// fallback to "onboard-documents".
    pub fn from_env() -> Self {
        let bucket_name = std::env::var("DOCUMENT_UPLOAD_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BUCKET_NAME.to_string());

        Self::new(bucket_name)
    }

    pub fn new(bucket_name: String) -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_file_name_len: 255,
            allowed_content_types: Self::DEFAULT_ALLOWED_CONTENT_TYPES,
            bucket_name,
        }
    }

    /// A rejected upload fails the whole request; nothing reaches the blob
    /// store.
    pub fn check(
        &self,
        file_name: &str,
        content_type: &str,
        size_bytes: usize,
    ) -> Result<(), UploadPolicyError> {
        if size_bytes == 0 {
            return Err(UploadPolicyError::EmptyFile);
        }
        if size_bytes > self.max_file_size_bytes {
            return Err(UploadPolicyError::FileTooLarge(self.max_file_size_bytes));
        }
        if file_name.len() > self.max_file_name_len {
            return Err(UploadPolicyError::FileNameTooLong);
        }
        if !self.allowed_content_types.contains(&content_type) {
            return Err(UploadPolicyError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }
        Ok(())
    }
}
