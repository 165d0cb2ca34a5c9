pub mod download_document;
pub mod review_document;
pub mod upload_document;
pub mod visa_status;
