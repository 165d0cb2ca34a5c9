mod download_document;
mod review_document;
mod upload_document;
mod visa_status;

pub use download_document::*;
pub use review_document::*;
pub use upload_document::*;
pub use visa_status::*;
