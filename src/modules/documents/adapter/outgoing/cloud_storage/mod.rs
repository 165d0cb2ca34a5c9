pub mod blob_store_gcs;

pub use blob_store_gcs::GcsBlobStore;
