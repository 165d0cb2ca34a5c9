pub mod profile_query;
pub mod profile_repository;

pub use profile_query::{ProfileQuery, ProfileSummary};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
