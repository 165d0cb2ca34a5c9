/// Opaque credential hashing. Hashing is CPU-bound and synchronous; adapters
/// decide their own cost parameters.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, String>;

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, String>;
}
