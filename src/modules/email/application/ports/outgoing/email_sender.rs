use async_trait::async_trait;

/// Raw message transport. The notifier composes subjects and bodies; this
/// port only moves them.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
