use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outbound notifications the workflows can trigger.
///
/// Every call site treats a failure as log-and-continue: a lost email never
/// rolls back the state transition that produced it.
#[async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_registration_invitation(
        &self,
        to: &str,
        secret: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), String>;

    async fn send_onboarding_decision(
        &self,
        to: &str,
        approved: bool,
        feedback: &str,
    ) -> Result<(), String>;

    async fn send_document_decision(
        &self,
        to: &str,
        document_name: &str,
        approved: bool,
        feedback: &str,
    ) -> Result<(), String>;
}
