use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::email::application::ports::outgoing::{EmailSender, UserEmailNotifier};

/// Composes the concrete HTML messages the workflows send and hands them to
/// whatever transport is wired in.
pub struct UserEmailService {
    sender: Arc<dyn EmailSender>,
    app_url: String,
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, app_url: String) -> Self {
        Self { sender, app_url }
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_registration_invitation(
        &self,
        to: &str,
        secret: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), String> {
        let link = format!("{}/register/{}", self.app_url, secret);
        let body = format!(
            r#"
            <p>Hello,</p>
            <p>You have been invited to start your onboarding.</p>
            <p>
                <a href="{}" style="
                    display: inline-block;
                    padding: 10px 20px;
                    background-color: #007BFF;
                    color: white;
                    text-decoration: none;
                    border-radius: 5px;
                ">Create Your Account</a>
            </p>
            <p>
                <strong>Note:</strong> This link is valid until {} (3 hours from issue).
                If it expires, ask HR to send a new invitation.
            </p>
            <p>Thanks,<br>The HR Team</p>
            "#,
            link,
            expires_at.format("%Y-%m-%d %H:%M UTC"),
        );

        self.sender
            .send_email(to, "Your onboarding invitation", &body)
            .await
    }

    async fn send_onboarding_decision(
        &self,
        to: &str,
        approved: bool,
        feedback: &str,
    ) -> Result<(), String> {
        let (subject, body) = if approved {
            (
                "Your onboarding application was approved",
                r#"
                <p>Good news — your onboarding application has been approved.</p>
                <p>You can now access your employee dashboard.</p>
                "#
                .to_string(),
            )
        } else {
            (
                "Your onboarding application needs changes",
                format!(
                    r#"
                    <p>Your onboarding application was not approved.</p>
                    <p>HR feedback:</p>
                    <blockquote>{}</blockquote>
                    <p>Please update your application and resubmit.</p>
                    "#,
                    feedback
                ),
            )
        };

        self.sender.send_email(to, subject, &body).await
    }

    async fn send_document_decision(
        &self,
        to: &str,
        document_name: &str,
        approved: bool,
        feedback: &str,
    ) -> Result<(), String> {
        let (subject, body) = if approved {
            (
                format!("Your {} was approved", document_name),
                format!(
                    "<p>Your <strong>{}</strong> has been reviewed and approved.</p>",
                    document_name
                ),
            )
        } else {
            (
                format!("Your {} was rejected", document_name),
                format!(
                    r#"
                    <p>Your <strong>{}</strong> was rejected.</p>
                    <p>HR feedback:</p>
                    <blockquote>{}</blockquote>
                    <p>Please upload a corrected document.</p>
                    "#,
                    document_name, feedback
                ),
            )
        };

        self.sender.send_email(to, &subject, &body).await
    }
}
