use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::modules::email::application::ports::outgoing::EmailSender;

/// Seam over the lettre transport so the sender is testable without SMTP.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, String> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| e.to_string())?
            .credentials(creds)
            .build();

        Ok(Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        })
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let email = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(to.parse().map_err(|e| format!("{:?}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OkMailer;

    #[async_trait]
    impl Mailer for OkMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            Ok(())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            panic!("Should not reach mailer when address parsing fails");
        }
    }

    #[tokio::test]
    async fn test_send_email_success() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(OkMailer), "hr@example.com");

        let result = sender
            .send_email("employee@example.com", "Test", "<p>Unit test</p>")
            .await;

        assert!(result.is_ok(), "Expected Ok, got {:?}", result);
    }

    #[tokio::test]
    async fn test_send_email_invalid_from_address() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "not-an-address");

        let result = sender
            .send_email("employee@example.com", "Subject", "<p>Test</p>")
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_send_email_invalid_to_address() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "hr@example.com");

        let result = sender.send_email("nope", "Subject", "<p>Test</p>").await;

        assert!(result.is_err());
    }
}
