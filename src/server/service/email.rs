//! Transactional email over SMTP.
//!
//! The dispatcher is only wired to a relay when both mail credentials are configured.
//! Otherwise every message is logged instead of sent, which keeps local setups working.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::Config, error::AppError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn welcome(to: &str, full_name: &str, login_url: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Welcome to EndOfHunger!".to_string(),
            body: format!(
                "Hello {full_name},\n\n\
                 Welcome to EndOfHunger!\n\n\
                 We are thrilled to have you join the EndOfHunger family. \
                 We've set up your account and you're all ready to go.\n\n\
                 Start Dining Now: {login_url}\n\n\
                 If you have any questions, feel free to reply to this email.\n"
            ),
        }
    }

    pub fn password_reset(to: &str, reset_url: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Password Reset Request".to_string(),
            body: format!(
                "Hi there,\n\n\
                 We received a request to reset the password for your EndOfHunger account.\n\n\
                 Reset your password by visiting this link:\n{reset_url}\n\n\
                 This link is valid for 1 hour.\n\n\
                 If you didn't request a password reset, you can safely ignore this email.\n"
            ),
        }
    }

    pub fn password_reset_success(to: &str, login_url: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Password Changed Successfully".to_string(),
            body: format!(
                "Your password has been successfully updated. \
                 You can now log in with your new password.\n\n\
                 Log In to Your Account: {login_url}\n\n\
                 If you did not make this change, please contact our support team immediately.\n"
            ),
        }
    }
}

#[derive(Clone)]
struct Relay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

#[derive(Clone, Default)]
pub struct EmailDispatcher {
    relay: Option<Relay>,
}

impl EmailDispatcher {
    /// Builds the dispatcher, connecting to the relay only when `EMAIL_USER` and
    /// `EMAIL_PASS` are both set.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let (Some(user), Some(pass)) = (&config.email_user, &config.email_pass) else {
            tracing::warn!("Email credentials not configured; outgoing mail will be logged");
            return Ok(Self::default());
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(user.clone(), pass.clone()))
            .build();
        let from = Mailbox::new(Some(config.email_from_name.clone()), user.parse()?);

        Ok(Self {
            relay: Some(Relay { transport, from }),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.relay.is_some()
    }

    /// Sends the message and waits for the relay to accept it.
    pub async fn send(&self, message: EmailMessage) -> Result<(), AppError> {
        let Some(relay) = &self.relay else {
            tracing::info!(
                "Email not configured, not sending '{}' to {}:\n{}",
                message.subject,
                message.to,
                message.body
            );
            return Ok(());
        };

        let email = Message::builder()
            .from(relay.from.clone())
            .to(message.to.parse()?)
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body)?;

        relay.transport.send(email).await?;
        tracing::info!("Sent '{}' to {}", message.subject, message.to);

        Ok(())
    }

    /// Sends the message in the background. Failures are logged, never retried.
    pub fn dispatch(&self, message: EmailMessage) {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            let to = message.to.clone();
            if let Err(e) = dispatcher.send(message).await {
                tracing::error!("Failed to send email to {}: {}", to, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_dispatcher_logs_and_succeeds() {
        let dispatcher = EmailDispatcher::default();

        assert!(!dispatcher.is_configured());
        dispatcher
            .send(EmailMessage::password_reset(
                "asha@example.com",
                "http://localhost:3000/reset-password?token=abc",
            ))
            .await
            .unwrap();
    }

    #[test]
    fn reset_message_carries_link() {
        let message = EmailMessage::password_reset("a@example.com", "https://x/reset-password?token=t");

        assert_eq!(message.subject, "Password Reset Request");
        assert!(message.body.contains("https://x/reset-password?token=t"));
        assert!(message.body.contains("1 hour"));
    }
}
