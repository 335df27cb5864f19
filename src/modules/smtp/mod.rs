// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use mail_send::{
    mail_builder::{headers::address::Address, MessageBuilder},
    smtp::message::IntoMessage,
    Credentials, SmtpClientBuilder,
};
use tracing::info;

use crate::{
    modules::{
        error::{code::ErrorCode, SukiResult},
        metrics::{FAILURE, SUCCESS, SUKI_EMAIL_SEND_DURATION_SECONDS, SUKI_EMAIL_SENT_TOTAL},
        settings::cli::SETTINGS,
        smtp::util::generate_message_id,
    },
    raise_error,
};

pub mod util;

/// Covers connect, STARTTLS, AUTH, and the whole submission.
const SEND_TIMEOUT: Duration = Duration::from_secs(20);

/// Relay credentials and addressing, resolved once per submission from
/// settings. There is no pooling and no retry: one connection per message.
pub struct MailRelay {
    host: String,
    port: u16,
    username: String,
    password: String,
    to: String,
}

impl MailRelay {
    /// `None` when any of the user, app password, or destination inbox is
    /// missing. Callers surface that as "relay not configured".
    pub fn from_settings() -> Option<Self> {
        let username = SETTINGS.suki_smtp_user.clone()?;
        let password = SETTINGS.suki_smtp_app_password.clone()?;
        let to = SETTINGS.suki_contact_to.clone()?;
        Some(Self {
            host: SETTINGS.suki_smtp_host.clone(),
            port: SETTINGS.suki_smtp_port,
            username,
            password,
            to,
        })
    }

    /// Deliver one plain-text message to the configured inbox. The relay
    /// account doubles as the From address, the visitor lands in Reply-To.
    pub async fn send_text(
        &self,
        reply_to: String,
        subject: String,
        body: String,
    ) -> SukiResult<()> {
        let from = Address::new_address(None::<&str>, Cow::Owned(self.username.clone()));
        let to = Address::new_address(None::<&str>, Cow::Owned(self.to.clone()));
        let reply_to = Address::new_address(None::<&str>, Cow::Owned(reply_to));
        let builder = MessageBuilder::new()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(subject)
            .text_body(body)
            .message_id(generate_message_id());
        let message = builder.into_message().map_err(|e| {
            raise_error!(
                format!("Failed to build message: {}", e),
                ErrorCode::SmtpConfigInvalid
            )
        })?;

        let now = Instant::now();
        let result = self.deliver(message).await;
        let duration = now.elapsed();
        match &result {
            Ok(_) => {
                SUKI_EMAIL_SENT_TOTAL.with_label_values(&[SUCCESS]).inc();
                SUKI_EMAIL_SEND_DURATION_SECONDS
                    .with_label_values(&[SUCCESS])
                    .observe(duration.as_secs_f64());
                info!(duration = ?duration, "contact email relayed");
            }
            Err(_) => {
                SUKI_EMAIL_SENT_TOTAL.with_label_values(&[FAILURE]).inc();
                SUKI_EMAIL_SEND_DURATION_SECONDS
                    .with_label_values(&[FAILURE])
                    .observe(duration.as_secs_f64());
            }
        }
        result
    }

    // Submission ports speak plaintext first, so STARTTLS rather than
    // implicit TLS. mail-send refuses to continue on an unencrypted channel.
    async fn deliver<'x>(&self, message: impl IntoMessage<'x>) -> SukiResult<()> {
        let credentials = Credentials::new(self.username.clone(), self.password.clone());
        let mut client = SmtpClientBuilder::new(self.host.clone(), self.port)
            .credentials(credentials)
            .timeout(SEND_TIMEOUT)
            .implicit_tls(false)
            .connect()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::SmtpSendFailed))?;
        client
            .send(message)
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::SmtpSendFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_requires_full_credentials() {
        // Test settings carry no SMTP user, app password, or destination.
        assert!(MailRelay::from_settings().is_none());
    }
}
