// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::{
    modules::{
        error::{code::ErrorCode, SukiResult},
        settings::cli::SETTINGS,
        smtp::MailRelay,
    },
    raise_error,
};

/// A contact-form submission from the portfolio site.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, Object)]
pub struct ContactRequest {
    /// Name the visitor filled in.
    #[oai(validator(min_length = 1, max_length = 200))]
    pub name: String,

    /// Reply address of the visitor.
    #[oai(validator(custom = "crate::modules::common::validator::EmailValidator"))]
    pub email: String,

    /// Free-form message body.
    #[oai(validator(min_length = 1, max_length = 5000))]
    pub message: String,
}

/// Outcome reported back to the form. Exactly one of `message` or `error`
/// is present.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, Object)]
pub struct ContactResponse {
    pub ok: bool,

    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,

    /// Coarse failure code for the form, details stay in the server log.
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            ok: true,
            message: Some("Email sent".into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

pub fn compose_subject(name: &str) -> String {
    format!("{} New contact from {}", SETTINGS.suki_subject_prefix, name)
}

pub fn compose_body(request: &ContactRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        request.name, request.email, request.message
    )
}

/// Relay one submission to the operator inbox. Exactly one delivery attempt.
pub async fn relay_submission(request: ContactRequest) -> SukiResult<()> {
    let relay = MailRelay::from_settings().ok_or_else(|| {
        raise_error!(
            "SMTP relay is not configured: set suki_smtp_user, suki_smtp_app_password and suki_contact_to".into(),
            ErrorCode::SmtpNotConfigured
        )
    })?;
    let subject = compose_subject(&request.name);
    let body = compose_body(&request);
    relay.send_text(request.email, subject, body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::types::ToJSON;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn test_subject_carries_prefix_and_name() {
        assert_eq!(
            compose_subject("Ada"),
            "[Suki Portfolio] New contact from Ada"
        );
    }

    #[test]
    fn test_body_layout() {
        assert_eq!(
            compose_body(&request()),
            "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello there"
        );
    }

    #[test]
    fn test_sent_response_shape() {
        let value = ContactResponse::sent().to_json().unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["message"], "Email sent");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failure_response_shape() {
        let value = ContactResponse::failure("SMTP_SEND_FAILED").to_json().unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"], "SMTP_SEND_FAILED");
        assert!(value.get("message").is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_relay_is_reported() {
        let err = relay_submission(request()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::SmtpNotConfigured);
    }
}
