// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::contact::{relay_submission, ContactRequest, ContactResponse};
use crate::modules::error::code::ErrorCode;
use crate::modules::rest::api::ApiTags;
use crate::modules::rest::ApiResult;
use poem::http::StatusCode;
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, OpenApi};
use tracing::error;

#[derive(Debug, Clone, ApiResponse)]
pub enum ContactSubmitResponse {
    Outcome(StatusCode, Json<ContactResponse>),
}

pub struct ContactApi;

#[OpenApi(prefix_path = "/api", tag = "ApiTags::Contact")]
impl ContactApi {
    /// Relay a contact-form submission to the site operator's inbox.
    ///
    /// The form only ever sees a coarse outcome code; delivery details and
    /// relay errors stay in the server log.
    #[oai(method = "post", path = "/contact", operation_id = "submit_contact")]
    async fn submit_contact(
        &self,
        payload: Json<ContactRequest>,
    ) -> ApiResult<ContactSubmitResponse> {
        match relay_submission(payload.0).await {
            Ok(()) => Ok(ContactSubmitResponse::Outcome(
                StatusCode::OK,
                Json(ContactResponse::sent()),
            )),
            Err(err) => {
                let code = err.code();
                error!(error_code = code as u32, "contact relay failed: {err:?}");
                let label = match code {
                    ErrorCode::SmtpNotConfigured => "SMTP_NOT_CONFIGURED",
                    ErrorCode::SmtpConfigInvalid => "CONFIG_ERROR",
                    _ => "SMTP_SEND_FAILED",
                };
                Ok(ContactSubmitResponse::Outcome(
                    code.status(),
                    Json(ContactResponse::failure(label)),
                ))
            }
        }
    }
}
