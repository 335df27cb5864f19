// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use super::error::SukiError;
use poem::error::ResponseError;
use poem::Body;
use poem::{http::StatusCode, Response};
use tracing::error;

pub mod error;
pub mod log;
pub mod rustls;
pub mod validator;

impl ResponseError for SukiError {
    fn status(&self) -> StatusCode {
        match self {
            SukiError::Generic {
                message: _,
                location: _,
                code,
            } => code.status(),
        }
    }

    fn as_response(&self) -> Response
    where
        Self: std::error::Error + Send + Sync + 'static,
    {
        match self {
            SukiError::Generic {
                message,
                location,
                code,
            } => {
                error!(
                    error_code = *code as u32,
                    error_message = %message,
                    error_location = ?location
                );

                let body = Body::from_json(serde_json::json!({
                    "code": *code as u32,
                    "message": message.to_string(),
                }))
                .unwrap();

                Response::builder().status(self.status()).body(body)
            }
        }
    }
}
