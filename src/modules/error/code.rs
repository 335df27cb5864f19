// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use poem::http::StatusCode;
use poem_openapi::Enum;

#[derive(Copy, Clone, Debug, Enum, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCode {
    // Client-side errors (10000–10999)
    InvalidParameter = 10000,
    MethodNotAllowed = 10010,

    // Resource errors (30000–30999)
    ResourceNotFound = 30000,

    // Mail relay errors (50000–50999)
    SmtpNotConfigured = 50000,
    SmtpConfigInvalid = 50010,
    SmtpSendFailed = 50020,

    // Storage errors (60000–60999)
    StoreError = 60000,

    // Internal system errors (70000–70999)
    InternalError = 70000,
    UnhandledPoemError = 70010,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidParameter => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,
            ErrorCode::SmtpNotConfigured => StatusCode::BAD_REQUEST,
            ErrorCode::SmtpConfigInvalid
            | ErrorCode::SmtpSendFailed
            | ErrorCode::StoreError
            | ErrorCode::InternalError
            | ErrorCode::UnhandledPoemError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_map_to_unprocessable_entity() {
        assert_eq!(
            ErrorCode::InvalidParameter.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn missing_relay_credentials_map_to_bad_request() {
        assert_eq!(
            ErrorCode::SmtpNotConfigured.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn relay_and_store_failures_map_to_internal_server_error() {
        for code in [
            ErrorCode::SmtpConfigInvalid,
            ErrorCode::SmtpSendFailed,
            ErrorCode::StoreError,
            ErrorCode::InternalError,
            ErrorCode::UnhandledPoemError,
        ] {
            assert_eq!(code.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
