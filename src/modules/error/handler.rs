// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::error::{code::ErrorCode, ApiError, ApiErrorResponse, SukiError};
use poem::IntoResponse;
use poem_openapi::payload::Json;

/// Converts errors bubbling out of the router into the uniform `{message, code}`
/// body. Request-shape violations deliberately surface as 422, not poem's
/// default 400, so the response status always comes from the code registry.
pub async fn error_handler(error: poem::Error) -> impl poem::IntoResponse {
    if error.is::<SukiError>() {
        return error.into_response();
    }

    let error_mapping = [
        (
            error.is::<poem::error::NotFoundError>(),
            ErrorCode::ResourceNotFound,
        ),
        (
            error.is::<poem::error::ParsePathError>()
                || error.is::<poem::error::ParseTypedHeaderError>()
                || error.is::<poem::error::ParseQueryError>()
                || error.is::<poem::error::ParseJsonError>()
                || error.is::<poem_openapi::error::ParseRequestPayloadError>()
                || error.is::<poem_openapi::error::ContentTypeError>()
                || error.is::<poem_openapi::error::ParseParamError>()
                || error.is::<poem_openapi::error::ParsePathError>(),
            ErrorCode::InvalidParameter,
        ),
        (
            error.is::<poem::error::MethodNotAllowedError>(),
            ErrorCode::MethodNotAllowed,
        ),
    ];

    if let Some((_, error_code)) = error_mapping.iter().find(|(condition, _)| *condition) {
        let api_error = ApiError::new_with_error_code(error.to_string(), *error_code as u32);
        return ApiErrorResponse::Generic(error_code.status(), Json(api_error)).into_response();
    }

    if error.has_source() {
        let api_error =
            ApiError::new_with_error_code(error.to_string(), ErrorCode::UnhandledPoemError as u32);
        ApiErrorResponse::Generic(ErrorCode::UnhandledPoemError.status(), Json(api_error))
            .into_response()
    } else {
        error.into_response()
    }
}
