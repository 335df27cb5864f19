// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::rest::api::ApiTags;
use crate::modules::rest::ApiResult;
use poem_openapi::payload::Json;
use poem_openapi::{Object, OpenApi};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, Object)]
pub struct Greeting {
    pub message: String,
}

pub struct SystemApi;

#[OpenApi(prefix_path = "/api", tag = "ApiTags::System")]
impl SystemApi {
    /// Liveness probe used by the frontend to confirm the backend is up.
    #[oai(method = "get", path = "/", operation_id = "hello_world")]
    async fn hello_world(&self) -> ApiResult<Json<Greeting>> {
        Ok(Json(Greeting {
            message: "Hello World".into(),
        }))
    }
}
