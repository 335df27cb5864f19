// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::rest::api::ApiTags;
use crate::modules::rest::ApiResult;
use crate::modules::status::entity::StatusCheck;
use crate::modules::status::payload::StatusCheckCreateRequest;
use native_db::Database;
use poem_openapi::payload::Json;
use poem_openapi::OpenApi;
use std::sync::Arc;

pub struct StatusApi {
    store: Arc<Database<'static>>,
}

impl StatusApi {
    pub fn new(store: Arc<Database<'static>>) -> Self {
        Self { store }
    }
}

#[OpenApi(prefix_path = "/api", tag = "ApiTags::Status")]
impl StatusApi {
    /// Record a status check-in for the named client and return the stored
    /// entry.
    #[oai(
        method = "post",
        path = "/status",
        operation_id = "create_status_check"
    )]
    async fn create_status_check(
        &self,
        payload: Json<StatusCheckCreateRequest>,
    ) -> ApiResult<Json<StatusCheck>> {
        let created = StatusCheck::create(&self.store, payload.0.client_name).await?;
        Ok(Json(created))
    }

    /// List the most recent check-ins, oldest first.
    #[oai(method = "get", path = "/status", operation_id = "list_status_checks")]
    async fn list_status_checks(&self) -> ApiResult<Json<Vec<StatusCheck>>> {
        let checks = StatusCheck::list_recent(&self.store).await?;
        Ok(Json(checks))
    }
}
