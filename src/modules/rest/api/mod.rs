// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use contact::ContactApi;
use native_db::Database;
use poem_openapi::{OpenApiService, Tags};
use status::StatusApi;
use std::sync::Arc;
use system::SystemApi;

use crate::suki_version;

pub mod contact;
pub mod status;
pub mod system;

#[derive(Tags)]
pub enum ApiTags {
    System,
    Status,
    Contact,
}

type SukiOpenApi = (SystemApi, StatusApi, ContactApi);

pub fn create_openapi_service(
    store: Arc<Database<'static>>,
) -> OpenApiService<SukiOpenApi, ()> {
    OpenApiService::new(
        (SystemApi, StatusApi::new(store), ContactApi),
        "SukiApi",
        suki_version!(),
    )
}
