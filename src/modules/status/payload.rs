// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, Object)]
pub struct StatusCheckCreateRequest {
    /// Name of the client checking in (e.g., "uptime-probe-eu").
    #[oai(validator(min_length = 1))]
    pub client_name: String,
}
