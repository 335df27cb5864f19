// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::error::SukiResult;

pub trait Initialize {
    async fn initialize() -> SukiResult<()>;
}
