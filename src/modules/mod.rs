// Copyright © 2025 sukiportfolio.com
// Licensed under Suki Portfolio License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

pub mod common;
pub mod contact;
pub mod context;
pub mod database;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod rest;
pub mod settings;
pub mod smtp;
pub mod status;
pub mod utils;
