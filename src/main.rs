use mimalloc::MiMalloc;
use modules::{
    common::rustls::SukiTls, context::Initialize, database::manager::DatabaseManager,
    error::SukiResult, logger, rest::start_http_server, smtp::MailRelay,
};
use tracing::info;

use crate::modules::{
    metrics::MetricsService,
    settings::{cli::SETTINGS, dir::DataDirManager},
};

mod modules;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

static LOGO: &str = r#"
  ____          _     _
 / ___|  _   _ | | __(_)
 \___ \ | | | || |/ /| |
  ___) || |_| ||   < | |
 |____/  \__,_||_|\_\|_|

"#;

#[tokio::main]
async fn main() -> SukiResult<()> {
    logger::initialize_logging();
    info!("{}", LOGO);
    info!("Starting suki-backend");
    info!("Version:  {}", suki_version!());
    info!("Git:      [{}]", env!("GIT_HASH"));

    if let Err(error) = initialize().await {
        eprintln!("{:?}", error);
        return Err(error);
    }

    let bind = SETTINGS.suki_bind_ip.as_deref().unwrap_or("0.0.0.0");
    info!("Listening on {}:{}", bind, SETTINGS.suki_http_port);
    info!(
        "API docs: http://{}:{}/api-docs/swagger",
        bind, SETTINGS.suki_http_port
    );
    info!(
        "Mail relay configured: {}",
        MailRelay::from_settings().is_some()
    );

    let store = DatabaseManager::open()?;
    start_http_server(store.clone()).await?;
    DatabaseManager::shutdown(store);
    Ok(())
}

/// Initialize the system by validating settings and preparing shared state.
async fn initialize() -> SukiResult<()> {
    DataDirManager::initialize().await?;
    MetricsService::initialize().await?;
    SukiTls::initialize().await?;
    Ok(())
}
