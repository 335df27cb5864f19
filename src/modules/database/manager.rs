use crate::modules::database::MODELS;
use crate::modules::error::{code::ErrorCode, SukiError, SukiResult};
use crate::modules::settings::cli::SETTINGS;
use crate::modules::settings::dir::DATA_DIR_MANAGER;
use crate::raise_error;
use native_db::{Builder, Database};
use std::sync::Arc;
use tracing::{info, warn};

pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the status store under the configured data directory and compact
    /// it before handing it out. The returned handle is shared by the HTTP
    /// layer for the lifetime of the process.
    pub fn open() -> SukiResult<Arc<Database<'static>>> {
        info!(
            "Initializing status store at: {:?}",
            &DATA_DIR_MANAGER.store_db
        );

        let mut database = Builder::new()
            .set_cache_size(
                SETTINGS
                    .suki_store_cache_size
                    .unwrap_or(67108864)
                    .max(8388608),
            ) //default 64MB
            .create(&MODELS, DATA_DIR_MANAGER.store_db.clone())
            .map_err(Self::handle_database_error)?;
        database
            .compact()
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::InternalError))?;
        Ok(Arc::new(database))
    }

    /// Compact and close the store once the server has drained. Skipped when
    /// some task still holds a clone of the handle.
    pub fn shutdown(store: Arc<Database<'static>>) {
        match Arc::try_unwrap(store) {
            Ok(mut database) => match database.compact() {
                Ok(_) => info!("Status store compacted before close"),
                Err(e) => warn!("Failed to compact status store on close: {:?}", e),
            },
            Err(_) => warn!("Status store still shared at shutdown, skipping final compact"),
        }
    }

    fn handle_database_error(error: native_db::db_type::Error) -> SukiError {
        match error {
            native_db::db_type::Error::RedbDatabaseError(database_error) => match database_error {
                redb::DatabaseError::DatabaseAlreadyOpen => {
                    raise_error!(
                        "Database is already open by another instance".into(),
                        ErrorCode::InternalError
                    )
                }
                other => {
                    raise_error!(
                        format!("Database error: {:?}", other),
                        ErrorCode::InternalError
                    )
                }
            },
            other => {
                raise_error!(
                    format!("Failed to create database: {:?}", other),
                    ErrorCode::InternalError
                )
            }
        }
    }
}
