use crate::modules::context::Initialize;
use crate::modules::settings::cli::SETTINGS;
use crate::{
    modules::error::{code::ErrorCode, SukiResult},
    raise_error,
};
use std::path::PathBuf;
use std::sync::LazyLock;

const LOG_DIR: &str = "logs";

pub static DATA_DIR_MANAGER: LazyLock<DataDirManager> = LazyLock::new(|| {
    DataDirManager::new(
        PathBuf::from(&SETTINGS.suki_store_path),
        &SETTINGS.suki_store_name,
    )
});

#[derive(Debug)]
pub struct DataDirManager {
    pub root_dir: PathBuf,
    pub store_db: PathBuf,
    pub log_dir: PathBuf,
}

impl Initialize for DataDirManager {
    async fn initialize() -> SukiResult<()> {
        std::fs::create_dir_all(&DATA_DIR_MANAGER.root_dir)
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::InternalError))?;
        std::fs::create_dir_all(&DATA_DIR_MANAGER.log_dir)
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::InternalError))?;
        Ok(())
    }
}

impl DataDirManager {
    pub fn new(root_dir: PathBuf, store_name: &str) -> Self {
        Self {
            root_dir: root_dir.clone(),
            store_db: root_dir.join(store_name),
            log_dir: root_dir.join(LOG_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_paths_derive_from_root() {
        let temp_dir = tempdir().unwrap();
        let manager = DataDirManager::new(temp_dir.path().to_path_buf(), "status.db");

        assert_eq!(manager.root_dir, temp_dir.path());
        assert_eq!(manager.store_db, temp_dir.path().join("status.db"));
        assert_eq!(manager.log_dir, temp_dir.path().join(LOG_DIR));
    }

    #[test]
    fn test_store_file_lives_inside_root() {
        let temp_dir = tempdir().unwrap();
        let manager = DataDirManager::new(temp_dir.path().to_path_buf(), "pings.db");

        assert!(manager.store_db.starts_with(&manager.root_dir));
        assert!(manager.log_dir.starts_with(&manager.root_dir));
    }
}
