use std::path::PathBuf;

use ii_core::ports::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub store_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub config_path: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            store_dir: dirs.app_data_root.join("store"),
            logs_dir: dirs.app_data_root.join("logs"),
            config_path: dirs.app_data_root.join("config.toml"),
        }
    }
}
