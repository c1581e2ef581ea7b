use std::path::PathBuf;

use ii_core::ports::{AppDirs, AppDirsError, AppDirsPort};

const APP_DIR_NAME: &str = "ingest-inspector";

/// Environment variable that suffixes the app directory, keeping separate
/// histories per profile.
pub const PROFILE_ENV_VAR: &str = "II_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV_VAR) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Adapter rooted at `base` instead of the system data-local directory.
    #[cfg(test)]
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var(PROFILE_ENV_VAR).ok();

        match value {
            Some(profile) => std::env::set_var(PROFILE_ENV_VAR, profile),
            None => std::env::remove_var(PROFILE_ENV_VAR),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var(PROFILE_ENV_VAR, profile),
            None => std::env::remove_var(PROFILE_ENV_VAR),
        }

        result
    }

    #[test]
    fn adapter_appends_app_dir_name() {
        with_profile(None, || {
            let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/ingest-inspector"));
        });
    }

    #[test]
    fn adapter_isolates_dirs_per_profile() {
        let dirs_a = with_profile(Some("a"), || {
            DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });
        let dirs_b = with_profile(Some("b"), || {
            DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs_a.app_data_root, PathBuf::from("/tmp/ingest-inspector-a"));
        assert_eq!(dirs_b.app_data_root, PathBuf::from("/tmp/ingest-inspector-b"));
    }

    #[test]
    fn empty_profile_is_ignored() {
        with_profile(Some(""), || {
            let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/ingest-inspector"));
        });
    }
}
