use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use ii_core::ports::KeyValueStorePort;
use tokio::fs;

/// One JSON file per key under a root directory: `<root>/<key>.json`.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            bail!("invalid store key: {key:?}");
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    async fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("create store dir failed: {}", self.root.display()))
    }

    /// Writes next to the target and renames over it, so readers see either
    /// the old or the new content.
    async fn atomic_write(&self, path: &Path, content: &str) -> Result<()> {
        self.ensure_root().await?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store file failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, path).await.with_context(|| {
            format!(
                "rename temp store file to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("read store file failed: {}", path.display()))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.atomic_write(&path, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        assert_eq!(store.get("recent-ingests").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_returns_value_and_creates_root() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("store"));

        store.set("recent-ingests", "[]").await.unwrap();

        assert_eq!(
            store.get("recent-ingests").await.unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("store/recent-ingests.json").exists());
        assert!(!dir.path().join("store/recent-ingests.json.tmp").exists());
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn keys_cannot_escape_the_root() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        assert!(store.set("../outside", "x").await.is_err());
        assert!(store.get("").await.is_err());
    }
}
