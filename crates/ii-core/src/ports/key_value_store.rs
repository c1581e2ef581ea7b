use async_trait::async_trait;

/// Durable local storage of string slots addressed by key.
///
/// Last write wins; there is no coordination between processes.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Returns `None` when nothing was ever stored under `key`.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
