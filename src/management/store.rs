use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{error::Error, types::Credential};

/// Storage interface for the current credential.
///
/// Implementations persist the access token, the optional refresh token, and
/// the absolute expiration instant, and nothing else. No network access, no
/// side effects beyond storage I/O.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn save(&self, credential: &Credential) -> Result<(), Error>;

    /// Returns the stored credential, or `None` if nothing has been saved
    /// since the last `clear`.
    async fn load(&self) -> Result<Option<Credential>, Error>;

    async fn clear(&self) -> Result<(), Error>;

    /// Returns the stored credential only if it is present and not expired.
    async fn load_valid(&self) -> Result<Option<Credential>, Error> {
        Ok(self.load().await?.filter(|c| c.is_valid()))
    }
}

/// Durable token storage as a JSON file in the local data directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new() -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spomix/cache/token.json");
        FileTokenStore { path }
    }

    /// Uses a custom file path instead of the data directory.
    pub fn with_path(path: PathBuf) -> Self {
        FileTokenStore { path }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn save(&self, credential: &Credential) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(credential)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<Credential>, Error> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let credential: Credential = serde_json::from_str(&content)?;
        Ok(Some(credential))
    }

    async fn clear(&self) -> Result<(), Error> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token storage. Clones share the same slot, so a gateway and a
/// flow controller handed clones of one store observe each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<Credential>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn save(&self, credential: &Credential) -> Result<(), Error> {
        *self.slot.lock().await = Some(credential.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Credential>, Error> {
        Ok(self.slot.lock().await.clone())
    }

    async fn clear(&self) -> Result<(), Error> {
        *self.slot.lock().await = None;
        Ok(())
    }
}
