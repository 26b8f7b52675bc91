use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::LocalStorage;
use crate::repositories::SessionRepository;

/// Source of the bearer token attached to API requests.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Current token; `None` when nothing usable is stored.
    async fn token(&self) -> Result<Option<String>>;
}

/// Token kept in the session table under a fixed key.
pub struct SqliteTokenStore {
    storage: Arc<LocalStorage>,
    key: String,
}

impl SqliteTokenStore {
    pub fn new(storage: Arc<LocalStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist a token, replacing any previous one.
    pub async fn store(&self, token: &str) -> Result<()> {
        SessionRepository::set(&self.storage.conn, &self.key, token).await
    }

    pub async fn clear(&self) -> Result<bool> {
        SessionRepository::delete(&self.storage.conn, &self.key).await
    }
}

#[async_trait]
impl TokenStore for SqliteTokenStore {
    async fn token(&self) -> Result<Option<String>> {
        let token = SessionRepository::get(&self.storage.conn, &self.key).await?;
        Ok(token.filter(|t| !t.trim().is_empty()))
    }
}

/// Process-local token, used when no database is wanted.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }

    pub async fn set(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.token.read().await.clone().filter(|t| !t.trim().is_empty()))
    }
}
