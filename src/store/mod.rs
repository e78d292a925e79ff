//! The subscriber store: a set of unique email addresses.
//!
//! `SubscriberStore` is built once at startup and handed to the handlers through `AppState`.
//! Every operation is a single atomic store primitive, so no in-process locking is needed
//! around a subscribe request.

mod memory;
mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

use tracing::info;

use crate::config::{StoreBackend, StoreConfig};

#[derive(Clone, Debug)]
pub enum SubscriberStore {
    Redis(RedisStore),
    Memory(MemoryStore),
}

impl SubscriberStore {
    pub async fn init(config: &StoreConfig) -> Result<Self> {
        let store = match config.backend {
            StoreBackend::Redis => Self::Redis(RedisStore::init(config).await?),
            StoreBackend::Memory => {
                info!("{:<20} - Using the in-memory subscriber set", "init_store");
                Self::Memory(MemoryStore::default())
            }
        };

        Ok(store)
    }

    /// Adds `email` to the subscriber set.
    /// Returns `true` if the email was not a member before this call.
    pub async fn add(&self, email: &str) -> Result<bool> {
        match self {
            Self::Redis(store) => store.add(email).await,
            Self::Memory(store) => store.insert(email),
        }
    }

    /// Number of distinct subscribed emails.
    pub async fn count(&self) -> Result<u64> {
        match self {
            Self::Redis(store) => store.count().await,
            Self::Memory(store) => store.count(),
        }
    }

    /// Releases the connections held by the store.
    pub async fn shutdown(&self) -> Result<()> {
        match self {
            Self::Redis(store) => store.quit().await,
            Self::Memory(_) => Ok(()),
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("redis error: {0}")]
    Redis(#[from] fred::error::Error),
    #[error("the in-memory subscriber set lock was poisoned")]
    Poisoned,
}
