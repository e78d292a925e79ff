use fred::{
    prelude::{ClientLike, Config, Pool, SetsInterface},
    types::Builder,
};
use secrecy::ExposeSecret;
use tracing::info;

use super::Result;
use crate::config::StoreConfig;

/// Contains a redis connection pool that is cheaply cloneable,
/// and the key of the set the subscribers are stored in.
#[derive(Clone, Debug)]
pub struct RedisStore {
    pool: Pool,
    set_key: String,
}

impl RedisStore {
    pub async fn init(store_config: &StoreConfig) -> Result<Self> {
        info!("{:<20} - Initializing the REDIS client", "init_redis_cl");
        let conf = Config::from_url(store_config.url.expose_secret())?;
        let connect_timeout = store_config.connect_timeout();

        let pool = Builder::from_config(conf)
            .with_connection_config(|config| config.connection_timeout = connect_timeout)
            .build_pool(store_config.pool_size)?;

        pool.init().await?;
        info!("connected to REDIS");

        Ok(RedisStore {
            pool,
            set_key: store_config.set_key.clone(),
        })
    }

    /// `SADD` replies with the number of members that were actually added,
    /// which makes insert-if-absent a single atomic command.
    pub async fn add(&self, email: &str) -> Result<bool> {
        let added: u64 = self.pool.next().sadd(self.set_key.as_str(), email).await?;
        Ok(added > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        let count: u64 = self.pool.next().scard(self.set_key.as_str()).await?;
        Ok(count)
    }

    pub async fn quit(&self) -> Result<()> {
        info!("{:<20} - Closing the REDIS connections", "quit_redis_cl");
        self.pool.quit().await?;
        Ok(())
    }
}
