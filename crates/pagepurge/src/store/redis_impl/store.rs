//! Redis purge store.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;

use pagepurge_core::purge::{PurgeError, PurgeStore, Result};

use super::error::map_redis_error;

/// Deletes every key matching `KEYS[1]` and returns how many were removed.
///
/// Runs inside Redis as one script, so no other command can interleave
/// between the `KEYS` lookup and the deletes.
const DELETE_BY_PATTERN_SCRIPT: &str = r#"
local k = 0
for i, name in ipairs(redis.call('KEYS', KEYS[1])) do
    redis.call('DEL', name)
    k = k + 1
end
return k
"#;

/// Upper bound for the pause between two connection attempts.
const MAX_RETRY_DELAY: Duration = Duration::from_millis(500);

/// How hard to try reaching Redis before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Timeout of a single connection attempt.
    pub timeout: Duration,
    /// Attempts after the first one.
    pub retries: usize,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            retries: 2,
        }
    }
}

impl ConnectOptions {
    /// Worst-case time spent connecting: every attempt times out and every
    /// pause hits the cap.
    fn budget(&self) -> Duration {
        let attempts = u32::try_from(self.retries).unwrap_or(u32::MAX).saturating_add(1);
        self.timeout
            .saturating_mul(attempts)
            .saturating_add(MAX_RETRY_DELAY.saturating_mul(attempts - 1))
    }
}

/// Redis purge store using a connection manager.
///
/// The manager multiplexes one connection, reconnects on failure and is
/// cloned per command, so a single store can serve concurrent purges.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379/0" or
    ///   "redis+unix:///run/redis.sock?db=0")
    /// * `options` - Per-attempt timeout and retry budget
    ///
    /// # Errors
    ///
    /// Returns `PurgeError::Connection` if the connection cannot be
    /// established within the retry budget.
    pub async fn new(url: &str, options: ConnectOptions) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(options.retries)
            .set_max_delay(MAX_RETRY_DELAY.as_millis() as u64)
            .set_connection_timeout(options.timeout);

        let budget = options.budget();
        let conn = tokio::time::timeout(budget, ConnectionManager::new_with_config(client, config))
            .await
            .map_err(|_| {
                PurgeError::Connection(format!("no connection to Redis after {:?}", budget))
            })?
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl PurgeStore for RedisStore {
    async fn delete_key(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(key).await.map_err(map_redis_error)?;
        Ok(removed > 0)
    }

    async fn delete_matching(&self, pattern: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        let removed: u64 = redis::cmd("EVAL")
            .arg(DELETE_BY_PATTERN_SCRIPT)
            .arg(1)
            .arg(pattern)
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(removed)
    }
}
