//! Redis error mapping to PurgeError.

use pagepurge_core::purge::PurgeError;

/// Maps Redis errors to PurgeError.
pub fn map_redis_error(err: redis::RedisError) -> PurgeError {
    if err.is_connection_refusal()
        || err.is_timeout()
        || err.is_connection_dropped()
        || err.is_io_error()
    {
        PurgeError::Connection(err.to_string())
    } else {
        PurgeError::Command(err.to_string())
    }
}
