//! Redis purge backend.
//!
//! Single deletes go through `DEL`. Wildcard deletes run a Lua script with
//! `EVAL` so the `KEYS` lookup and the deletes execute atomically on the
//! server.

mod error;
mod store;

pub use store::{ConnectOptions, RedisStore};
