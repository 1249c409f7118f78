//! Store backends for the purger.
//!
//! Redis is the production backend. The in-process
//! [`MemoryStore`](pagepurge_core::purge::MemoryStore) from the core crate
//! implements the same trait and backs the purger tests.

mod redis_impl;

pub use redis_impl::{ConnectOptions, RedisStore};
