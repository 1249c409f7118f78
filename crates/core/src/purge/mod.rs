mod error;
mod keys;
mod memory;
mod patterns;
mod traits;
mod types;

pub use error::{PurgeError, Result};
pub use keys::{
    custom_key_base, is_wildcard, network_pattern, purge_key, site_pattern, REQUEST_METHOD,
    WILDCARD,
};
pub use memory::MemoryStore;
pub use patterns::pattern_matches;
pub use traits::{NoopHooks, PurgeHooks, PurgeStore};
pub use types::{PurgeRequest, PurgeResult, PurgeScope, PurgerConfig};
