//! Cache module for storing normalized API rows
//!
//! The web front-end caches each normalized row list under a key derived
//! from the category (and filter, where one applies) so repeated form
//! submissions within the TTL window do not re-query the upstream
//! providers. Entries expire after a fixed TTL; an expired entry behaves
//! exactly like a miss.

mod manager;

pub use manager::CacheManager;
