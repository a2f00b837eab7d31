//! Cache
//!
//! Este módulo contiene el cache en memoria de APOD: la estructura LRU y la
//! capa con TTL que la protege con un mutex.

pub mod apod_cache;
pub mod cache_config;
pub mod lru_cache;

pub use apod_cache::{ApodCache, CacheEntry, CacheStats};
pub use cache_config::CacheConfig;
pub use lru_cache::LruCache;
