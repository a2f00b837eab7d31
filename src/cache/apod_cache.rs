//! Cache de APOD en memoria
//!
//! Un `LruCache` de fecha a entrada, con expiración perezosa por TTL y un
//! único mutex que protege el mapa, el orden de recencia y los contadores.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use super::cache_config::CacheConfig;
use super::lru_cache::LruCache;
use crate::models::ApodResponse;
use crate::utils::clock::Clock;

/// Entrada inmutable: se reemplaza entera, nunca se modifica
#[derive(Debug, Clone)]
pub struct CacheEntry {
    value: ApodResponse,
    cached_at: Instant,
}

impl CacheEntry {
    pub fn new(value: ApodResponse, cached_at: Instant) -> Self {
        Self { value, cached_at }
    }

    pub fn value(&self) -> &ApodResponse {
        &self.value
    }

    pub fn cached_at(&self) -> Instant {
        self.cached_at
    }
}

/// Estadísticas del cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub ttl_seconds: u64,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub evictions: u64,
    pub insertions: u64,
}

#[derive(Debug, Default)]
struct Counters {
    hits: u64,
    misses: u64,
    expirations: u64,
    evictions: u64,
    insertions: u64,
}

struct Inner {
    entries: LruCache<String, CacheEntry>,
    counters: Counters,
}

/// Cache acotado con TTL, compartido por todo el proceso
#[derive(Clone)]
pub struct ApodCache {
    inner: Arc<Mutex<Inner>>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
}

impl ApodCache {
    /// Crear nuevo cache vacío
    pub fn new(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: LruCache::new(config.max_entries),
                counters: Counters::default(),
            })),
            config,
            clock,
        }
    }

    /// Obtener un valor vigente.
    ///
    /// Una entrada cuya edad supera el TTL se elimina y se trata como
    /// ausente. Un acierto la marca como la más reciente.
    pub async fn get(&self, key: &str) -> Option<ApodResponse> {
        let mut inner = self.inner.lock().await;
        let now = self.clock.now();

        let cached_at = match inner.entries.peek(key).map(CacheEntry::cached_at) {
            Some(cached_at) => cached_at,
            None => {
                inner.counters.misses += 1;
                debug!("❌ Cache MISS para clave: {}", key);
                return None;
            }
        };

        if now.saturating_duration_since(cached_at) > self.config.ttl {
            inner.entries.remove(key);
            inner.counters.expirations += 1;
            inner.counters.misses += 1;
            debug!("⏰ Cache EXPIRADO para clave: {}", key);
            return None;
        }

        inner.counters.hits += 1;
        debug!("📥 Cache HIT para clave: {}", key);
        inner.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Guardar un valor; `None` nunca se cachea
    pub async fn put(&self, key: &str, value: Option<ApodResponse>) {
        let Some(value) = value else {
            debug!("🚫 Valor vacío para clave {}, no se cachea", key);
            return;
        };
        if self.config.is_disabled() {
            return;
        }

        let mut inner = self.inner.lock().await;
        let entry = CacheEntry::new(value, self.clock.now());
        inner.counters.insertions += 1;
        debug!("💾 Cache SET para clave: {}", key);

        if let Some((evicted, _)) = inner.entries.insert(key.to_string(), entry) {
            inner.counters.evictions += 1;
            debug!("🗑️ Cache EVICT (LRU) para clave: {}", evicted);
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.entries.is_empty()
    }

    /// Indica si la clave está almacenada, vigente o no, sin tocar la recencia
    pub async fn contains(&self, key: &str) -> bool {
        self.inner.lock().await.entries.contains(key)
    }

    /// Claves de la más reciente a la menos reciente
    pub async fn keys(&self) -> Vec<String> {
        self.inner.lock().await.entries.keys()
    }

    /// Obtener estadísticas del cache
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.lock().await;
        CacheStats {
            entries: inner.entries.len(),
            capacity: self.config.max_entries,
            ttl_seconds: self.config.ttl.as_secs(),
            hits: inner.counters.hits,
            misses: inner.counters.misses,
            expirations: inner.counters.expirations,
            evictions: inner.counters.evictions,
            insertions: inner.counters.insertions,
        }
    }
}
