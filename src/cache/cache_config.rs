//! Configuración de cache
//!
//! Este módulo contiene la configuración para el cache de APOD en memoria.

use std::time::Duration;

/// Configuración del cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_entries: usize,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 50,
            ttl: Duration::from_secs(60 * 60), // 60 minutos
        }
    }
}

impl CacheConfig {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self { max_entries, ttl }
    }

    /// Capacidad o TTL en cero: el cache nunca retiene nada
    pub fn is_disabled(&self) -> bool {
        self.max_entries == 0 || self.ttl.is_zero()
    }
}
