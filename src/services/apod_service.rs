//! Servicio de APOD
//!
//! Orquesta el cache y la fuente upstream: consulta el cache, en fallo
//! llama a la fuente, guarda el resultado y lo devuelve. No deduplica
//! fallos concurrentes de la misma clave: ambos llamadores consultan la
//! fuente y el último en escribir gana.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::cache::ApodCache;
use crate::models::ApodResponse;
use crate::services::data_source::{ApodDataSource, FetchError};
use crate::utils::clock::Clock;
use crate::utils::dates::{date_key, days_before};

/// Servicio de APOD con cache en memoria
#[derive(Clone)]
pub struct ApodService {
    cache: ApodCache,
    source: Arc<dyn ApodDataSource>,
    clock: Arc<dyn Clock>,
}

impl ApodService {
    pub fn new(cache: ApodCache, source: Arc<dyn ApodDataSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache,
            source,
            clock,
        }
    }

    pub fn cache(&self) -> &ApodCache {
        &self.cache
    }

    /// Obtener el APOD de una fecha (cache primero, luego NASA)
    pub async fn fetch_by_key(&self, key: &str) -> Result<Option<ApodResponse>, FetchError> {
        if let Some(cached) = self.cache.get(key).await {
            log::debug!("✅ APOD {} servido desde cache", key);
            return Ok(Some(cached));
        }

        log::info!("🌐 APOD {} no está en cache, consultando upstream", key);
        let fetched = self.source.fetch(key).await.map_err(|e| {
            log::error!("❌ Error obteniendo APOD {}: {}", key, e);
            e
        })?;

        if fetched.is_none() {
            log::warn!("⚠️ Upstream no devolvió contenido para {}", key);
        }
        self.cache.put(key, fetched.clone()).await;

        Ok(fetched)
    }

    /// Obtener el APOD de hoy según el reloj configurado
    pub async fn fetch_by_today(&self) -> Result<Option<ApodResponse>, FetchError> {
        let key = date_key(self.clock.today());
        self.fetch_by_key(&key).await
    }

    /// Obtener `count` días consecutivos hacia atrás desde `anchor` (incluido).
    ///
    /// El resultado va del más reciente al más antiguo y omite los días sin
    /// contenido. El primer error aborta el resto del rango.
    pub async fn fetch_range(
        &self,
        anchor: NaiveDate,
        count: usize,
    ) -> Result<Vec<ApodResponse>, FetchError> {
        let mut result = Vec::with_capacity(count.min(64));

        for offset in 0..count as u64 {
            let Some(date) = days_before(anchor, offset) else {
                log::debug!("📅 Rango truncado en offset {}: fecha fuera de rango", offset);
                break;
            };

            if let Some(apod) = self.fetch_by_key(&date_key(date)).await? {
                result.push(apod);
            }
        }

        log::info!(
            "✅ Rango desde {} completado: {} de {} días",
            date_key(anchor),
            result.len(),
            count
        );
        Ok(result)
    }

    /// Obtener los últimos `count` días terminando hoy
    pub async fn fetch_recent(&self, count: usize) -> Result<Vec<ApodResponse>, FetchError> {
        self.fetch_range(self.clock.today(), count).await
    }
}
