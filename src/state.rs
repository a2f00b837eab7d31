//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::cache::ApodCache;
use crate::clients::NasaApodClient;
use crate::config::environment::EnvironmentConfig;
use crate::services::data_source::{ApodDataSource, FetchError};
use crate::services::ApodService;
use crate::utils::clock::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub apod_service: ApodService,
}

impl AppState {
    /// Construir el estado con el cliente NASA real y el reloj del sistema
    pub fn new(config: EnvironmentConfig) -> Result<Self, FetchError> {
        let client = NasaApodClient::new(
            config.nasa_apod_base_url.clone(),
            config.nasa_api_key.clone(),
            config.nasa_timeout,
        )?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.timezone));
        Ok(Self::with_parts(config, Arc::new(client), clock))
    }

    /// Construir el estado con una fuente y un reloj arbitrarios
    pub fn with_parts(
        config: EnvironmentConfig,
        source: Arc<dyn ApodDataSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cache = ApodCache::new(config.cache.clone(), clock.clone());
        Self {
            apod_service: ApodService::new(cache, source, clock),
            config,
        }
    }
}
