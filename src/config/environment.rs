//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::cache::CacheConfig;
use crate::utils::clock::DateZone;

/// Errores de configuración
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    // API de NASA
    pub nasa_apod_base_url: String,
    pub nasa_api_key: String,
    pub nasa_timeout: Duration,
    // Cache en memoria
    pub cache: CacheConfig,
    pub timezone: DateZone,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8080,
            host: "0.0.0.0".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
            nasa_apod_base_url: "https://api.nasa.gov/planetary/apod".to_string(),
            nasa_api_key: "DEMO_KEY".to_string(),
            nasa_timeout: Duration::from_secs(10),
            cache: CacheConfig::default(),
            timezone: DateZone::Utc,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Cargar la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let cache_ttl_minutes: u64 = parse_var(&var, "APOD_CACHE_TTL_MINUTES", "number")?
            .unwrap_or(defaults.cache.ttl.as_secs() / 60);
        let cache_ttl = cache_ttl_minutes
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| ConfigError::Invalid {
                name: "APOD_CACHE_TTL_MINUTES",
                expected: "number of minutes",
                value: cache_ttl_minutes.to_string(),
            })?;
        let timezone = match var("APOD_TIMEZONE") {
            Some(value) => value.parse::<DateZone>().map_err(|_| ConfigError::Invalid {
                name: "APOD_TIMEZONE",
                expected: "timezone ('utc', 'local' or '+HH:MM')",
                value,
            })?,
            None => defaults.timezone,
        };

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&var, "PORT", "port number")?.unwrap_or(defaults.port),
            host: var("HOST").unwrap_or(defaults.host),
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            nasa_apod_base_url: var("NASA_APOD_BASE_URL").unwrap_or(defaults.nasa_apod_base_url),
            nasa_api_key: var("NASA_API_KEY").unwrap_or(defaults.nasa_api_key),
            nasa_timeout: parse_var(&var, "NASA_TIMEOUT_SECS", "number")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.nasa_timeout),
            cache: CacheConfig::new(
                parse_var(&var, "APOD_CACHE_MAX_ENTRIES", "number")?
                    .unwrap_or(defaults.cache.max_entries),
                cache_ttl,
            ),
            timezone,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(var: &F, name: &'static str, expected: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                name,
                expected,
                value,
            }),
        None => Ok(None),
    }
}
