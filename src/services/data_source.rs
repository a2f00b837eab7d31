//! Fuente de datos upstream
//!
//! El servicio de APOD sólo conoce este trait. La implementación real es
//! `NasaApodClient`; los tests usan fuentes simuladas.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ApodResponse;

/// Errores al consultar la fuente upstream
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream timeout: {0}")]
    Timeout(String),

    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed upstream response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout(_))
    }
}

/// Proveedor de APOD por clave de fecha.
///
/// `Ok(None)` significa que el upstream respondió sin contenido utilizable.
/// Los reintentos, si los hay, son responsabilidad de la implementación.
#[async_trait]
pub trait ApodDataSource: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Option<ApodResponse>, FetchError>;
}
