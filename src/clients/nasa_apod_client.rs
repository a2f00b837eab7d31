//! Cliente HTTP para la API APOD de NASA
//!
//! Implementa `ApodDataSource` con `reqwest`. No reintenta: cualquier fallo
//! se devuelve como `FetchError` al servicio.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::models::ApodResponse;
use crate::services::data_source::{ApodDataSource, FetchError};

/// Cliente HTTP para NASA APOD
#[derive(Clone)]
pub struct NasaApodClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NasaApodClient {
    /// Crear nuevo cliente con timeout por petición
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("apod-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ApodDataSource for NasaApodClient {
    async fn fetch(&self, key: &str) -> Result<Option<ApodResponse>, FetchError> {
        // La API key nunca se registra
        log::info!("🌐 Consultando NASA APOD: {}?date={}", self.base_url, key);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("api_key", self.api_key.as_str()), ("date", key)])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        log::info!("📡 NASA APOD status para {}: {}", key, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ NASA APOD falló con status {}: {}", status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        let apod: ApodResponse = serde_json::from_str(trimmed)
            .map_err(|e| FetchError::Decode(format!("Failed to parse APOD response: {}", e)))?;
        Ok(Some(apod))
    }
}

fn map_transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else {
        FetchError::Network(e)
    }
}
