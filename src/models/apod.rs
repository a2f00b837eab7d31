//! Modelo de la respuesta APOD
//!
//! Refleja el JSON que devuelve la API de NASA. El proxy lo devuelve tal
//! cual a los clientes, con los mismos nombres de campo.

use serde::{Deserialize, Serialize};

/// Imagen astronómica del día
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApodResponse {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ApodResponse {
    pub fn is_image(&self) -> bool {
        self.media_type == "image"
    }

    pub fn is_video(&self) -> bool {
        self.media_type == "video"
    }
}
