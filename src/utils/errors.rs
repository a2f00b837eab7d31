//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la capa HTTP
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::data_source::FetchError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("External API error: {0}")]
    ExternalApi(#[from] FetchError),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::BadRequest(msg) => {
                log::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                log::info!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::ExternalApi(e) => {
                log::error!("External API error: {}", e);
                let (status, code) = if e.is_timeout() {
                    (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT")
                } else {
                    (StatusCode::BAD_GATEWAY, "EXTERNAL_API_ERROR")
                };
                let upstream_status = match &e {
                    FetchError::Status { status, .. } => Some(*status),
                    _ => None,
                };
                (
                    status,
                    ErrorResponse {
                        error: "External API Error".to_string(),
                        message: "An error occurred while communicating with NASA APOD".to_string(),
                        details: Some(json!({
                            "external_api_error": e.to_string(),
                            "upstream_status": upstream_status,
                        })),
                        code: Some(code.to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} for '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
