//! Sistema de manejo de errores
//!
//! Este módulo define los errores del servicio de vistas, sus mensajes
//! literales para el usuario y su conversión a respuestas HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Mensaje de la lista de estimaciones cuando falla el transporte
pub const LIST_LOAD_FAILED: &str = "데이터를 불러오는 중 오류가 발생했습니다.";
/// Mensaje del detalle de despacho cuando falla el transporte
pub const DETAIL_LOAD_FAILED: &str = "상세 정보를 불러오지 못했습니다.";
/// Mensaje cuando el API no devuelve datos de detalle
pub const DETAIL_NOT_FOUND: &str = "상세 데이터가 없습니다.";
/// Mensaje cuando falta el identificador de ruta
pub const ROUTE_ID_MISSING: &str = "routeId가 없습니다.";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status} for {endpoint}")]
    UpstreamStatus { status: u16, endpoint: String },

    #[error("No detail data for route '{0}'")]
    NotFoundDetail(String),

    #[error("Route identifier is missing")]
    MissingRouteIdentifier,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Fallo de transporte contra el API de reservas (red o estado HTTP)
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::UpstreamStatus { .. })
    }

    /// Mensaje literal mostrado en la página de detalle de despacho
    pub fn detail_message(&self) -> &'static str {
        match self {
            AppError::NotFoundDetail(_) => DETAIL_NOT_FOUND,
            AppError::MissingRouteIdentifier => ROUTE_ID_MISSING,
            _ => DETAIL_LOAD_FAILED,
        }
    }
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
            AppError::Transport(e) => {
                log::error!("❌ Transport error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Transport Error".to_string(),
                        message: "An error occurred while communicating with the booking API".to_string(),
                        details: Some(json!({ "transport_error": e.to_string() })),
                        code: Some("TRANSPORT_ERROR".to_string()),
                    },
                )
            }

            AppError::UpstreamStatus { status, endpoint } => {
                log::error!("❌ Upstream HTTP {} for {}", status, endpoint);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Upstream Error".to_string(),
                        message: "The booking API rejected the request".to_string(),
                        details: Some(json!({ "status": status, "endpoint": endpoint })),
                        code: Some("UPSTREAM_STATUS".to_string()),
                    },
                )
            }

            AppError::NotFoundDetail(route_id) => {
                log::warn!("⚠️ No detail data for route {}", route_id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: DETAIL_NOT_FOUND.to_string(),
                        details: Some(json!({ "route_id": route_id })),
                        code: Some("NOT_FOUND_DETAIL".to_string()),
                    },
                )
            }

            AppError::MissingRouteIdentifier => {
                log::warn!("⚠️ Route identifier missing");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: ROUTE_ID_MISSING.to_string(),
                        details: None,
                        code: Some("MISSING_ROUTE_ID".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                log::warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Config(msg) => {
                log::error!("❌ Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Configuration Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFIG_ERROR".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                log::error!("❌ Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de configuración
pub fn config_error(variable: &str, reason: &str) -> AppError {
    AppError::Config(format!("{}: {}", variable, reason))
}
