//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: servidor, CORS, nivel de
//! log y conexión con el API de reservas.

use std::env;

use crate::utils::errors::{config_error, AppResult};

/// Configuración del API de reservas
#[derive(Debug, Clone, PartialEq)]
pub struct BookingApiConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub booking_api: BookingApiConfig,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración de una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| config_error("PORT", "must be a valid port number"))?,
            None => 3000,
        };

        let timeout_secs = match var("BOOKING_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| config_error("BOOKING_API_TIMEOUT_SECS", "must be a positive number"))?,
            None => 30,
        };

        let base_url = var("BOOKING_API_BASE_URL")
            .ok_or_else(|| config_error("BOOKING_API_BASE_URL", "must be set"))?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(config_error("BOOKING_API_BASE_URL", "must start with http:// or https://"));
        }

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            port,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            cors_origins,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "debug".to_string()),
            booking_api: BookingApiConfig {
                base_url,
                auth_token: var("BOOKING_API_TOKEN"),
                timeout_secs,
            },
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

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de log para el subscriber de tracing; valores inválidos caen en DEBUG
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::DEBUG)
    }
}
