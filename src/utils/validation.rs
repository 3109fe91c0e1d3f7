//! Utilidades de validación
//!
//! Validadores usados por `#[validate(custom = ...)]` en las peticiones
//! de reserva antes de reenviarlas al API.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use validator::ValidationError;

/// Validar fecha con formato YYYY-MM-DD
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar timestamp ISO-8601, con o sin zona horaria
pub fn validate_iso_timestamp(value: &str) -> Result<(), ValidationError> {
    let parsed = DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok();

    if !parsed {
        let mut error = ValidationError::new("timestamp");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"ISO-8601".to_string());
        return Err(error);
    }
    Ok(())
}
