//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y lectura tolerante de payloads JSON.

pub mod errors;
pub mod json_fields;
pub mod validation;

pub use errors::{AppError, AppResult};
