//! Services module
//!
//! Este módulo contiene la lógica de negocio: desempaquetado de respuestas
//! del API de reservas y proyección a vistas listas para pintar. Todas las
//! funciones son puras respecto de su entrada.

pub mod display_formatter;
pub mod profile_projector;
pub mod request_list_projector;
pub mod response_unwrapper;
pub mod route_detail_projector;

pub use response_unwrapper::{unwrap_detail, unwrap_list, ResponseEnvelope};
