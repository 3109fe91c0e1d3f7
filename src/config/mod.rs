//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de variables de entorno del
//! servicio y del API de reservas.

pub mod environment;

pub use environment::*;
