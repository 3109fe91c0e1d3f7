//! Tour booking views
//!
//! Servicio intermedio entre las páginas de reservas turísticas y el API de
//! reservas: normaliza las respuestas del API y las proyecta en vistas
//! listas para pintar (tarjetas de estimaciones, detalle de despacho y
//! perfil).

pub mod cache;
pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
