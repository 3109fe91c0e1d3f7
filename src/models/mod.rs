//! Modelos del sistema
//!
//! Este módulo contiene los modelos crudos tal como llegan del API de
//! reservas, decodificados de forma tolerante.

pub mod member;
pub mod route_detail;
pub mod tour_request;
