//! Middleware
//!
//! Este módulo contiene los middlewares HTTP del servicio.

pub mod cors;
