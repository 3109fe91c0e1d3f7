//! Cache
//!
//! Este módulo contiene el estado en memoria de las vistas: la última vista
//! válida de cada página y el control de cargas obsoletas.

pub mod view_slot;

pub use view_slot::{Installed, LoadTicket, ViewSlot};
