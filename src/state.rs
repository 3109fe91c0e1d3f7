//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: la configuración, el cliente del API de
//! reservas (inyectado) y el estado de cada página.

use std::sync::Arc;

use crate::clients::BookingApi;
use crate::config::environment::EnvironmentConfig;
use crate::controllers::{DispatchDetailController, EstimateListController, ProfileController};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub booking_api: Arc<dyn BookingApi>,
    pub estimates: EstimateListController,
    pub dispatch: DispatchDetailController,
    pub profile: ProfileController,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, booking_api: Arc<dyn BookingApi>) -> Self {
        Self {
            config: Arc::new(config),
            estimates: EstimateListController::new(Arc::clone(&booking_api)),
            dispatch: DispatchDetailController::new(Arc::clone(&booking_api)),
            profile: ProfileController::new(Arc::clone(&booking_api)),
            booking_api,
        }
    }

    /// Cerrar todas las páginas: las cargas en vuelo se descartan
    pub async fn teardown(&self) {
        self.estimates.teardown().await;
        self.dispatch.teardown().await;
        log::info!("🧹 Page views torn down");
    }
}
