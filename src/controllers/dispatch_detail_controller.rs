use std::sync::Arc;

use chrono::Utc;

use crate::cache::ViewSlot;
use crate::clients::BookingApi;
use crate::dto::dispatch_dto::{DispatchDetailState, PassengerTab, RouteDetailView, NO_ROWS_MESSAGE};
use crate::services::response_unwrapper::unwrap_detail;
use crate::services::route_detail_projector::{self, DETAIL_TITLE};
use crate::utils::errors::{AppError, AppResult};

/// Vista instalada junto con la ruta a la que pertenece
#[derive(Debug, Clone)]
struct LoadedRoute {
    route_id: String,
    view: RouteDetailView,
}

/// Página de detalle del plan de despacho
#[derive(Clone)]
pub struct DispatchDetailController {
    api: Arc<dyn BookingApi>,
    detail: ViewSlot<LoadedRoute>,
}

impl DispatchDetailController {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self {
            api,
            detail: ViewSlot::new(),
        }
    }

    /// Obtener y proyectar el detalle de una ruta
    pub async fn fetch(&self, route_id: Option<&str>) -> AppResult<RouteDetailView> {
        let route_id = route_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(AppError::MissingRouteIdentifier)?;

        let response = self.api.get_route_detail(route_id).await?;
        let detail = response.as_ref().and_then(unwrap_detail);
        route_detail_projector::project(route_id, detail.as_ref())
    }

    /// Cargar la página para `route_id`.
    ///
    /// Sin identificador no se llama al API. Cualquier fallo deja la página
    /// sin detalle y con el mensaje literal que corresponde al error.
    pub async fn load(&self, route_id: Option<&str>, tab: PassengerTab) -> DispatchDetailState {
        let route_key = route_id.map(str::trim).filter(|id| !id.is_empty()).map(str::to_string);

        if route_key.is_none() {
            log::warn!("⚠️ Dispatch detail requested without a route id");
            let error = AppError::MissingRouteIdentifier;
            return Self::state(None, None, tab, Some(error.detail_message().to_string()));
        }

        let ticket = self.detail.begin_load().await;
        match self.fetch(route_key.as_deref()).await {
            Ok(view) => {
                let route_id = route_key.clone().unwrap_or_default();
                log::info!("✅ Loaded dispatch detail for route {}", route_id);

                // La respuesta siempre es la ruta pedida; la ranura sólo guarda la más reciente
                let loaded = LoadedRoute { route_id, view };
                let installed = self.detail.install(ticket, loaded.clone()).await;
                if !installed {
                    log::debug!("🔁 Route {} superseded by a newer load", loaded.route_id);
                }

                let mut state = Self::state(Some(loaded.route_id), Some(loaded.view), tab, None);
                state.loaded_at = Some(Utc::now());
                state
            }
            Err(e) => {
                log::error!(
                    "❌ Loading dispatch detail for route {} failed: {}",
                    route_key.as_deref().unwrap_or_default(),
                    e
                );
                self.detail.clear(ticket).await;
                Self::state(route_key, None, tab, Some(e.detail_message().to_string()))
            }
        }
    }

    /// Estado actual sin volver a cargar
    pub async fn snapshot(&self, tab: PassengerTab) -> DispatchDetailState {
        match self.detail.current().await {
            Some(installed) => {
                let loaded = (*installed.value).clone();
                let mut state = Self::state(Some(loaded.route_id), Some(loaded.view), tab, None);
                state.loaded_at = Some(installed.installed_at);
                state
            }
            None => Self::state(None, None, tab, None),
        }
    }

    pub async fn teardown(&self) {
        self.detail.teardown().await;
    }

    fn state(
        route_id: Option<String>,
        detail: Option<RouteDetailView>,
        tab: PassengerTab,
        error: Option<String>,
    ) -> DispatchDetailState {
        let (title, confirmed_count, unconfirmed_count, rows) = match &detail {
            Some(view) => (
                view.date_title.clone(),
                view.count_for(PassengerTab::Confirmed),
                view.count_for(PassengerTab::Unconfirmed),
                view.rows_for(tab),
            ),
            None => (DETAIL_TITLE.to_string(), 0, 0, Vec::new()),
        };

        let empty_message = if error.is_none() && rows.is_empty() {
            Some(NO_ROWS_MESSAGE.to_string())
        } else {
            None
        };

        DispatchDetailState {
            loading: false,
            error,
            route_id,
            title,
            detail,
            active_tab: tab,
            confirmed_count,
            unconfirmed_count,
            rows,
            empty_message,
            loaded_at: None,
        }
    }
}
