use std::sync::Arc;

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::cache::ViewSlot;
use crate::clients::BookingApi;
use crate::dto::estimate_dto::{CancelOutcome, DisplayCard, EstimateListState};
use crate::models::tour_request::CreateTourRequest;
use crate::services::request_list_projector::{self, PREVIEW_LIMIT};
use crate::utils::errors::{AppResult, LIST_LOAD_FAILED};

pub const EMPTY_LIST_MESSAGE: &str = "아직 신청한 견적이 없습니다.";
pub const CANCEL_SUCCEEDED: &str = "삭제되었습니다.";
pub const CANCEL_FAILED: &str = "삭제 중 오류가 발생했습니다.";

/// Sección "mis estimaciones"
#[derive(Clone)]
pub struct EstimateListController {
    api: Arc<dyn BookingApi>,
    cards: ViewSlot<Vec<DisplayCard>>,
}

impl EstimateListController {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self {
            api,
            cards: ViewSlot::new(),
        }
    }

    /// Cargar y proyectar la lista.
    ///
    /// Un fallo de transporte no es un error para el llamador: se devuelve la
    /// última lista válida (o vacía) con el mensaje literal de error.
    pub async fn load(&self) -> EstimateListState {
        let ticket = self.cards.begin_load().await;

        match self.api.get_my_requests().await {
            Ok(response) => {
                let cards = request_list_projector::project_response(&response);
                log::info!("✅ Loaded {} estimate cards", cards.len());
                if !self.cards.install(ticket, cards.clone()).await {
                    log::debug!("🔁 Estimate list superseded by a newer load");
                }
                Self::state(cards, Some(Utc::now()), None)
            }
            Err(e) => {
                log::error!("❌ Loading estimates failed: {}", e);
                self.snapshot(Some(LIST_LOAD_FAILED.to_string())).await
            }
        }
    }

    /// Vista previa de mi página
    pub async fn load_preview(&self) -> EstimateListState {
        let mut state = self.load().await;
        state.cards = request_list_projector::preview(&state.cards, PREVIEW_LIMIT);
        state
    }

    /// Cancelar una estimación: primero el API, luego la tarjeta
    pub async fn cancel(&self, id: i64) -> CancelOutcome {
        match self.api.cancel_tour_request(id).await {
            Ok(()) => {
                self.cards
                    .update(|cards| cards.iter().filter(|card| card.id != id).cloned().collect())
                    .await;
                log::info!("🗑️ Estimate {} removed from the list", id);
                CancelOutcome {
                    id,
                    removed: true,
                    message: CANCEL_SUCCEEDED.to_string(),
                }
            }
            Err(e) => {
                log::error!("❌ Canceling estimate {} failed: {}", id, e);
                CancelOutcome {
                    id,
                    removed: false,
                    message: CANCEL_FAILED.to_string(),
                }
            }
        }
    }

    /// Validar y reenviar una nueva solicitud de tour
    pub async fn create(&self, request: CreateTourRequest) -> AppResult<serde_json::Value> {
        request.validate()?;
        let created = self.api.create_tour_request(&request).await?;
        log::info!("📝 Tour request created for location {}", request.location_id);
        Ok(created)
    }

    /// Estado actual sin volver a cargar
    pub async fn snapshot(&self, error: Option<String>) -> EstimateListState {
        let installed = self.cards.current().await;
        let cards = installed
            .as_ref()
            .map(|i| (*i.value).clone())
            .unwrap_or_default();

        Self::state(cards, installed.map(|i| i.installed_at), error)
    }

    pub async fn teardown(&self) {
        self.cards.teardown().await;
    }

    fn state(
        cards: Vec<DisplayCard>,
        loaded_at: Option<DateTime<Utc>>,
        error: Option<String>,
    ) -> EstimateListState {
        let empty_message = if error.is_none() && cards.is_empty() {
            Some(EMPTY_LIST_MESSAGE.to_string())
        } else {
            None
        };

        EstimateListState {
            loading: false,
            error,
            empty_message,
            cards,
            loaded_at,
        }
    }
}
