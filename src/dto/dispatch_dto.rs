use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado fijo de cada fila de pasajero
pub const CONFIRMED_STATUS: &str = "확정";
/// Mensaje cuando la pestaña activa no tiene filas
pub const NO_ROWS_MESSAGE: &str = "표시할 데이터가 없습니다.";

// Fila de pasajero / parada
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub pickup_location: String,
    pub pickup_time: String,
    pub people: i64,
    pub status: String,
}

// Estadísticas del resumen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchStats {
    pub pickup_area_count: usize,
    pub request_count: usize,
    pub total_people: i64,
}

// Vista de detalle del plan de despacho
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDetailView {
    pub date_title: String,
    pub description: String,
    pub passengers: Vec<PassengerRow>,
    pub stats: DispatchStats,
}

/// Pestañas de la tabla de pasajeros
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PassengerTab {
    #[default]
    #[serde(rename = "확정")]
    Confirmed,
    #[serde(rename = "미확정")]
    Unconfirmed,
}

impl PassengerTab {
    pub fn includes(&self, row: &PassengerRow) -> bool {
        let confirmed = row.status == CONFIRMED_STATUS;
        match self {
            PassengerTab::Confirmed => confirmed,
            PassengerTab::Unconfirmed => !confirmed,
        }
    }
}

impl RouteDetailView {
    pub fn rows_for(&self, tab: PassengerTab) -> Vec<PassengerRow> {
        self.passengers
            .iter()
            .filter(|row| tab.includes(row))
            .cloned()
            .collect()
    }

    pub fn count_for(&self, tab: PassengerTab) -> usize {
        self.passengers.iter().filter(|row| tab.includes(row)).count()
    }
}

// Query de la página de detalle
#[derive(Debug, Default, Deserialize)]
pub struct DispatchQuery {
    pub tab: Option<PassengerTab>,
}

// Estado de la página de detalle de despacho
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchDetailState {
    pub loading: bool,
    pub error: Option<String>,
    pub route_id: Option<String>,
    pub title: String,
    pub detail: Option<RouteDetailView>,
    pub active_tab: PassengerTab,
    pub confirmed_count: usize,
    pub unconfirmed_count: usize,
    pub rows: Vec<PassengerRow>,
    pub empty_message: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}
