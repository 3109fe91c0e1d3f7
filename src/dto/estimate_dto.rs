use chrono::{DateTime, Utc};
use serde::Serialize;

// Color de la insignia de estado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Gray,
    Blue,
}

// Tarjeta de "mis estimaciones", lista para pintar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCard {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub people: i64,
    pub pickup: String,
    pub status_badge: String,
    pub status_color: StatusColor,
    pub btn_text: String,
    pub btn_active: bool,
    pub image: String,
}

// Estado de la sección de estimaciones
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateListState {
    pub loading: bool,
    pub error: Option<String>,
    pub empty_message: Option<String>,
    pub cards: Vec<DisplayCard>,
    pub loaded_at: Option<DateTime<Utc>>,
}

// Resultado de cancelar una estimación
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOutcome {
    pub id: i64,
    pub removed: bool,
    pub message: String,
}
