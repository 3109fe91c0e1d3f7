//! Modelo de TourRequest
//!
//! Solicitudes de tour tal como las devuelve `GET /api/tour-requests/me`,
//! más el payload de creación que se reenvía a `POST /api/tour-requests`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::utils::json_fields::{read_i64, read_nonzero_i64, read_string};
use crate::utils::validation::{validate_date, validate_iso_timestamp};

/// Claves candidatas del identificador de ubicación, en orden de preferencia
pub const LOCATION_ID_KEYS: &[&str] = &["locationId", "location_id"];

/// Estado de una solicitud de tour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Waiting,
    Canceled,
    /// Cualquier otro estado (CONFIRMED, MATCHED, ...) se trata como "listo"
    Resolved(String),
}

impl RequestStatus {
    pub fn from_str(s: &str) -> Self {
        match s {
            "WAITING" => RequestStatus::Waiting,
            "CANCELED" => RequestStatus::Canceled,
            other => RequestStatus::Resolved(other.to_string()),
        }
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self, RequestStatus::Waiting)
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, RequestStatus::Canceled)
    }
}

/// Solicitud de tour cruda del API de reservas
#[derive(Debug, Clone, PartialEq)]
pub struct RawTourRequest {
    pub id: Option<i64>,
    pub status: RequestStatus,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location_id: Option<i64>,
    pub location_name: Option<String>,
    pub participant_count: Option<i64>,
    pub pickup_time: Option<String>,
}

impl RawTourRequest {
    /// Decodificar un elemento de la lista campo a campo; nunca falla
    pub fn from_json(json_data: &Value) -> Self {
        let status = json_data
            .get("status")
            .and_then(|v| v.as_str())
            .map(RequestStatus::from_str)
            .unwrap_or_else(|| RequestStatus::Resolved(String::new()));

        Self {
            id: read_i64(json_data, &["id"]),
            status,
            start_date: read_string(json_data, &["startDate"]),
            end_date: read_string(json_data, &["endDate"]),
            location_id: read_nonzero_i64(json_data, LOCATION_ID_KEYS),
            location_name: read_string(json_data, &["locationName"]),
            participant_count: read_i64(json_data, &["participantCount"]),
            pickup_time: read_string(json_data, &["pickupTime"]),
        }
    }
}

/// Request para crear una nueva solicitud de tour
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTourRequest {
    #[validate(range(min = 1))]
    pub location_id: i64,

    #[validate(custom = "validate_date")]
    pub start_date: String,

    #[validate(custom = "validate_date")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[validate(range(min = 1, max = 100))]
    pub participant_count: u32,

    #[validate(custom = "validate_iso_timestamp")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
}
