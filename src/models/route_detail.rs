//! Modelo de RouteDetail
//!
//! Detalle de una ruta de agencia (`GET /api/agency/routes/{routeId}`):
//! fecha, identificador, total de pasajeros y paradas ordenadas.

use serde_json::Value;

use crate::utils::json_fields::{read_i64, read_identifier, read_string};

/// Parada de la ruta
#[derive(Debug, Clone, PartialEq)]
pub struct RawStop {
    pub stop_order: Option<i64>,
    pub location_name: Option<String>,
    pub pickup_time: Option<String>,
}

/// Detalle de ruta crudo
#[derive(Debug, Clone, PartialEq)]
pub struct RawRouteDetail {
    pub date: Option<String>,
    pub route_id: Option<String>,
    pub total_passenger_count: Option<i64>,
    pub stops: Vec<RawStop>,
}

impl RawStop {
    pub fn from_json(json_data: &Value) -> Self {
        Self {
            stop_order: read_i64(json_data, &["stopOrder"]),
            location_name: read_string(json_data, &["locationName"]),
            pickup_time: read_string(json_data, &["pickupTime"]),
        }
    }
}

impl RawRouteDetail {
    /// Decodificar el detalle; `stops` que no sea un arreglo cuenta como vacío
    pub fn from_json(json_data: &Value) -> Self {
        let stops = json_data
            .get("stops")
            .and_then(|v| v.as_array())
            .map(|stops| stops.iter().map(RawStop::from_json).collect())
            .unwrap_or_default();

        Self {
            date: read_string(json_data, &["date"]),
            route_id: read_identifier(json_data, &["routeId"]),
            total_passenger_count: read_i64(json_data, &["totalPassengerCount"]),
            stops,
        }
    }
}
