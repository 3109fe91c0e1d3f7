//! Proyección del detalle de despacho
//!
//! Convierte el detalle crudo de una ruta en la vista del plan de despacho.
//! Cada fila es una parada; el API no trae desglose de pasajeros por
//! parada, así que `people` repite el total de la ruta en todas las filas.

use std::collections::HashSet;

use serde_json::Value;

use crate::dto::dispatch_dto::{DispatchStats, PassengerRow, RouteDetailView, CONFIRMED_STATUS};
use crate::models::route_detail::{RawRouteDetail, RawStop};
use crate::services::display_formatter::{or_fallback, time_of_day};
use crate::utils::errors::{AppError, AppResult};

pub const DETAIL_TITLE: &str = "배차 계획 상세";
pub const DETAIL_DESCRIPTION: &str = "사용자가 확정한 여행 정보를 확인할 수 있습니다.";
pub const TIME_PLACEHOLDER: &str = "--:--";
pub const FIELD_PLACEHOLDER: &str = "-";

/// Proyectar el detalle; sin datos devuelve `NotFoundDetail`
pub fn project(route_id: &str, detail: Option<&Value>) -> AppResult<RouteDetailView> {
    match detail {
        Some(json_data) if !json_data.is_null() => {
            Ok(project_detail(&RawRouteDetail::from_json(json_data)))
        }
        _ => Err(AppError::NotFoundDetail(route_id.to_string())),
    }
}

pub fn project_detail(detail: &RawRouteDetail) -> RouteDetailView {
    let date_title = match &detail.date {
        Some(date) => format!("{} {}", date, DETAIL_TITLE),
        None => DETAIL_TITLE.to_string(),
    };

    let total_people = detail.total_passenger_count.unwrap_or(0);

    // sort_by_key es estable: empates conservan el orden original
    let mut stops: Vec<&RawStop> = detail.stops.iter().collect();
    stops.sort_by_key(|stop| stop.stop_order.unwrap_or(0));

    let route_key = detail.route_id.as_deref().unwrap_or("route");
    let passengers: Vec<PassengerRow> = stops
        .into_iter()
        .enumerate()
        .map(|(position, stop)| PassengerRow {
            id: format!(
                "{}-{}",
                route_key,
                stop.stop_order.unwrap_or(position as i64 + 1)
            ),
            name: FIELD_PLACEHOLDER.to_string(),
            phone: FIELD_PLACEHOLDER.to_string(),
            pickup_location: or_fallback(stop.location_name.as_deref(), FIELD_PLACEHOLDER),
            pickup_time: or_fallback(
                stop.pickup_time.as_deref().and_then(time_of_day),
                TIME_PLACEHOLDER,
            ),
            people: total_people,
            status: CONFIRMED_STATUS.to_string(),
        })
        .collect();

    let pickup_area_count = passengers
        .iter()
        .map(|row| row.pickup_location.as_str())
        .collect::<HashSet<_>>()
        .len();

    let stats = DispatchStats {
        pickup_area_count,
        request_count: passengers.len(),
        total_people,
    };

    log::debug!(
        "🚌 Projected route {} with {} stops ({} pickup areas)",
        route_key,
        stats.request_count,
        stats.pickup_area_count
    );

    RouteDetailView {
        date_title,
        description: DETAIL_DESCRIPTION.to_string(),
        passengers,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::dispatch_dto::PassengerTab;
    use serde_json::json;

    #[test]
    fn test_stops_sorted_by_stop_order() {
        let detail = json!({
            "date": "2025-01-02",
            "routeId": 7,
            "totalPassengerCount": 5,
            "stops": [
                { "stopOrder": 2, "locationName": "서울역", "pickupTime": "2025-01-02T05:00:00" },
                { "stopOrder": 1, "locationName": "강남역", "pickupTime": "2025-01-02T04:16:00" }
            ]
        });

        let view = project("7", Some(&detail)).unwrap();
        assert_eq!(view.date_title, "2025-01-02 배차 계획 상세");
        assert_eq!(view.description, DETAIL_DESCRIPTION);

        let ids: Vec<&str> = view.passengers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["7-1", "7-2"]);
        assert_eq!(view.passengers[0].pickup_location, "강남역");
        assert_eq!(view.passengers[0].pickup_time, "04:16");
        assert!(view.passengers.iter().all(|p| p.people == 5));
        assert!(view.passengers.iter().all(|p| p.name == "-" && p.phone == "-"));
        assert!(view.passengers.iter().all(|p| p.status == "확정"));
    }

    #[test]
    fn test_stable_sort_and_missing_stop_order() {
        let detail = json!({
            "stops": [
                { "stopOrder": 1, "locationName": "A" },
                { "locationName": "B" },
                { "stopOrder": 1, "locationName": "C" },
                { "stopOrder": 0, "locationName": "D" }
            ]
        });

        let view = project("x", Some(&detail)).unwrap();
        let locations: Vec<&str> = view.passengers.iter().map(|p| p.pickup_location.as_str()).collect();
        assert_eq!(locations, vec!["B", "D", "A", "C"]);
        // Sin routeId ni stopOrder: "route" y la posición 1-based
        assert_eq!(view.passengers[0].id, "route-1");
        assert_eq!(view.passengers[1].id, "route-0");
    }

    #[test]
    fn test_null_detail_is_not_found() {
        assert!(matches!(project("9", None), Err(AppError::NotFoundDetail(id)) if id == "9"));
        assert!(matches!(project("9", Some(&Value::Null)), Err(AppError::NotFoundDetail(_))));
    }

    #[test]
    fn test_fallbacks() {
        let view = project("3", Some(&json!({ "stops": [{ "stopOrder": 1, "pickupTime": "04:16" }] }))).unwrap();

        assert_eq!(view.date_title, DETAIL_TITLE);
        assert_eq!(view.passengers[0].pickup_location, "-");
        assert_eq!(view.passengers[0].pickup_time, TIME_PLACEHOLDER);
        assert_eq!(view.stats.total_people, 0);
    }

    #[test]
    fn test_stats_with_duplicate_locations() {
        let detail = json!({
            "totalPassengerCount": 12,
            "stops": [
                { "stopOrder": 1, "locationName": "강남역" },
                { "stopOrder": 2, "locationName": "서울역" },
                { "stopOrder": 3, "locationName": "강남역" }
            ]
        });

        let view = project("1", Some(&detail)).unwrap();
        assert_eq!(
            view.stats,
            DispatchStats { pickup_area_count: 2, request_count: 3, total_people: 12 }
        );
    }

    #[test]
    fn test_tabs() {
        let view = project("1", Some(&json!({ "stops": [{ "stopOrder": 1 }, { "stopOrder": 2 }] }))).unwrap();
        assert_eq!(view.count_for(PassengerTab::Confirmed), 2);
        assert_eq!(view.count_for(PassengerTab::Unconfirmed), 0);
        assert!(view.rows_for(PassengerTab::Unconfirmed).is_empty());
    }
}
