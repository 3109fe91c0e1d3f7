//! Proyección de "mis estimaciones"
//!
//! Convierte la respuesta cruda de `GET /api/tour-requests/me` en tarjetas
//! listas para pintar: descarta las canceladas, deriva los textos y ordena
//! de la más reciente a la más antigua.

use serde_json::Value;

use crate::dto::estimate_dto::{DisplayCard, StatusColor};
use crate::models::tour_request::RawTourRequest;
use crate::services::display_formatter::{date_range, or_fallback, time_of_day};
use crate::services::response_unwrapper::unwrap_list;

pub const DATE_UNDETERMINED: &str = "날짜 미정";
pub const PICKUP_POINT_PLACEHOLDER: &str = "(탑승지)";
pub const PICKUP_TIME_UNDETERMINED: &str = "00:00 (미정)";
pub const CARD_IMAGE_PLACEHOLDER: &str = "https://placehold.co/389x200?text=Turtle+Connect";

/// Tarjetas que muestra la vista previa de mi página
pub const PREVIEW_LIMIT: usize = 3;

/// Estaciones conocidas por `locationId`
const STATIONS: &[(i64, &str)] = &[(1, "강남역"), (2, "서울역"), (3, "정왕역"), (4, "시흥시청")];

pub fn station_name(location_id: i64) -> Option<&'static str> {
    STATIONS
        .iter()
        .find(|(id, _)| *id == location_id)
        .map(|(_, name)| *name)
}

/// Proyectar una respuesta completa (con cualquier sobre) a tarjetas
pub fn project_response(response: &Value) -> Vec<DisplayCard> {
    let items: Vec<RawTourRequest> = unwrap_list(response)
        .iter()
        .map(RawTourRequest::from_json)
        .collect();
    project(&items)
}

/// Filtrar canceladas, derivar campos y ordenar por id descendente
pub fn project(requests: &[RawTourRequest]) -> Vec<DisplayCard> {
    let mut cards: Vec<DisplayCard> = requests
        .iter()
        .filter(|request| !request.status.is_canceled())
        .map(to_card)
        .collect();

    cards.sort_by(|a, b| b.id.cmp(&a.id));

    log::debug!(
        "🧾 Projected {} cards from {} requests",
        cards.len(),
        requests.len()
    );
    cards
}

/// Primeras `limit` tarjetas
pub fn preview(cards: &[DisplayCard], limit: usize) -> Vec<DisplayCard> {
    cards.iter().take(limit).cloned().collect()
}

fn to_card(request: &RawTourRequest) -> DisplayCard {
    let date = date_range(request.start_date.as_deref(), request.end_date.as_deref())
        .unwrap_or_else(|| DATE_UNDETERMINED.to_string());

    let title = request
        .location_name
        .clone()
        .or_else(|| request.location_id.and_then(station_name).map(str::to_string))
        .unwrap_or_else(|| PICKUP_POINT_PLACEHOLDER.to_string());

    let pickup = or_fallback(
        request.pickup_time.as_deref().and_then(time_of_day),
        PICKUP_TIME_UNDETERMINED,
    );

    let is_waiting = request.status.is_waiting();
    let (status_badge, status_color, btn_text) = if is_waiting {
        ("매칭 대기중", StatusColor::Gray, "견적 대기중")
    } else {
        ("견적 도착", StatusColor::Blue, "견적 보러가기")
    };

    DisplayCard {
        id: request.id.unwrap_or(0),
        title,
        date,
        people: request.participant_count.unwrap_or(0),
        pickup,
        status_badge: status_badge.to_string(),
        status_color,
        btn_text: btn_text.to_string(),
        btn_active: !is_waiting,
        image: CARD_IMAGE_PLACEHOLDER.to_string(),
    }
}
