use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use tour_booking_views::clients::BookingApi;
use tour_booking_views::config::environment::EnvironmentConfig;
use tour_booking_views::models::member::MemberProfile;
use tour_booking_views::models::tour_request::CreateTourRequest;
use tour_booking_views::utils::errors::{AppError, AppResult};
use tour_booking_views::{create_app, AppState};

/// API de reservas en memoria; `None` simula un fallo de transporte
#[derive(Default)]
struct FakeBookingApi {
    requests: Mutex<Option<Value>>,
    route_detail: Mutex<Option<Option<Value>>>,
    profile: Mutex<Option<MemberProfile>>,
    cancel_fails: AtomicBool,
    route_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

fn upstream_down(endpoint: &str) -> AppError {
    AppError::UpstreamStatus {
        status: 503,
        endpoint: endpoint.to_string(),
    }
}

#[async_trait]
impl BookingApi for FakeBookingApi {
    async fn get_my_requests(&self) -> AppResult<Value> {
        self.requests
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| upstream_down("/api/tour-requests/me"))
    }

    async fn create_tour_request(&self, request: &CreateTourRequest) -> AppResult<Value> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "id": 99, "locationId": request.location_id, "status": "WAITING" }))
    }

    async fn cancel_tour_request(&self, id: i64) -> AppResult<()> {
        if self.cancel_fails.load(Ordering::SeqCst) {
            return Err(upstream_down(&format!("/api/tour-requests/{}/cancel", id)));
        }
        Ok(())
    }

    async fn get_my_profile(&self) -> AppResult<MemberProfile> {
        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| upstream_down("/api/members/me"))
    }

    async fn get_route_detail(&self, route_id: &str) -> AppResult<Option<Value>> {
        self.route_calls.fetch_add(1, Ordering::SeqCst);
        self.route_detail
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| upstream_down(&format!("/api/agency/routes/{}", route_id)))
    }
}

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig::from_lookup(|key| match key {
        "BOOKING_API_BASE_URL" => Some("http://booking.test".to_string()),
        "ENVIRONMENT" => Some("test".to_string()),
        _ => None,
    })
    .unwrap()
}

fn create_test_app(api: Arc<FakeBookingApi>) -> Router {
    create_app(AppState::new(test_config(), api))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn three_requests() -> Value {
    json!({
        "data": [
            { "id": 1, "status": "WAITING", "startDate": "2025-01-01", "endDate": "2025-01-01", "locationId": 2 },
            { "id": 3, "status": "CONFIRMED", "startDate": "2025-02-01", "endDate": "2025-02-03", "locationName": "정왕역", "pickupTime": "2025-02-01T07:30:00" },
            { "id": 2, "status": "CANCELED", "startDate": "2025-01-10" }
        ]
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app(Arc::new(FakeBookingApi::default()));
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "tour-booking-views");
}

#[tokio::test]
async fn test_estimates_unwrap_envelope_filter_and_sort() {
    let api = Arc::new(FakeBookingApi::default());
    *api.requests.lock().unwrap() = Some(three_requests());
    let app = create_test_app(api);

    let (status, body) = send(&app, "GET", "/api/views/estimates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["emptyMessage"], Value::Null);

    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["id"], 3);
    assert_eq!(cards[0]["title"], "정왕역");
    assert_eq!(cards[0]["date"], "2025-02-01 ~ 2025-02-03");
    assert_eq!(cards[0]["pickup"], "07:30");
    assert_eq!(cards[0]["statusColor"], "blue");
    assert_eq!(cards[0]["btnActive"], true);
    assert_eq!(cards[1]["id"], 1);
    assert_eq!(cards[1]["title"], "서울역");
    assert_eq!(cards[1]["statusBadge"], "매칭 대기중");
    assert_eq!(cards[1]["btnActive"], false);
}

#[tokio::test]
async fn test_estimates_empty_list_message() {
    let api = Arc::new(FakeBookingApi::default());
    *api.requests.lock().unwrap() = Some(json!({ "result": [] }));
    let app = create_test_app(api);

    let (_, body) = send(&app, "GET", "/api/views/estimates", None).await;
    assert_eq!(body["cards"], json!([]));
    assert_eq!(body["emptyMessage"], "아직 신청한 견적이 없습니다.");
}

#[tokio::test]
async fn test_estimates_failure_keeps_last_list() {
    let api = Arc::new(FakeBookingApi::default());
    *api.requests.lock().unwrap() = Some(three_requests());
    let app = create_test_app(Arc::clone(&api));

    let (_, first) = send(&app, "GET", "/api/views/estimates", None).await;
    assert_eq!(first["cards"].as_array().unwrap().len(), 2);

    *api.requests.lock().unwrap() = None;
    let (status, second) = send(&app, "GET", "/api/views/estimates", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["error"], "데이터를 불러오는 중 오류가 발생했습니다.");
    assert_eq!(second["cards"], first["cards"]);
    assert_eq!(second["emptyMessage"], Value::Null);
}

#[tokio::test]
async fn test_estimates_failure_without_previous_list() {
    let app = create_test_app(Arc::new(FakeBookingApi::default()));

    let (_, body) = send(&app, "GET", "/api/views/estimates", None).await;
    assert_eq!(body["error"], "데이터를 불러오는 중 오류가 발생했습니다.");
    assert_eq!(body["cards"], json!([]));
}

#[tokio::test]
async fn test_cancel_removes_card_only_on_success() {
    let api = Arc::new(FakeBookingApi::default());
    *api.requests.lock().unwrap() = Some(three_requests());
    let app = create_test_app(Arc::clone(&api));
    send(&app, "GET", "/api/views/estimates", None).await;

    api.cancel_fails.store(true, Ordering::SeqCst);
    let (status, failed) = send(&app, "POST", "/api/views/estimates/3/cancel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(failed["success"], false);
    assert_eq!(failed["message"], "삭제 중 오류가 발생했습니다.");
    assert_eq!(failed["data"]["removed"], false);

    // El API sigue caído: la lista no se toca
    *api.requests.lock().unwrap() = None;
    let (_, still) = send(&app, "GET", "/api/views/estimates", None).await;
    assert_eq!(still["cards"].as_array().unwrap().len(), 2);

    api.cancel_fails.store(false, Ordering::SeqCst);
    let (_, removed) = send(&app, "POST", "/api/views/estimates/3/cancel", None).await;
    assert_eq!(removed["success"], true);
    assert_eq!(removed["message"], "삭제되었습니다.");

    let (_, after) = send(&app, "GET", "/api/views/estimates", None).await;
    let cards = after["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["id"], 1);
}

#[tokio::test]
async fn test_preview_limits_cards() {
    let api = Arc::new(FakeBookingApi::default());
    let items: Vec<Value> = (1..=5)
        .map(|id| json!({ "id": id, "status": "WAITING", "startDate": "2025-03-01" }))
        .collect();
    *api.requests.lock().unwrap() = Some(Value::Array(items));
    let app = create_test_app(api);

    let (_, body) = send(&app, "GET", "/api/views/estimates/preview", None).await;
    let ids: Vec<i64> = body["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 4, 3]);
}

#[tokio::test]
async fn test_create_rejects_invalid_request() {
    let api = Arc::new(FakeBookingApi::default());
    let app = create_test_app(Arc::clone(&api));

    let (status, body) = send(
        &app,
        "POST",
        "/api/views/estimates",
        Some(json!({ "locationId": 0, "startDate": "01/02/2025", "participantCount": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_create_forwards_valid_request() {
    let api = Arc::new(FakeBookingApi::default());
    let app = create_test_app(Arc::clone(&api));

    let (status, body) = send(
        &app,
        "POST",
        "/api/views/estimates",
        Some(json!({
            "locationId": 3,
            "startDate": "2025-05-01",
            "endDate": "2025-05-02",
            "participantCount": 4,
            "pickupTime": "2025-05-01T08:00:00"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["locationId"], 3);
    assert_eq!(api.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_dispatch_without_route_id_skips_api() {
    let api = Arc::new(FakeBookingApi::default());
    let app = create_test_app(Arc::clone(&api));

    let (status, body) = send(&app, "GET", "/api/views/dispatch", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], "routeId가 없습니다.");
    assert_eq!(body["detail"], Value::Null);
    assert_eq!(api.route_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_dispatch_detail_projection() {
    let api = Arc::new(FakeBookingApi::default());
    *api.route_detail.lock().unwrap() = Some(Some(json!({
        "data": {
            "date": "2025-01-02",
            "routeId": 7,
            "totalPassengerCount": 5,
            "stops": [
                { "stopOrder": 2, "locationName": "서울역", "pickupTime": "2025-01-02T05:00:00" },
                { "stopOrder": 1, "locationName": "강남역", "pickupTime": "2025-01-02T04:16:00" }
            ]
        }
    })));
    let app = create_test_app(api);

    let (status, body) = send(&app, "GET", "/api/views/dispatch/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["routeId"], "7");
    assert_eq!(body["title"], "2025-01-02 배차 계획 상세");
    assert_eq!(body["activeTab"], "확정");
    assert_eq!(body["confirmedCount"], 2);
    assert_eq!(body["unconfirmedCount"], 0);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows[0]["id"], "7-1");
    assert_eq!(rows[0]["pickupLocation"], "강남역");
    assert_eq!(rows[0]["pickupTime"], "04:16");
    assert_eq!(rows[0]["people"], 5);
    assert_eq!(rows[1]["id"], "7-2");
    assert_eq!(body["emptyMessage"], Value::Null);

    let stats = &body["detail"]["stats"];
    assert_eq!(stats["pickupAreaCount"], 2);
    assert_eq!(stats["requestCount"], 2);
    assert_eq!(stats["totalPeople"], 5);
}

#[tokio::test]
async fn test_dispatch_unconfirmed_tab_is_empty() {
    let api = Arc::new(FakeBookingApi::default());
    *api.route_detail.lock().unwrap() = Some(Some(json!({
        "routeId": 8,
        "stops": [{ "stopOrder": 1, "locationName": "정왕역" }]
    })));
    let app = create_test_app(api);

    let uri = format!("/api/views/dispatch/8?tab={}", urlencoding::encode("미확정"));
    let (_, body) = send(&app, "GET", &uri, None).await;

    assert_eq!(body["activeTab"], "미확정");
    assert_eq!(body["rows"], json!([]));
    assert_eq!(body["emptyMessage"], "표시할 데이터가 없습니다.");
    assert_eq!(body["confirmedCount"], 1);
    assert_eq!(body["unconfirmedCount"], 0);
}

#[tokio::test]
async fn test_dispatch_not_found_and_transport_messages() {
    let api = Arc::new(FakeBookingApi::default());
    *api.route_detail.lock().unwrap() = Some(Some(json!({ "data": null })));
    let app = create_test_app(Arc::clone(&api));

    let (_, missing) = send(&app, "GET", "/api/views/dispatch/9", None).await;
    assert_eq!(missing["error"], "상세 데이터가 없습니다.");
    assert_eq!(missing["detail"], Value::Null);

    *api.route_detail.lock().unwrap() = Some(None);
    let (_, not_found) = send(&app, "GET", "/api/views/dispatch/9", None).await;
    assert_eq!(not_found["error"], "상세 데이터가 없습니다.");

    *api.route_detail.lock().unwrap() = None;
    let (_, failed) = send(&app, "GET", "/api/views/dispatch/9", None).await;
    assert_eq!(failed["error"], "상세 정보를 불러오지 못했습니다.");
    assert_eq!(failed["rows"], json!([]));
    assert_eq!(api.route_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_profile_and_fallback() {
    let api = Arc::new(FakeBookingApi::default());
    let app = create_test_app(Arc::clone(&api));

    let (_, fallback) = send(&app, "GET", "/api/views/profile", None).await;
    assert_eq!(fallback["name"], "로딩 중...");
    assert_eq!(fallback["email"], "-");
    assert_eq!(fallback["profileImage"], "https://placehold.co/84x84");

    *api.profile.lock().unwrap() = Some(MemberProfile {
        name: Some("김여행".to_string()),
        email: Some("trip@turtle.com".to_string()),
        profile_image: None,
    });
    let (_, loaded) = send(&app, "GET", "/api/views/profile", None).await;
    assert_eq!(loaded["name"], "김여행");
    assert_eq!(loaded["email"], "trip@turtle.com");
    assert_eq!(loaded["profileImage"], "https://placehold.co/84x84");
}

#[tokio::test]
async fn test_my_page_combines_profile_and_preview() {
    let api = Arc::new(FakeBookingApi::default());
    *api.requests.lock().unwrap() = Some(three_requests());
    *api.profile.lock().unwrap() = Some(MemberProfile {
        name: Some("김여행".to_string()),
        email: None,
        profile_image: None,
    });
    let app = create_test_app(api);

    let (status, body) = send(&app, "GET", "/api/views/mypage", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "김여행");
    assert_eq!(body["profile"]["email"], "-");
    assert_eq!(body["estimates"]["cards"].as_array().unwrap().len(), 2);
}
