use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::dto::api_response::ApiResponse;
use crate::dto::estimate_dto::{CancelOutcome, EstimateListState};
use crate::models::tour_request::CreateTourRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_estimate_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_estimates).post(create_estimate))
        .route("/preview", get(preview_estimates))
        .route("/:id/cancel", post(cancel_estimate))
}

async fn list_estimates(State(state): State<AppState>) -> Json<EstimateListState> {
    Json(state.estimates.load().await)
}

async fn preview_estimates(State(state): State<AppState>) -> Json<EstimateListState> {
    Json(state.estimates.load_preview().await)
}

async fn create_estimate(
    State(state): State<AppState>,
    Json(request): Json<CreateTourRequest>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let created = state.estimates.create(request).await?;
    Ok(Json(ApiResponse::success(created)))
}

async fn cancel_estimate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ApiResponse<CancelOutcome>> {
    let outcome = state.estimates.cancel(id).await;
    let message = outcome.message.clone();
    if outcome.removed {
        Json(ApiResponse::success_with_message(outcome, message))
    } else {
        Json(ApiResponse::failure_with_data(outcome, message))
    }
}
