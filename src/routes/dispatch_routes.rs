use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::dispatch_dto::{DispatchDetailState, DispatchQuery};
use crate::state::AppState;

pub fn create_dispatch_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dispatch_without_route))
        .route("/:route_id", get(dispatch_detail))
}

async fn dispatch_without_route(
    State(state): State<AppState>,
    Query(query): Query<DispatchQuery>,
) -> Json<DispatchDetailState> {
    Json(state.dispatch.load(None, query.tab.unwrap_or_default()).await)
}

async fn dispatch_detail(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
    Query(query): Query<DispatchQuery>,
) -> Json<DispatchDetailState> {
    Json(
        state
            .dispatch
            .load(Some(route_id.as_str()), query.tab.unwrap_or_default())
            .await,
    )
}
