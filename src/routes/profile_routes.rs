use axum::{extract::State, routing::get, Json, Router};

use crate::dto::profile_dto::{MyPageState, ProfileView};
use crate::state::AppState;

pub fn create_profile_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/mypage", get(get_my_page))
}

async fn get_profile(State(state): State<AppState>) -> Json<ProfileView> {
    Json(state.profile.load().await)
}

/// Perfil y vista previa de estimaciones en paralelo
async fn get_my_page(State(state): State<AppState>) -> Json<MyPageState> {
    let (profile, estimates) =
        futures::future::join(state.profile.load(), state.estimates.load_preview()).await;
    Json(MyPageState { profile, estimates })
}
