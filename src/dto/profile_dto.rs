use serde::Serialize;

use crate::dto::estimate_dto::EstimateListState;

// Vista del perfil
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub profile_image: String,
}

// Mi página: perfil + vista previa de estimaciones
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyPageState {
    pub profile: ProfileView,
    pub estimates: EstimateListState,
}
