use std::sync::Arc;

use crate::clients::BookingApi;
use crate::dto::profile_dto::ProfileView;
use crate::services::profile_projector;

#[derive(Clone)]
pub struct ProfileController {
    api: Arc<dyn BookingApi>,
}

impl ProfileController {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    /// Perfil del usuario; si el API falla se muestran los marcadores
    pub async fn load(&self) -> ProfileView {
        match self.api.get_my_profile().await {
            Ok(profile) => profile_projector::project(Some(&profile)),
            Err(e) => {
                log::warn!("⚠️ Profile could not be loaded: {}", e);
                profile_projector::project(None)
            }
        }
    }
}
