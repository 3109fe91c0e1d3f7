use crate::dto::profile_dto::ProfileView;
use crate::models::member::MemberProfile;

pub const NAME_PLACEHOLDER: &str = "로딩 중...";
pub const EMAIL_PLACEHOLDER: &str = "-";
pub const PROFILE_IMAGE_PLACEHOLDER: &str = "https://placehold.co/84x84";

/// Vista del perfil; sin perfil se muestran los marcadores de posición
pub fn project(profile: Option<&MemberProfile>) -> ProfileView {
    ProfileView {
        name: profile
            .and_then(|p| p.name.clone())
            .unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
        email: profile
            .and_then(|p| p.email.clone())
            .unwrap_or_else(|| EMAIL_PLACEHOLDER.to_string()),
        profile_image: profile
            .and_then(|p| p.profile_image.clone())
            .unwrap_or_else(|| PROFILE_IMAGE_PLACEHOLDER.to_string()),
    }
}
