//! Modelo de Member
//!
//! Perfil del usuario autenticado (`GET /api/members/me`). Todos los campos
//! son opcionales; la vista aplica sus propios valores por defecto.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::json_fields::read_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
}

impl MemberProfile {
    pub fn from_json(json_data: &Value) -> Self {
        Self {
            name: read_string(json_data, &["name"]),
            email: read_string(json_data, &["email"]),
            profile_image: read_string(json_data, &["profileImage"]),
        }
    }
}
