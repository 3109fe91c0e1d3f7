//! Cliente HTTP para el API de reservas
//!
//! `BookingApi` es el contrato que consumen las páginas; `BookingApiClient`
//! lo implementa con `reqwest`. El cliente se construye desde la
//! configuración y se inyecta en el estado, sin configuración global.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::config::environment::BookingApiConfig;
use crate::models::member::MemberProfile;
use crate::models::tour_request::CreateTourRequest;
use crate::utils::errors::{AppError, AppResult};

/// Operaciones del API de reservas usadas por las páginas
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `GET /api/tour-requests/me`: respuesta cruda con su sobre
    async fn get_my_requests(&self) -> AppResult<Value>;

    /// `POST /api/tour-requests`: recurso creado tal cual
    async fn create_tour_request(&self, request: &CreateTourRequest) -> AppResult<Value>;

    /// `POST /api/tour-requests/{id}/cancel`: el cuerpo se ignora
    async fn cancel_tour_request(&self, id: i64) -> AppResult<()>;

    /// `GET /api/members/me`
    async fn get_my_profile(&self) -> AppResult<MemberProfile>;

    /// `GET /api/agency/routes/{routeId}`: `None` cuando el API responde 404
    async fn get_route_detail(&self, route_id: &str) -> AppResult<Option<Value>>;
}

/// Cliente HTTP del API de reservas
pub struct BookingApiClient {
    pub client: Client,
    pub base_url: String,
    auth_token: Option<String>,
}

impl BookingApiClient {
    /// Crear nuevo cliente HTTP con la URL base y el token configurados
    pub fn new(config: &BookingApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, endpoint: &str) -> AppResult<Response> {
        let response = self.with_headers(builder).send().await.map_err(|e| {
            log::error!("❌ Request to {} failed: {}", endpoint, e);
            AppError::from(e)
        })?;

        log::debug!("📡 {} -> {}", endpoint, response.status());
        Ok(response)
    }

    fn ensure_success(response: &Response, endpoint: &str) -> AppResult<()> {
        let status = response.status();
        if !status.is_success() {
            log::error!("❌ {} failed with status {}", endpoint, status);
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BookingApi for BookingApiClient {
    async fn get_my_requests(&self) -> AppResult<Value> {
        let endpoint = "/api/tour-requests/me";
        let response = self.send(self.client.get(self.url(endpoint)), endpoint).await?;
        Self::ensure_success(&response, endpoint)?;

        let body: Value = response.json().await?;
        log::info!("📋 Tour requests received from {}", endpoint);
        Ok(body)
    }

    async fn create_tour_request(&self, request: &CreateTourRequest) -> AppResult<Value> {
        let endpoint = "/api/tour-requests";
        let response = self
            .send(self.client.post(self.url(endpoint)).json(request), endpoint)
            .await?;
        Self::ensure_success(&response, endpoint)?;

        // Algunas versiones del API responden sin cuerpo
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| AppError::Internal(format!("Invalid JSON from {}: {}", endpoint, e)))
    }

    async fn cancel_tour_request(&self, id: i64) -> AppResult<()> {
        let endpoint = format!("/api/tour-requests/{}/cancel", id);
        let response = self.send(self.client.post(self.url(&endpoint)), &endpoint).await?;
        Self::ensure_success(&response, &endpoint)?;

        log::info!("🗑️ Tour request {} canceled", id);
        Ok(())
    }

    async fn get_my_profile(&self) -> AppResult<MemberProfile> {
        let endpoint = "/api/members/me";
        let response = self.send(self.client.get(self.url(endpoint)), endpoint).await?;
        Self::ensure_success(&response, endpoint)?;

        let body: Value = response.json().await?;
        Ok(MemberProfile::from_json(&body))
    }

    async fn get_route_detail(&self, route_id: &str) -> AppResult<Option<Value>> {
        let endpoint = format!("/api/agency/routes/{}", urlencoding::encode(route_id));
        let response = self.send(self.client.get(self.url(&endpoint)), &endpoint).await?;

        if response.status() == StatusCode::NOT_FOUND {
            log::warn!("⚠️ Route {} not found upstream", route_id);
            return Ok(None);
        }
        Self::ensure_success(&response, &endpoint)?;

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| AppError::Internal(format!("Invalid JSON from {}: {}", endpoint, e)))?;
        Ok(Some(body))
    }
}
