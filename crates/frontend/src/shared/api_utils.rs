//! API utilities for talking to the remote capture service.
//!
//! Two request primitives (`api_get`, `api_post`) that attach the bearer
//! token when one is supplied, send/decode JSON, and normalize non-2xx
//! responses into [`AppError`].

use contracts::shared::error::AppError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL of the remote capture API.
pub const API_URL: &str = "https://app-capturas-api.h-garay.workers.dev";

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_URL, path)
}

/// GET `path`, decoding the JSON response.
pub async fn api_get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, AppError> {
    let mut request = Request::get(&api_url(path));
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    let response = request
        .send()
        .await
        .map_err(|e| AppError::ApiError(format!("Error de red: {}", e)))?;
    decode_response(response).await
}

/// POST a JSON `body` to `path`, decoding the JSON response.
pub async fn api_post<T, B>(path: &str, body: &B, token: Option<&str>) -> Result<T, AppError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let mut request = Request::post(&api_url(path));
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    let response = request
        .json(body)
        .map_err(|e| AppError::ApiError(format!("Error al serializar la petición: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::ApiError(format!("Error de red: {}", e)))?;
    decode_response(response).await
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if !response.ok() {
        // An unparsable error body degrades to the generic status message.
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_default();
        return Err(AppError::from_response(response.status(), &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::ApiError(format!("Respuesta inválida: {}", e)))
}
