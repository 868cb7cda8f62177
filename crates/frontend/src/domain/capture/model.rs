//! API calls for the capture module.

use contracts::domain::capture::{SavePayload, SuggestStartRequest, SuggestStartResponse};
use contracts::domain::catalogs::CatalogSnapshot;
use contracts::shared::error::AppError;

use crate::shared::api_utils::{api_get, api_post};

/// Fetch a fresh catalog snapshot. Also used as the token validity probe
/// when restoring a stored session.
pub async fn fetch_catalogs(token: Option<&str>) -> Result<CatalogSnapshot, AppError> {
    let token = token.ok_or(AppError::NoSessionError)?;
    api_get("/api/catalogs", Some(token)).await
}

/// Ask for a suggested start time for the given date/shift/machine.
pub async fn suggest_start(
    request: &SuggestStartRequest,
    token: &str,
) -> Result<SuggestStartResponse, AppError> {
    api_post("/api/capturas/suggest-start", request, Some(token)).await
}

/// Persist one capture. The confirmation body is not consumed beyond
/// signalling success.
pub async fn save_capture(
    payload: &SavePayload,
    token: &str,
) -> Result<serde_json::Value, AppError> {
    api_post("/api/capturas/save", payload, Some(token)).await
}
