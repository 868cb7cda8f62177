use contracts::shared::error::AppError;
use contracts::system::auth::{LoginRequest, LoginResponse, PublicUsersResponse};

use crate::shared::api_utils::{api_get, api_post};

/// Users selectable on the login screen (unauthenticated).
pub async fn fetch_public_users() -> Result<PublicUsersResponse, AppError> {
    api_get("/api/public/users", None).await
}

/// Login with user id and password.
pub async fn login(usuario_id: String, password: String) -> Result<LoginResponse, AppError> {
    let request = LoginRequest {
        usuario_id,
        password,
    };
    api_post("/api/auth/login", &request, None).await
}
