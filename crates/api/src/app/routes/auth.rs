use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/auth/login", post(login))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    if !nordwear_auth::verify_credentials(&body.username, &body.password) {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid username or password",
        );
    }

    match services.tokens.issue(&body.username) {
        Ok(token) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "token": token,
                "token_type": "Bearer",
                "expires_in": services.tokens.ttl_secs(),
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to issue token");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "failed to issue token",
            )
        }
    }
}
