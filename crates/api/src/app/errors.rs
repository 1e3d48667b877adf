use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use nordwear_core::DomainError;
use nordwear_infra::CatalogError;

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::Domain(e) => domain_error_to_response(e),
        CatalogError::Store(e) => {
            tracing::error!(error = %e, "storage backend failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "storage backend failure",
            )
        }
    }
}

fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation { field, reason } => json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("{field}: {reason}"),
        ),
        DomainError::NotFound { kind, .. } => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{kind} not found"))
        }
        DomainError::ConcurrentModification => json_error(
            StatusCode::CONFLICT,
            "conflict",
            "concurrent modification; re-read and retry",
        ),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Unauthorized => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized")
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
