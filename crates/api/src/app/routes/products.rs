use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::Deserialize;

use nordwear_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

#[derive(Debug, Deserialize)]
pub struct SlugQuery {
    pub slug: Option<String>,
}

pub fn read_router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

pub fn write_router() -> Router {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", patch(patch_product).delete(delete_product))
}

/// `GET /products` lists everything; `GET /products?slug=...` filters and
/// always answers 200 with a (possibly empty) list.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<SlugQuery>,
) -> axum::response::Response {
    let result = match query.slug.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(slug) => services.catalog.products_by_slug(slug),
        None => services.catalog.list_products(),
    };

    match result {
        Ok(items) => {
            let body = items.iter().map(dto::product_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };

    match services.catalog.get_product(id) {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    match services.catalog.create_product(body.into_draft()) {
        Ok(product) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/products/{}", product.id))],
            Json(dto::product_to_json(&product)),
        )
            .into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn patch_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductPatchRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };

    match services.catalog.patch_product(id, &body.into_patch()) {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };

    match services.catalog.delete_product(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
