use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, patch, post, put},
};

use nordwear_catalog::Category;
use nordwear_core::{CategoryId, ProductId};
use nordwear_infra::CatalogResult;

use crate::app::routes::products::SlugQuery;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn read_router() -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id", get(get_category))
}

pub fn write_router() -> Router {
    Router::new()
        .route("/categories", post(create_category))
        .route(
            "/categories/:id",
            patch(patch_category).delete(delete_category),
        )
        .route(
            "/categories/:category_id/products/:product_id",
            put(link_product).delete(unlink_product),
        )
}

fn category_with_products(
    services: &AppServices,
    category: &Category,
) -> CatalogResult<serde_json::Value> {
    let products = services.catalog.products_in_category(category.id)?;
    Ok(dto::category_to_json(category, &products))
}

/// `GET /categories` (optionally `?slug=`) answers 200 with a list; each
/// entry nests the category's products.
pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<SlugQuery>,
) -> axum::response::Response {
    let result = match query.slug.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(slug) => services.catalog.categories_by_slug(slug),
        None => services.catalog.list_categories(),
    };

    let categories = match result {
        Ok(categories) => categories,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    let mut body = Vec::with_capacity(categories.len());
    for category in &categories {
        match category_with_products(&services, category) {
            Ok(json) => body.push(json),
            Err(e) => return errors::catalog_error_to_response(e),
        }
    }

    (StatusCode::OK, Json(body)).into_response()
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id");
        }
    };

    let category = match services.catalog.get_category(id) {
        Ok(category) => category,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    match category_with_products(&services, &category) {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    match services.catalog.create_category(body.into_draft()) {
        Ok(category) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/categories/{}", category.id))],
            // A fresh category has no products yet.
            Json(dto::category_to_json(&category, &[])),
        )
            .into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn patch_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::CategoryPatchRequest>,
) -> axum::response::Response {
    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id");
        }
    };

    let category = match services.catalog.patch_category(id, &body.into_patch()) {
        Ok(category) => category,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    match category_with_products(&services, &category) {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id");
        }
    };

    match services.catalog.delete_category(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// `PUT /categories/{cid}/products/{pid}`: idempotent; answers 204 whether
/// or not the association already existed.
pub async fn link_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path((category_id, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (category_id, product_id) = match parse_pair(&category_id, &product_id) {
        Ok(pair) => pair,
        Err(resp) => return resp,
    };

    match services.catalog.link(category_id, product_id) {
        Ok(_outcome) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// `DELETE /categories/{cid}/products/{pid}`: idempotent; answers 204
/// whether or not the association existed.
pub async fn unlink_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path((category_id, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (category_id, product_id) = match parse_pair(&category_id, &product_id) {
        Ok(pair) => pair,
        Err(resp) => return resp,
    };

    match services.catalog.unlink(category_id, product_id) {
        Ok(_outcome) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

fn parse_pair(
    category_id: &str,
    product_id: &str,
) -> Result<(CategoryId, ProductId), axum::response::Response> {
    let category_id: CategoryId = category_id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id")
    })?;
    let product_id: ProductId = product_id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
    })?;
    Ok((category_id, product_id))
}
