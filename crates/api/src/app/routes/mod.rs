use axum::Router;

pub mod auth;
pub mod categories;
pub mod products;
pub mod system;

/// Publicly reachable routes: catalog reads + login.
pub fn public_router() -> Router {
    Router::new()
        .merge(products::read_router())
        .merge(categories::read_router())
        .merge(auth::router())
}

/// Routes that mutate catalog state; wrapped in the bearer guard by
/// `app::build_app`.
pub fn write_router() -> Router {
    Router::new()
        .merge(products::write_router())
        .merge(categories::write_router())
}
