//! Infrastructure wiring shared by the HTTP handlers.

use nordwear_auth::TokenIssuer;
use nordwear_infra::{CatalogService, InMemoryCatalogStore};

use crate::app::ApiConfig;

/// Shared application services (catalog orchestration + token issuance).
pub struct AppServices {
    pub catalog: CatalogService<InMemoryCatalogStore>,
    pub tokens: TokenIssuer,
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    AppServices {
        catalog: CatalogService::new(InMemoryCatalogStore::new()),
        tokens: TokenIssuer::new(config.jwt_secret.as_bytes(), config.token_ttl_secs),
    }
}
