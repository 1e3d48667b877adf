//! Catalog persistence abstractions.

pub mod in_memory;

pub use in_memory::InMemoryCatalogStore;

use thiserror::Error;

use nordwear_catalog::{Category, NewCategory, NewProduct, Product};
use nordwear_core::{CategoryId, ExpectedVersion, ProductId};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Optimistic concurrency check failed.
    #[error("version conflict (expected {expected:?}, found {found})")]
    VersionConflict {
        expected: ExpectedVersion,
        found: u64,
    },

    /// Backend failure (lock poisoning, connection loss, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Relational storage collaborator for the catalog.
///
/// Implementations own the transaction boundary:
/// - `update_*` performs the version check and the write atomically;
/// - `add_link`/`remove_link` make the existence check and the mutation
///   atomic per `(category, product)` pair, so the pair is never duplicated;
/// - deleting an entity cascades removal of every association referencing it.
pub trait CatalogStore: Send + Sync {
    /// Persist a new product, assigning identity and initial version.
    fn insert_product(&self, new: NewProduct) -> StoreResult<Product>;
    fn find_product(&self, id: ProductId) -> StoreResult<Option<Product>>;
    /// Slug lookup returns 0..n matches; uniqueness is not enforced.
    fn find_products_by_slug(&self, slug: &str) -> StoreResult<Vec<Product>>;
    fn list_products(&self) -> StoreResult<Vec<Product>>;
    fn update_product(&self, product: Product, expected: ExpectedVersion) -> StoreResult<Product>;
    /// Returns `false` when no such product existed.
    fn delete_product(&self, id: ProductId) -> StoreResult<bool>;

    /// Persist a new category, assigning identity and initial version.
    fn insert_category(&self, new: NewCategory) -> StoreResult<Category>;
    fn find_category(&self, id: CategoryId) -> StoreResult<Option<Category>>;
    fn find_categories_by_slug(&self, slug: &str) -> StoreResult<Vec<Category>>;
    fn list_categories(&self) -> StoreResult<Vec<Category>>;
    fn update_category(&self, category: Category, expected: ExpectedVersion)
    -> StoreResult<Category>;
    /// Returns `false` when no such category existed.
    fn delete_category(&self, id: CategoryId) -> StoreResult<bool>;

    fn link_exists(&self, category_id: CategoryId, product_id: ProductId) -> StoreResult<bool>;
    /// Add the pair unless present. Returns `true` when a row was created.
    fn add_link(&self, category_id: CategoryId, product_id: ProductId) -> StoreResult<bool>;
    /// Remove the pair if present. Returns `true` when a row was removed.
    fn remove_link(&self, category_id: CategoryId, product_id: ProductId) -> StoreResult<bool>;
    fn products_in_category(&self, category_id: CategoryId) -> StoreResult<Vec<Product>>;
}
