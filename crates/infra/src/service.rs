//! Catalog lifecycle orchestration (create/read/patch/delete + links).

use thiserror::Error;
use tracing::info;

use nordwear_catalog::{
    Category, CategoryDraft, CategoryPatch, Product, ProductDraft, ProductPatch,
};
use nordwear_core::{CategoryId, DomainError, EntityKind, ExpectedVersion, ProductId};

use crate::reconciler::{AssociationReconciler, LinkOutcome, UnlinkOutcome};
use crate::store::{CatalogStore, StoreError};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a coordinator or reconciler operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            // A version conflict is the storage-level face of a racing patch.
            StoreError::VersionConflict { .. } => {
                CatalogError::Domain(DomainError::ConcurrentModification)
            }
            other => CatalogError::Store(other),
        }
    }
}

/// Orchestrates entity lifecycle against the storage collaborator.
///
/// Validation and patch merging happen in `nordwear-catalog`; this layer
/// decides what gets persisted and translates store failures. Nothing is
/// written when validation fails.
pub struct CatalogService<S> {
    store: S,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // ------------------------- products -------------------------

    pub fn create_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let new = draft.validate()?;
        let product = self.store.insert_product(new)?;
        info!(id = %product.id, slug = %product.slug, "product created");
        Ok(product)
    }

    pub fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        self.store
            .find_product(id)?
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, id.into()).into())
    }

    /// Slug lookup: 0..n matches, never an error.
    pub fn products_by_slug(&self, slug: &str) -> CatalogResult<Vec<Product>> {
        Ok(self.store.find_products_by_slug(slug)?)
    }

    pub fn list_products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.store.list_products()?)
    }

    /// Apply a sparse patch to a product.
    ///
    /// Load → merge → persist runs under an exact-version check so a racing
    /// write surfaces as `ConcurrentModification` instead of being lost.
    pub fn patch_product(&self, id: ProductId, patch: &ProductPatch) -> CatalogResult<Product> {
        let current = self.get_product(id)?;
        let merged = current.apply_patch(patch)?;
        let stored = self
            .store
            .update_product(merged, ExpectedVersion::Exact(current.version))?;
        info!(id = %stored.id, version = stored.version, "product patched");
        Ok(stored)
    }

    /// Delete a product; the store cascades removal of its associations.
    pub fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        if !self.store.delete_product(id)? {
            return Err(DomainError::not_found(EntityKind::Product, id.into()).into());
        }
        info!(%id, "product deleted");
        Ok(())
    }

    // ------------------------- categories -------------------------

    pub fn create_category(&self, draft: CategoryDraft) -> CatalogResult<Category> {
        let new = draft.validate()?;
        let category = self.store.insert_category(new)?;
        info!(id = %category.id, slug = %category.slug, "category created");
        Ok(category)
    }

    pub fn get_category(&self, id: CategoryId) -> CatalogResult<Category> {
        self.store
            .find_category(id)?
            .ok_or_else(|| DomainError::not_found(EntityKind::Category, id.into()).into())
    }

    pub fn categories_by_slug(&self, slug: &str) -> CatalogResult<Vec<Category>> {
        Ok(self.store.find_categories_by_slug(slug)?)
    }

    pub fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.store.list_categories()?)
    }

    pub fn patch_category(&self, id: CategoryId, patch: &CategoryPatch) -> CatalogResult<Category> {
        let current = self.get_category(id)?;
        let merged = current.apply_patch(patch)?;
        let stored = self
            .store
            .update_category(merged, ExpectedVersion::Exact(current.version))?;
        info!(id = %stored.id, version = stored.version, "category patched");
        Ok(stored)
    }

    /// Delete a category; the store cascades removal of its associations.
    pub fn delete_category(&self, id: CategoryId) -> CatalogResult<()> {
        if !self.store.delete_category(id)? {
            return Err(DomainError::not_found(EntityKind::Category, id.into()).into());
        }
        info!(%id, "category deleted");
        Ok(())
    }

    /// Products currently associated with a category (read-side projection).
    pub fn products_in_category(&self, id: CategoryId) -> CatalogResult<Vec<Product>> {
        Ok(self.store.products_in_category(id)?)
    }

    // ------------------------- associations -------------------------

    pub fn link(&self, category_id: CategoryId, product_id: ProductId) -> CatalogResult<LinkOutcome> {
        AssociationReconciler::new(&self.store).link(category_id, product_id)
    }

    pub fn unlink(
        &self,
        category_id: CategoryId,
        product_id: ProductId,
    ) -> CatalogResult<UnlinkOutcome> {
        AssociationReconciler::new(&self.store).unlink(category_id, product_id)
    }
}
