//! Idempotent category↔product association handling.

use tracing::debug;

use nordwear_core::{CategoryId, DomainError, EntityKind, ProductId};

use crate::service::CatalogError;
use crate::store::CatalogStore;

/// Outcome of a link request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    /// `true` when a new association row was created.
    pub created: bool,
}

/// Outcome of an unlink request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnlinkOutcome {
    /// `true` when an existing association row was removed.
    pub removed: bool,
}

/// Idempotently adds and removes `(category, product)` association pairs.
///
/// Repeated calls with identical arguments converge to the same persisted
/// state: "already linked" and "already absent" are outcomes, not errors.
pub struct AssociationReconciler<'a, S> {
    store: &'a S,
}

impl<'a, S: CatalogStore> AssociationReconciler<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Associate a product with a category.
    ///
    /// Fails with `NotFound` when either endpoint is missing. The store's
    /// `add_link` performs the duplicate check and the insert atomically.
    pub fn link(
        &self,
        category_id: CategoryId,
        product_id: ProductId,
    ) -> Result<LinkOutcome, CatalogError> {
        if self.store.find_category(category_id)?.is_none() {
            return Err(DomainError::not_found(EntityKind::Category, category_id.into()).into());
        }
        if self.store.find_product(product_id)?.is_none() {
            return Err(DomainError::not_found(EntityKind::Product, product_id.into()).into());
        }

        let created = self.store.add_link(category_id, product_id)?;
        debug!(%category_id, %product_id, created, "link reconciled");
        Ok(LinkOutcome { created })
    }

    /// Remove a product↔category association.
    ///
    /// Fails with `NotFound` when the category is missing; removing an
    /// absent pair is a no-op reported through `removed`.
    pub fn unlink(
        &self,
        category_id: CategoryId,
        product_id: ProductId,
    ) -> Result<UnlinkOutcome, CatalogError> {
        if self.store.find_category(category_id)?.is_none() {
            return Err(DomainError::not_found(EntityKind::Category, category_id.into()).into());
        }

        let removed = self.store.remove_link(category_id, product_id)?;
        debug!(%category_id, %product_id, removed, "unlink reconciled");
        Ok(UnlinkOutcome { removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CatalogStore, InMemoryCatalogStore};
    use nordwear_catalog::{CategoryDraft, ProductDraft};
    use rust_decimal::Decimal;

    fn seed(store: &InMemoryCatalogStore) -> (CategoryId, ProductId) {
        let category = store
            .insert_category(
                CategoryDraft {
                    name: "Summer Wear".to_string(),
                    image_url: String::new(),
                }
                .validate()
                .unwrap(),
            )
            .unwrap();
        let product = store
            .insert_product(
                ProductDraft {
                    name: "Blå T-shirt".to_string(),
                    description: String::new(),
                    price: Decimal::new(19900, 2),
                    image_url: String::new(),
                }
                .validate()
                .unwrap(),
            )
            .unwrap();
        (category.id, product.id)
    }

    #[test]
    fn link_is_idempotent() {
        let store = InMemoryCatalogStore::new();
        let (cid, pid) = seed(&store);
        let reconciler = AssociationReconciler::new(&store);

        assert_eq!(reconciler.link(cid, pid).unwrap(), LinkOutcome { created: true });
        assert_eq!(reconciler.link(cid, pid).unwrap(), LinkOutcome { created: false });
        assert_eq!(store.products_in_category(cid).unwrap().len(), 1);
    }

    #[test]
    fn unlink_is_idempotent() {
        let store = InMemoryCatalogStore::new();
        let (cid, pid) = seed(&store);
        let reconciler = AssociationReconciler::new(&store);

        assert_eq!(
            reconciler.unlink(cid, pid).unwrap(),
            UnlinkOutcome { removed: false }
        );

        reconciler.link(cid, pid).unwrap();
        assert_eq!(
            reconciler.unlink(cid, pid).unwrap(),
            UnlinkOutcome { removed: true }
        );
        assert_eq!(
            reconciler.unlink(cid, pid).unwrap(),
            UnlinkOutcome { removed: false }
        );
    }

    #[test]
    fn link_requires_both_endpoints() {
        let store = InMemoryCatalogStore::new();
        let (cid, pid) = seed(&store);
        let reconciler = AssociationReconciler::new(&store);

        let err = reconciler.link(CategoryId::new(), pid).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Domain(DomainError::NotFound {
                kind: EntityKind::Category,
                ..
            })
        ));

        let err = reconciler.link(cid, ProductId::new()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Domain(DomainError::NotFound {
                kind: EntityKind::Product,
                ..
            })
        ));
    }

    #[test]
    fn unlink_requires_the_category() {
        let store = InMemoryCatalogStore::new();
        let (_, pid) = seed(&store);
        let reconciler = AssociationReconciler::new(&store);

        let err = reconciler.unlink(CategoryId::new(), pid).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Domain(DomainError::NotFound {
                kind: EntityKind::Category,
                ..
            })
        ));
    }
}
