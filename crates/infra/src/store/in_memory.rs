use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use nordwear_catalog::{Category, NewCategory, NewProduct, Product};
use nordwear_core::{CategoryId, ExpectedVersion, ProductId};

use super::{CatalogStore, StoreError, StoreResult};

/// In-memory catalog store.
///
/// A single lock over the whole state keeps cross-table mutations (cascading
/// deletes, link check-and-insert) atomic. Intended for tests/dev; not
/// optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    products: HashMap<ProductId, Product>,
    categories: HashMap<CategoryId, Category>,
    links: HashSet<(CategoryId, ProductId)>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn insert_product(&self, new: NewProduct) -> StoreResult<Product> {
        let mut state = self.write()?;
        let product = Product {
            id: ProductId::new(),
            name: new.name,
            description: new.description,
            price: new.price,
            image_url: new.image_url,
            slug: new.slug,
            version: 1,
        };
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    fn find_product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        Ok(self.read()?.products.get(&id).cloned())
    }

    fn find_products_by_slug(&self, slug: &str) -> StoreResult<Vec<Product>> {
        let state = self.read()?;
        Ok(state
            .products
            .values()
            .filter(|p| p.slug == slug)
            .cloned()
            .collect())
    }

    fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    fn update_product(&self, product: Product, expected: ExpectedVersion) -> StoreResult<Product> {
        let mut state = self.write()?;
        // A missing row counts as version 0, so an Exact expectation fails
        // the same way a stale one does.
        let found = state.products.get(&product.id).map_or(0, |p| p.version);
        if !expected.matches(found) {
            return Err(StoreError::VersionConflict { expected, found });
        }
        let mut next = product;
        next.version = found + 1;
        state.products.insert(next.id, next.clone());
        Ok(next)
    }

    fn delete_product(&self, id: ProductId) -> StoreResult<bool> {
        let mut state = self.write()?;
        let removed = state.products.remove(&id).is_some();
        if removed {
            state.links.retain(|(_, p)| *p != id);
        }
        Ok(removed)
    }

    fn insert_category(&self, new: NewCategory) -> StoreResult<Category> {
        let mut state = self.write()?;
        let category = Category {
            id: CategoryId::new(),
            name: new.name,
            image_url: new.image_url,
            slug: new.slug,
            version: 1,
        };
        state.categories.insert(category.id, category.clone());
        Ok(category)
    }

    fn find_category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn find_categories_by_slug(&self, slug: &str) -> StoreResult<Vec<Category>> {
        let state = self.read()?;
        Ok(state
            .categories
            .values()
            .filter(|c| c.slug == slug)
            .cloned()
            .collect())
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn update_category(
        &self,
        category: Category,
        expected: ExpectedVersion,
    ) -> StoreResult<Category> {
        let mut state = self.write()?;
        let found = state.categories.get(&category.id).map_or(0, |c| c.version);
        if !expected.matches(found) {
            return Err(StoreError::VersionConflict { expected, found });
        }
        let mut next = category;
        next.version = found + 1;
        state.categories.insert(next.id, next.clone());
        Ok(next)
    }

    fn delete_category(&self, id: CategoryId) -> StoreResult<bool> {
        let mut state = self.write()?;
        let removed = state.categories.remove(&id).is_some();
        if removed {
            state.links.retain(|(c, _)| *c != id);
        }
        Ok(removed)
    }

    fn link_exists(&self, category_id: CategoryId, product_id: ProductId) -> StoreResult<bool> {
        Ok(self.read()?.links.contains(&(category_id, product_id)))
    }

    fn add_link(&self, category_id: CategoryId, product_id: ProductId) -> StoreResult<bool> {
        Ok(self.write()?.links.insert((category_id, product_id)))
    }

    fn remove_link(&self, category_id: CategoryId, product_id: ProductId) -> StoreResult<bool> {
        Ok(self.write()?.links.remove(&(category_id, product_id)))
    }

    fn products_in_category(&self, category_id: CategoryId) -> StoreResult<Vec<Product>> {
        let state = self.read()?;
        Ok(state
            .links
            .iter()
            .filter(|(c, _)| *c == category_id)
            .filter_map(|(_, p)| state.products.get(p).cloned())
            .collect())
    }
}
