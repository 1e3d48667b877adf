//! Integration tests for the full catalog pipeline.
//!
//! Tests: Draft → CatalogService → CatalogStore → snapshot reads
//!
//! Verifies:
//! - Slug derivation flows through create and patch
//! - Link/unlink converge idempotently
//! - Deletion cascades association removal

use rust_decimal::Decimal;

use nordwear_catalog::{CategoryDraft, ProductDraft, ProductPatch};

use crate::service::CatalogService;
use crate::store::InMemoryCatalogStore;

fn service() -> CatalogService<InMemoryCatalogStore> {
    CatalogService::new(InMemoryCatalogStore::new())
}

#[test]
fn storefront_scenario_end_to_end() {
    let svc = service();

    let category = svc
        .create_category(CategoryDraft {
            name: "Summer Wear".to_string(),
            image_url: "/images/categories/summer.png".to_string(),
        })
        .unwrap();
    assert_eq!(category.slug, "summer-wear");

    let product = svc
        .create_product(ProductDraft {
            name: "Blå T-shirt".to_string(),
            description: "Ljusblå bomullströja.".to_string(),
            price: Decimal::new(19900, 2),
            image_url: "/images/products/bla-t-shirt.png".to_string(),
        })
        .unwrap();
    assert_eq!(product.slug, "bla-t-shirt");

    assert!(svc.link(category.id, product.id).unwrap().created);
    assert!(!svc.link(category.id, product.id).unwrap().created);
    assert_eq!(svc.products_in_category(category.id).unwrap().len(), 1);

    assert!(svc.unlink(category.id, product.id).unwrap().removed);
    assert!(!svc.unlink(category.id, product.id).unwrap().removed);
    assert!(svc.products_in_category(category.id).unwrap().is_empty());
}

#[test]
fn deleting_a_category_cascades_its_links() {
    let svc = service();

    let category = svc
        .create_category(CategoryDraft {
            name: "Outlet".to_string(),
            image_url: String::new(),
        })
        .unwrap();
    let product = svc
        .create_product(ProductDraft {
            name: "Jeans".to_string(),
            description: String::new(),
            price: Decimal::new(49900, 2),
            image_url: String::new(),
        })
        .unwrap();
    svc.link(category.id, product.id).unwrap();

    svc.delete_category(category.id).unwrap();

    assert!(svc.categories_by_slug("outlet").unwrap().is_empty());
    // The surviving product no longer appears in any association.
    assert!(svc.products_in_category(category.id).unwrap().is_empty());
    assert_eq!(svc.get_product(product.id).unwrap(), product);
}

#[test]
fn deleting_a_product_cascades_its_links() {
    let svc = service();

    let category = svc
        .create_category(CategoryDraft {
            name: "Basics".to_string(),
            image_url: String::new(),
        })
        .unwrap();
    let product = svc
        .create_product(ProductDraft {
            name: "Vit T-shirt".to_string(),
            description: String::new(),
            price: Decimal::new(9900, 2),
            image_url: String::new(),
        })
        .unwrap();
    svc.link(category.id, product.id).unwrap();

    svc.delete_product(product.id).unwrap();

    assert!(svc.products_in_category(category.id).unwrap().is_empty());
    assert!(svc.products_by_slug("vit-t-shirt").unwrap().is_empty());
}

#[test]
fn slug_lookup_returns_all_matches() {
    let svc = service();

    // Slug uniqueness is not enforced; two products with the same name share
    // a slug and both surface in the lookup.
    for _ in 0..2 {
        svc.create_product(ProductDraft {
            name: "Svart Hoodie".to_string(),
            description: String::new(),
            price: Decimal::new(39900, 2),
            image_url: String::new(),
        })
        .unwrap();
    }

    assert_eq!(svc.products_by_slug("svart-hoodie").unwrap().len(), 2);
    assert!(svc.products_by_slug("no-such-slug").unwrap().is_empty());
}

#[test]
fn patch_then_slug_lookup_stays_consistent() {
    let svc = service();

    let product = svc
        .create_product(ProductDraft {
            name: "Grön Keps".to_string(),
            description: String::new(),
            price: Decimal::new(14900, 2),
            image_url: String::new(),
        })
        .unwrap();
    assert_eq!(svc.products_by_slug("gron-keps").unwrap().len(), 1);

    svc.patch_product(
        product.id,
        &ProductPatch {
            name: Some("Blå Keps".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert!(svc.products_by_slug("gron-keps").unwrap().is_empty());
    assert_eq!(svc.products_by_slug("bla-keps").unwrap().len(), 1);
}
