use rust_decimal::Decimal;
use serde::Deserialize;

use nordwear_catalog::{Category, CategoryDraft, CategoryPatch, Product, ProductDraft, ProductPatch};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
}

impl CreateProductRequest {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            description: self.description.unwrap_or_default(),
            price: self.price,
            image_url: self.image.unwrap_or_default(),
        }
    }
}

/// Sparse product edit: absent fields mean "leave unchanged".
#[derive(Debug, Deserialize)]
pub struct ProductPatchRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    #[serde(rename = "urlSlug")]
    pub url_slug: Option<String>,
}

impl ProductPatchRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image,
            slug: self.url_slug,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl CreateCategoryRequest {
    pub fn into_draft(self) -> CategoryDraft {
        CategoryDraft {
            name: self.name,
            image_url: self.image.unwrap_or_default(),
        }
    }
}

/// Sparse category edit: absent fields mean "leave unchanged".
#[derive(Debug, Deserialize)]
pub struct CategoryPatchRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "urlSlug")]
    pub url_slug: Option<String>,
}

impl CategoryPatchRequest {
    pub fn into_patch(self) -> CategoryPatch {
        CategoryPatch {
            name: self.name,
            image_url: self.image,
            slug: self.url_slug,
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.to_string(),
        "name": product.name,
        "description": product.description,
        "price": product.price,
        "image": product.image_url,
        "urlSlug": product.slug,
    })
}

pub fn category_to_json(category: &Category, products: &[Product]) -> serde_json::Value {
    serde_json::json!({
        "id": category.id.to_string(),
        "name": category.name,
        "image": category.image_url,
        "urlSlug": category.slug,
        "products": products.iter().map(product_to_json).collect::<Vec<_>>(),
    })
}
