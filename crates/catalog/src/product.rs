use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nordwear_core::{Entity, ProductId};

use crate::fields::{self, DESCRIPTION_MAX, IMAGE_URL_MAX, SLUG_MAX};
use crate::slug;

/// A fully-populated, immutable view of a product's persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub slug: String,
    /// Optimistic concurrency token, maintained by the store.
    pub version: u64,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Construction request for a new product.
///
/// Identity and initial version are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

/// Validated field state of a product, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub slug: String,
}

impl ProductDraft {
    /// Validate field constraints and derive the slug from the trimmed name.
    pub fn validate(self) -> nordwear_core::DomainResult<NewProduct> {
        let name = self.name.trim().to_string();
        let description = self.description.trim().to_string();
        let image_url = self.image_url.trim().to_string();

        fields::check_name(&name)?;
        fields::check_price(self.price)?;
        fields::check_len("description", &description, DESCRIPTION_MAX)?;
        fields::check_len("image_url", &image_url, IMAGE_URL_MAX)?;

        let slug = slug::slugify(&name);

        Ok(NewProduct {
            name,
            description,
            price: self.price,
            image_url,
            slug,
        })
    }
}

/// Sparse set of product field edits.
///
/// Absent (`None`) fields leave the snapshot unchanged; this is what makes a
/// patch a patch rather than a full replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub slug: Option<String>,
}

impl ProductPatch {
    /// `true` when the patch carries no edits at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.slug.is_none()
    }
}

impl Product {
    /// Merge a sparse patch into this snapshot, returning the merged result.
    ///
    /// Present fields overwrite, absent fields are kept. An explicit `slug`
    /// wins verbatim; otherwise a new `name` re-derives the slug; otherwise
    /// the slug is unchanged. Validation runs on the merged state, so a
    /// failing patch produces no partial result. The version is untouched
    /// here; the store bumps it when the merge is committed.
    pub fn apply_patch(&self, patch: &ProductPatch) -> nordwear_core::DomainResult<Product> {
        let mut next = self.clone();

        if let Some(name) = &patch.name {
            next.name = name.trim().to_string();
        }
        if let Some(description) = &patch.description {
            next.description = description.trim().to_string();
        }
        if let Some(price) = patch.price {
            next.price = price;
        }
        if let Some(image_url) = &patch.image_url {
            next.image_url = image_url.trim().to_string();
        }
        match (&patch.slug, &patch.name) {
            (Some(slug), _) => next.slug = slug.clone(),
            (None, Some(_)) => next.slug = slug::slugify(&next.name),
            (None, None) => {}
        }

        fields::check_name(&next.name)?;
        fields::check_price(next.price)?;
        fields::check_len("description", &next.description, DESCRIPTION_MAX)?;
        fields::check_len("image_url", &next.image_url, IMAGE_URL_MAX)?;
        fields::check_len("slug", &next.slug, SLUG_MAX)?;

        Ok(next)
    }
}
