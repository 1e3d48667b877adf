use serde::{Deserialize, Serialize};

use nordwear_core::{CategoryId, Entity};

use crate::fields::{self, IMAGE_URL_MAX, SLUG_MAX};
use crate::slug;

/// A fully-populated, immutable view of a category's persisted state.
///
/// Product membership is not stored on the snapshot; associations live in an
/// explicit pair set owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image_url: String,
    pub slug: String,
    /// Optimistic concurrency token, maintained by the store.
    pub version: u64,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Construction request for a new category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub image_url: String,
}

/// Validated field state of a category, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub image_url: String,
    pub slug: String,
}

impl CategoryDraft {
    /// Validate field constraints and derive the slug from the trimmed name.
    pub fn validate(self) -> nordwear_core::DomainResult<NewCategory> {
        let name = self.name.trim().to_string();
        let image_url = self.image_url.trim().to_string();

        fields::check_name(&name)?;
        fields::check_len("image_url", &image_url, IMAGE_URL_MAX)?;

        let slug = slug::slugify(&name);

        Ok(NewCategory {
            name,
            image_url,
            slug,
        })
    }
}

/// Sparse set of category field edits; absent fields leave the snapshot
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub slug: Option<String>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image_url.is_none() && self.slug.is_none()
    }
}

impl Category {
    /// Merge a sparse patch into this snapshot.
    ///
    /// Same merge order as products: overwrite present fields, explicit slug
    /// verbatim, else re-derive from a new name, then re-validate.
    pub fn apply_patch(&self, patch: &CategoryPatch) -> nordwear_core::DomainResult<Category> {
        let mut next = self.clone();

        if let Some(name) = &patch.name {
            next.name = name.trim().to_string();
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
        fields::check_len("image_url", &next.image_url, IMAGE_URL_MAX)?;
        fields::check_len("slug", &next.slug, SLUG_MAX)?;

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nordwear_core::DomainError;

    fn snapshot(name: &str) -> Category {
        let new = CategoryDraft {
            name: name.to_string(),
            image_url: "/images/categories/default.png".to_string(),
        }
        .validate()
        .unwrap();
        Category {
            id: CategoryId::new(),
            name: new.name,
            image_url: new.image_url,
            slug: new.slug,
            version: 1,
        }
    }

    #[test]
    fn draft_derives_slug_from_name() {
        let new = CategoryDraft {
            name: "Summer Wear".to_string(),
            image_url: String::new(),
        }
        .validate()
        .unwrap();
        assert_eq!(new.slug, "summer-wear");
    }

    #[test]
    fn draft_rejects_empty_name() {
        let err = CategoryDraft {
            name: "\t".to_string(),
            image_url: String::new(),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "name", .. }));
    }

    #[test]
    fn empty_patch_is_identity() {
        let current = snapshot("Summer Wear");
        assert_eq!(current.apply_patch(&CategoryPatch::default()).unwrap(), current);
    }

    #[test]
    fn image_only_patch_leaves_name_and_slug() {
        let current = snapshot("Summer Wear");
        let merged = current
            .apply_patch(&CategoryPatch {
                image_url: Some("/images/categories/summer.png".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(merged.image_url, "/images/categories/summer.png");
        assert_eq!(merged.name, current.name);
        assert_eq!(merged.slug, current.slug);
    }

    #[test]
    fn name_patch_rederives_slug_unless_overridden() {
        let current = snapshot("Summer Wear");

        let renamed = current
            .apply_patch(&CategoryPatch {
                name: Some("Winter Wear".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(renamed.slug, "winter-wear");

        let overridden = current
            .apply_patch(&CategoryPatch {
                name: Some("Winter Wear".to_string()),
                slug: Some("cold-season".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(overridden.slug, "cold-season");
    }
}
