//! This file defines the `Category` type and how to generate a random one.
//! A category acts like a tag for a product or operation, and each record
//! embeds its own copy of the category.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::random::{random_id, random_product_name};

/// The placeholder image given to generated categories.
pub const CATEGORY_PHOTO_URL: &str = "https://picsum.photos/200/100";

/// A classification tag attached to products and operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// The unique ID of the category.
    pub id: Uuid,
    /// The display name, e.g. "Category Smart Phone by TechCo".
    pub name: String,
    /// A URL to an image representing the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Create a category with a fresh ID and a random name using the thread-local
/// random source.
pub fn create_random_category() -> Category {
    create_random_category_with(&mut rand::thread_rng())
}

/// Create a category with a fresh ID and a random name drawn from `rng`.
pub fn create_random_category_with<R: Rng + ?Sized>(rng: &mut R) -> Category {
    Category {
        id: random_id(rng),
        name: format!("Category {}", random_product_name(rng)),
        photo: Some(CATEGORY_PHOTO_URL.to_owned()),
    }
}
