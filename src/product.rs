//! Defines the `Product` type and how to generate a random one.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    category::{Category, create_random_category_with},
    random::{created_at_or_random, random_amount, random_id, random_product_name},
};

/// The placeholder image given to generated products.
pub const PRODUCT_PHOTO_URL: &str = "https://picsum.photos/200/300";

/// An item for sale, e.g. "Pro Laptop by FutureCorp".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The unique ID of the product.
    pub id: Uuid,
    /// The display name of the product.
    pub name: String,
    /// A URL to an image of the product.
    pub photo: String,
    /// A short blurb about the product.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the product was created, as an ISO-8601 string.
    pub created_at: String,
    /// The price before the current one, if the price has changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<u32>,
    /// The current price.
    pub price: u32,
    /// The category the product belongs to.
    pub category: Category,
}

/// Create a product with random but plausible values using the thread-local
/// random source.
///
/// `created_at` is used verbatim when given. Otherwise the product gets a
/// random creation time between 2020-01-01 and now.
pub fn create_random_product(created_at: Option<&str>) -> Product {
    create_random_product_with(&mut rand::thread_rng(), created_at)
}

/// Create a product with random but plausible values drawn from `rng`.
///
/// See [create_random_product] for how `created_at` is handled.
pub fn create_random_product_with<R: Rng + ?Sized>(
    rng: &mut R,
    created_at: Option<&str>,
) -> Product {
    let described_name = random_product_name(rng);

    Product {
        id: random_id(rng),
        name: random_product_name(rng),
        photo: PRODUCT_PHOTO_URL.to_owned(),
        description: Some(format!("This is our newest {described_name}")),
        created_at: created_at_or_random(rng, created_at),
        old_price: Some(random_amount(rng)),
        price: random_amount(rng),
        category: create_random_category_with(rng),
    }
}
