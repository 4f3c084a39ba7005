//! A record generator that owns its random source, for producing batches of
//! records and for reproducible output from a seed.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    category::{Category, create_random_category_with},
    operation::{Operation, create_random_operation_with},
    product::{Product, create_random_product_with},
};

/// Generates random categories, products and operations from one random
/// source.
///
/// Two generators created with the same seed produce the same records, apart
/// from generated creation times, whose upper bound is the current time.
#[derive(Debug, Clone)]
pub struct Generator<R = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    /// Create a generator seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Create a generator that always produces the same sequence of records
    /// for the same `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// Create a generator that draws from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one category.
    pub fn category(&mut self) -> Category {
        create_random_category_with(&mut self.rng)
    }

    /// Generate one product. See [crate::create_random_product].
    pub fn product(&mut self, created_at: Option<&str>) -> Product {
        create_random_product_with(&mut self.rng, created_at)
    }

    /// Generate one operation. See [crate::create_random_operation].
    pub fn operation(&mut self, created_at: Option<&str>) -> Operation {
        create_random_operation_with(&mut self.rng, created_at)
    }

    /// Generate `count` products, each with `created_at` if given.
    pub fn products(&mut self, count: usize, created_at: Option<&str>) -> Vec<Product> {
        let products: Vec<_> = (0..count).map(|_| self.product(created_at)).collect();
        tracing::debug!("Generated {} products", products.len());

        products
    }

    /// Generate `count` operations, each with `created_at` if given.
    pub fn operations(&mut self, count: usize, created_at: Option<&str>) -> Vec<Operation> {
        let operations: Vec<_> = (0..count).map(|_| self.operation(created_at)).collect();
        tracing::debug!("Generated {} operations", operations.len());

        operations
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::test_utils::{assert_amount_in_range, assert_generated_timestamp};

    use super::Generator;

    #[test]
    fn products_returns_requested_count() {
        let mut generator = Generator::seeded(1);

        assert_eq!(generator.products(25, None).len(), 25);
        assert!(generator.products(0, None).is_empty());
    }

    #[test]
    fn batch_ids_are_distinct() {
        let mut generator = Generator::from_entropy();

        let products = generator.products(100, None);
        let operations = generator.operations(100, None);

        let ids: HashSet<_> = products
            .iter()
            .map(|product| product.id)
            .chain(operations.iter().map(|operation| operation.id))
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn batch_shares_given_created_at() {
        let mut generator = Generator::seeded(2);

        let operations = generator.operations(10, Some("2021-01-01T00:00:00.000Z"));

        assert!(
            operations
                .iter()
                .all(|operation| operation.created_at == "2021-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn batch_records_are_valid() {
        let mut generator = Generator::seeded(3);

        for product in generator.products(50, None) {
            assert_amount_in_range(product.price, "price");
            assert_generated_timestamp(&product.created_at);
        }

        for operation in generator.operations(50, None) {
            assert_amount_in_range(operation.amount, "amount");
            assert_generated_timestamp(&operation.created_at);
        }
    }

    #[test]
    fn same_seed_gives_same_records() {
        let created_at = Some("2023-03-03T03:03:03.003Z");

        let mut first = Generator::seeded(99);
        let mut second = Generator::seeded(99);

        assert_eq!(first.category(), second.category());
        assert_eq!(first.products(5, created_at), second.products(5, created_at));
        assert_eq!(
            first.operations(5, created_at),
            second.operations(5, created_at)
        );
    }

    #[test]
    fn different_seeds_give_different_records() {
        let mut first = Generator::seeded(1);
        let mut second = Generator::seeded(2);

        assert_ne!(first.product(None).id, second.product(None).id);
    }
}
