//! Defines the `Operation` type, a cost or a profit, and how to generate a
//! random one.

use std::fmt::Display;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    category::{Category, create_random_category_with},
    random::{created_at_or_random, random_amount, random_id, random_operation_name},
};

/// Whether an operation spent money or earned it.
///
/// Serialized as `"Cost"` or `"Profit"` in the operation's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Money spent.
    Cost,
    /// Money earned.
    Profit,
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Cost => write!(f, "Cost"),
            OperationKind::Profit => write!(f, "Profit"),
        }
    }
}

/// A financial record: either a cost or a profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// The unique ID of the operation.
    pub id: Uuid,
    /// What the operation was, e.g. "Refund".
    pub name: String,
    /// A short blurb about the operation.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the operation was created, as an ISO-8601 string.
    pub created_at: String,
    /// How much money was spent or earned.
    pub amount: u32,
    /// The category the operation belongs to.
    pub category: Category,
    /// Whether this is a cost or a profit.
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Operation {
    /// Whether the operation is a [OperationKind::Cost].
    pub fn is_cost(&self) -> bool {
        self.kind == OperationKind::Cost
    }

    /// Whether the operation is a [OperationKind::Profit].
    pub fn is_profit(&self) -> bool {
        self.kind == OperationKind::Profit
    }
}

/// Create an operation with random but plausible values using the
/// thread-local random source.
///
/// `created_at` is used verbatim when given. Otherwise the operation gets a
/// random creation time between 2020-01-01 and now. Costs and profits are
/// equally likely.
pub fn create_random_operation(created_at: Option<&str>) -> Operation {
    create_random_operation_with(&mut rand::thread_rng(), created_at)
}

/// Create an operation with random but plausible values drawn from `rng`.
///
/// See [create_random_operation] for how `created_at` is handled.
pub fn create_random_operation_with<R: Rng + ?Sized>(
    rng: &mut R,
    created_at: Option<&str>,
) -> Operation {
    let name = random_operation_name(rng);

    Operation {
        id: random_id(rng),
        name: name.to_owned(),
        description: Some(format!("{name} authorized by you")),
        created_at: created_at_or_random(rng, created_at),
        amount: random_amount(rng),
        category: create_random_category_with(rng),
        kind: if rng.gen_bool(0.5) {
            OperationKind::Cost
        } else {
            OperationKind::Profit
        },
    }
}
