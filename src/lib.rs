//! sample_records generates random but plausible sample records for filling
//! list views while building a UI.
//!
//! The records are:
//! - [Category], a classification tag,
//! - [Product], an item for sale with a price,
//! - [Operation], a cost or profit with an amount.
//!
//! Each record gets a fresh unique ID, prices and amounts between 10 and 100,
//! and either the creation time the caller passes in or a random one between
//! 2020-01-01 and now.
//!
//! ```
//! use sample_records::{create_random_operation, create_random_product};
//!
//! let product = create_random_product(None);
//! let operation = create_random_operation(Some("2024-01-01T00:00:00.000Z"));
//!
//! assert!((10..=100).contains(&product.price));
//! assert_eq!(operation.created_at, "2024-01-01T00:00:00.000Z");
//! ```

#![warn(missing_docs)]

mod category;
mod export;
mod generator;
mod logging;
mod operation;
mod product;
pub mod random;

#[cfg(test)]
mod test_utils;

pub use category::{
    CATEGORY_PHOTO_URL, Category, create_random_category, create_random_category_with,
};
pub use export::{OperationRow, OutputFormat, ProductRow, ToCsvRow, write_records};
pub use generator::Generator;
pub use logging::setup_logging;
pub use operation::{
    Operation, OperationKind, create_random_operation, create_random_operation_with,
};
pub use product::{
    PRODUCT_PHOTO_URL, Product, create_random_product, create_random_product_with,
};

/// The errors that may occur while writing out records.
///
/// Generating records never fails.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An error occurred while serializing a record as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while writing a record as CSV.
    #[error("could not write CSV: {0}")]
    CsvError(String),

    /// An error occurred while writing to the output.
    #[error("could not write output: {0}")]
    IoError(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::IoError(value.to_string())
    }
}
