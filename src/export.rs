//! Writes generated records out as JSON, newline-delimited JSON or CSV.

use std::io::Write;

use serde::Serialize;
use uuid::Uuid;

use crate::{Error, Operation, OperationKind, Product};

/// The formats records can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// A single pretty-printed JSON array.
    Json,
    /// One compact JSON object per line.
    Ndjson,
    /// A header row then one row per record, with the category flattened
    /// into `categoryId`, `categoryName` and `categoryPhoto` columns.
    Csv,
}

/// A record that can be written as a single flat CSV row.
///
/// CSV has no notion of nesting, so each record type provides a flat row
/// shape for its embedded category.
pub trait ToCsvRow {
    /// The flat row type.
    type Row: Serialize;

    /// Flatten the record into a row.
    fn to_csv_row(&self) -> Self::Row;
}

/// A [Product] flattened for CSV output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    id: Uuid,
    name: String,
    photo: String,
    desc: Option<String>,
    created_at: String,
    old_price: Option<u32>,
    price: u32,
    category_id: Uuid,
    category_name: String,
    category_photo: Option<String>,
}

impl ToCsvRow for Product {
    type Row = ProductRow;

    fn to_csv_row(&self) -> ProductRow {
        ProductRow {
            id: self.id,
            name: self.name.clone(),
            photo: self.photo.clone(),
            desc: self.description.clone(),
            created_at: self.created_at.clone(),
            old_price: self.old_price,
            price: self.price,
            category_id: self.category.id,
            category_name: self.category.name.clone(),
            category_photo: self.category.photo.clone(),
        }
    }
}

/// An [Operation] flattened for CSV output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRow {
    id: Uuid,
    name: String,
    desc: Option<String>,
    created_at: String,
    amount: u32,
    category_id: Uuid,
    category_name: String,
    category_photo: Option<String>,
    #[serde(rename = "type")]
    kind: OperationKind,
}

impl ToCsvRow for Operation {
    type Row = OperationRow;

    fn to_csv_row(&self) -> OperationRow {
        OperationRow {
            id: self.id,
            name: self.name.clone(),
            desc: self.description.clone(),
            created_at: self.created_at.clone(),
            amount: self.amount,
            category_id: self.category.id,
            category_name: self.category.name.clone(),
            category_photo: self.category.photo.clone(),
            kind: self.kind,
        }
    }
}

/// Write `records` to `writer` in the given `format`.
///
/// CSV output for an empty slice is empty, since the header is taken from the
/// first row.
///
/// # Errors
///
/// This function will return a:
/// - [Error::JSONSerializationError] if a record could not be serialized as JSON,
/// - or [Error::CsvError] if a record could not be written as CSV,
/// - or [Error::IoError] if writing to `writer` failed.
pub fn write_records<T, W>(records: &[T], format: OutputFormat, mut writer: W) -> Result<(), Error>
where
    T: Serialize + ToCsvRow,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Ndjson => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);

            for record in records {
                csv_writer.serialize(record.to_csv_row())?;
            }

            csv_writer.flush()?;
        }
    }

    tracing::debug!("Wrote {} records as {format:?}", records.len());

    Ok(())
}
