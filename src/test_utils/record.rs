use time::{OffsetDateTime, format_description::well_known::Iso8601};

use crate::{Category, random::EARLIEST_CREATED_AT};

/// Assert that `timestamp` is ISO-8601 and lies between 2020-01-01 and now.
#[track_caller]
pub(crate) fn assert_generated_timestamp(timestamp: &str) {
    let parsed = OffsetDateTime::parse(timestamp, &Iso8601::DEFAULT)
        .unwrap_or_else(|error| panic!("want ISO-8601 timestamp, got {timestamp:?}: {error}"));
    let now = OffsetDateTime::now_utc();

    assert!(
        EARLIEST_CREATED_AT <= parsed && parsed <= now,
        "want timestamp between {EARLIEST_CREATED_AT} and {now}, got {parsed}"
    );
}

#[track_caller]
pub(crate) fn assert_amount_in_range(amount: u32, field: &str) {
    assert!(
        (10..=100).contains(&amount),
        "want {field} between 10 and 100, got {amount}"
    );
}

#[track_caller]
pub(crate) fn assert_valid_category(category: &Category) {
    assert!(
        !category.name.trim().is_empty(),
        "want non-empty category name, got {:?}",
        category.name
    );
    assert!(
        category.name.starts_with("Category "),
        "want category name to start with \"Category \", got {:?}",
        category.name
    );
}
