#![allow(missing_docs)]

pub(crate) mod record;

pub(crate) use record::{
    assert_amount_in_range, assert_generated_timestamp, assert_valid_category,
};
