//! Building blocks shared by the record generators: word lists, bounded
//! numbers, timestamps and identifiers.

use rand::Rng;
use time::{
    Duration, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::{datetime, format_description},
};
use uuid::Uuid;

/// Words that open a product name, e.g. the "Smart" in "Smart Phone by TechCo".
pub const PRODUCT_PREFIXES: [&str; 7] =
    ["Super", "Ultra", "Eco", "Mega", "Power", "Pro", "Smart"];

/// The kind of device a product name refers to.
pub const PRODUCT_TYPES: [&str; 7] = [
    "Phone",
    "Laptop",
    "Headphones",
    "Tablet",
    "Monitor",
    "Camera",
    "Speaker",
];

/// The brand that closes a product name.
pub const PRODUCT_BRANDS: [&str; 5] = [
    "TechCo",
    "ElectroMax",
    "Gadgetron",
    "FutureCorp",
    "DeviceX",
];

/// Names given to generated operations.
pub const OPERATION_NAMES: [&str; 6] = [
    "Purchase",
    "Subscription",
    "Investment",
    "Refund",
    "Sale",
    "Commission",
];

/// The smallest price or amount a generated record can have.
pub const MIN_AMOUNT: u32 = 10;
/// The largest price or amount a generated record can have.
pub const MAX_AMOUNT: u32 = 100;

/// The earliest creation time given to a record when the caller does not
/// supply one.
pub const EARLIEST_CREATED_AT: OffsetDateTime = datetime!(2020-01-01 0:00 UTC);

/// ISO-8601 with millisecond precision in UTC, e.g. `2021-03-04T05:06:07.089Z`.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// Pick an integer uniformly from the inclusive range `min..=max`.
///
/// The bounds may be given in either order.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };

    rng.gen_range(low..=high)
}

/// Pick a price or amount in `MIN_AMOUNT..=MAX_AMOUNT`.
pub fn random_amount<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    random_number(rng, MIN_AMOUNT, MAX_AMOUNT)
}

/// Pick a point in time between `from` and `to`, truncated to whole
/// milliseconds after `from`.
///
/// If `to` is not after `from`, `from` is returned.
pub fn random_date_time<R: Rng + ?Sized>(
    rng: &mut R,
    from: OffsetDateTime,
    to: OffsetDateTime,
) -> OffsetDateTime {
    let span = i64::try_from((to - from).whole_milliseconds()).unwrap_or(i64::MAX);

    if span <= 0 {
        return from;
    }

    from + Duration::milliseconds(rng.gen_range(0..=span))
}

/// Format a date-time with [TIMESTAMP_FORMAT] after converting it to UTC.
pub fn format_timestamp(date_time: OffsetDateTime) -> String {
    date_time
        .to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .expect("a UTC date-time has every component the timestamp format uses")
}

/// Create a timestamp string between [EARLIEST_CREATED_AT] and now.
pub fn random_timestamp<R: Rng + ?Sized>(rng: &mut R) -> String {
    format_timestamp(random_date_time(
        rng,
        EARLIEST_CREATED_AT,
        OffsetDateTime::now_utc(),
    ))
}

/// Use `created_at` verbatim when given, otherwise draw a [random_timestamp].
pub fn created_at_or_random<R: Rng + ?Sized>(rng: &mut R, created_at: Option<&str>) -> String {
    match created_at {
        Some(created_at) => created_at.to_owned(),
        None => random_timestamp(rng),
    }
}

/// Create a random (version 4) UUID from bytes drawn from `rng`.
///
/// Drawing the bytes from `rng` rather than the operating system means a
/// seeded `rng` reproduces the same identifiers.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);

    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Build a product name like "Eco Camera by Gadgetron".
pub fn random_product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = pick(rng, &PRODUCT_PREFIXES);
    let product_type = pick(rng, &PRODUCT_TYPES);
    let brand = pick(rng, &PRODUCT_BRANDS);

    format!("{prefix} {product_type} by {brand}")
}

/// Pick one of [OPERATION_NAMES].
pub fn random_operation_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &OPERATION_NAMES)
}

fn pick<R: Rng + ?Sized, const N: usize>(rng: &mut R, words: &[&'static str; N]) -> &'static str {
    words[rng.gen_range(0..N)]
}
