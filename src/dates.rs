//! Spreadsheet serial-date decoding.
//!
//! The SuperStore dataset stores order dates the way spreadsheet tools export
//! them: a day count from a fixed epoch where serial `25569` is 1970-01-01.
//! The off-by-two leap-year quirk of that convention is baked into the offset,
//! so the conversion is a single subtraction.

use chrono::{Datelike, Duration, NaiveDate};

/// Serial value of the Unix epoch (1970-01-01) in the spreadsheet convention.
pub const UNIX_EPOCH_SERIAL: f64 = 25569.0;

/// Short month names indexed by `month0` (0 = Jan).
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Decode a spreadsheet date serial into a UTC calendar date.
///
/// Fractional serials (time-of-day remainders) truncate toward the decoded
/// day rather than rounding to the nearest one.
pub fn decode_serial(serial: f64) -> NaiveDate {
    let days = (serial - UNIX_EPOCH_SERIAL).floor() as i64;
    unix_epoch() + Duration::days(days)
}

/// Calendar year of a date serial.
pub fn serial_year(serial: f64) -> i32 {
    decode_serial(serial).year()
}

/// Short month name (`Jan`..`Dec`) for a decoded date.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

fn unix_epoch() -> NaiveDate {
    // chrono's NaiveDate::default() is 1970-01-01.
    NaiveDate::default()
}
