//! ISO-8601 calendar dates.
//!
//! Only the extended `YYYY-MM-DD` form is accepted: a four digit year
//! (more digits require a sign, `-` is always allowed), then two digit month
//! and day. Whitespace, short fields and out-of-range dates are non-matches.

use chrono::NaiveDate;

use crate::element::Codec;

const FORMAT: &str = "%Y-%m-%d";

/// Codec for `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoDate;

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn has_iso_shape(segment: &str) -> bool {
    let (signed, unsigned) = match segment.as_bytes().first() {
        Some(b'+' | b'-') => (true, &segment[1..]),
        _ => (false, segment),
    };

    let mut fields = unsigned.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return false;
    };

    let year_ok = match year.len() {
        4 => !segment.starts_with('+'),
        n if n > 4 => signed,
        _ => false,
    };

    year_ok && is_digits(year, year.len()) && is_digits(month, 2) && is_digits(day, 2)
}

impl Codec for IsoDate {
    type Value = NaiveDate;

    fn decode(&self, segment: &str) -> Option<NaiveDate> {
        if !has_iso_shape(segment) {
            return None;
        }
        NaiveDate::parse_from_str(segment, FORMAT).ok()
    }

    fn encode(&self, value: &NaiveDate) -> String {
        value.format(FORMAT).to_string()
    }
}
