//! Element codecs: one path segment to and from one typed value.
//!
//! # Responsibilities
//! - Define the codec contract (`decode` may fail, `encode` may not)
//! - Wrap a codec as a one-segment scheme leaf
//! - Provide codecs for strings, integers, floats, enumerations, language tags
//!   and ISO-8601 dates
//!
//! # Design Decisions
//! - Malformed input decodes to `None`; route selection depends on it being cheap
//!   and silent
//! - Anything that is `FromStr + Display` is a codec through [`Parsed`]
//! - Dates get their own codec; chrono's `FromStr` is too lenient for a path segment
//! - Round-trip contract: `decode(encode(v)) == Some(v)` for every decodable `v`

pub mod date;
pub mod locale;
pub mod named;

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::scheme::{HCons, HNil, Scheme};

pub use date::IsoDate;
pub use locale::{LanguageTag, LanguageTagError};
pub use named::{Named, PathEnum};

/// Converts between one segment and one value.
pub trait Codec {
    type Value;

    /// Decode a segment, or `None` if it is malformed.
    fn decode(&self, segment: &str) -> Option<Self::Value>;

    /// Encode a value. Only values this codec could decode are guaranteed to round-trip.
    fn encode(&self, value: &Self::Value) -> String;
}

/// Codec for any type that parses from and displays as a single segment.
pub struct Parsed<T>(PhantomData<fn() -> T>);

impl<T> Parsed<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Parsed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Parsed<T> {}

impl<T> fmt::Debug for Parsed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parsed<{}>", std::any::type_name::<T>())
    }
}

impl<T: FromStr + Display> Codec for Parsed<T> {
    type Value = T;

    fn decode(&self, segment: &str) -> Option<T> {
        segment.parse().ok()
    }

    fn encode(&self, value: &T) -> String {
        value.to_string()
    }
}

/// A scheme leaf that captures one value through a codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Element<C> {
    codec: C,
}

impl<C: Codec> Element<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<C: Codec> Scheme for Element<C> {
    const ARITY: usize = 1;

    type Captures = HCons<C::Value, HNil>;

    fn try_parse(&self, segments: &[String]) -> Option<Self::Captures> {
        debug_assert_eq!(segments.len(), Self::ARITY);
        let value = self.codec.decode(&segments[0])?;
        Some(HCons(value, HNil))
    }

    fn render(&self, HCons(value, HNil): Self::Captures, out: &mut Vec<String>) {
        out.push(self.codec.encode(&value));
    }
}

/// A leaf using a custom codec.
pub fn element<C: Codec>(codec: C) -> Element<C> {
    Element::new(codec)
}

/// A leaf for any `FromStr + Display` type.
pub fn parsed<T: FromStr + Display>() -> Element<Parsed<T>> {
    Element::new(Parsed::new())
}

/// The raw segment text.
pub fn string() -> Element<Parsed<String>> {
    parsed()
}

/// A signed 32-bit integer.
pub fn int() -> Element<Parsed<i32>> {
    parsed()
}

/// A signed 64-bit integer.
pub fn long() -> Element<Parsed<i64>> {
    parsed()
}

/// A double-precision float.
pub fn double() -> Element<Parsed<f64>> {
    parsed()
}

/// An ISO-8601 calendar date, `YYYY-MM-DD`.
pub fn iso_date() -> Element<IsoDate> {
    Element::new(IsoDate)
}

/// A BCP 47 language tag such as `en` or `pt-BR`.
pub fn locale() -> Element<Parsed<LanguageTag>> {
    parsed()
}

/// One of the declared variants of `E`, by exact name.
pub fn named<E: PathEnum>() -> Element<Named<E>> {
    Element::new(Named::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<C: Codec>(codec: &C, segment: &str) -> Option<String>
    where
        C::Value: PartialEq + fmt::Debug,
    {
        let value = codec.decode(segment)?;
        let encoded = codec.encode(&value);
        assert_eq!(codec.decode(&encoded), Some(value));
        Some(encoded)
    }

    #[test]
    fn test_string_is_identity() {
        let codec = Parsed::<String>::new();
        assert_eq!(codec.decode("hello world"), Some("hello world".to_string()));
        assert_eq!(codec.decode(""), Some(String::new()));
        assert_eq!(codec.encode(&"x/y".to_string()), "x/y");
    }

    #[test]
    fn test_int() {
        let codec = Parsed::<i32>::new();
        assert_eq!(codec.decode("100"), Some(100));
        assert_eq!(codec.decode("-100"), Some(-100));
        assert_eq!(codec.decode("+7"), Some(7));
        assert_eq!(codec.decode("1.5"), None);
        assert_eq!(codec.decode("2147483648"), None);
        assert_eq!(codec.decode(""), None);
        assert_eq!(codec.decode(" 1"), None);
        assert_eq!(round_trip(&codec, "+7").as_deref(), Some("7"));
    }

    #[test]
    fn test_long() {
        let codec = Parsed::<i64>::new();
        assert_eq!(codec.decode("9223372036854775807"), Some(i64::MAX));
        assert_eq!(codec.decode("9223372036854775808"), None);
    }

    #[test]
    fn test_double() {
        let codec = Parsed::<f64>::new();
        assert_eq!(codec.decode("1.5"), Some(1.5));
        assert_eq!(codec.decode("-2e3"), Some(-2000.0));
        assert_eq!(codec.decode("one"), None);
        assert_eq!(round_trip(&codec, "0.1").as_deref(), Some("0.1"));
    }

    #[test]
    fn test_iso_date_leaf_is_strict() {
        let leap_day = chrono::NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();

        assert_eq!(iso_date().parse("/2016-02-29"), Some((leap_day,)));
        assert_eq!(iso_date().path((leap_day,)), "/2016-02-29");
        assert_eq!(iso_date().parse("/2016-2-9"), None);
        assert_eq!(iso_date().parse("/2016-02-29%20"), None);
        assert_eq!(iso_date().codec(), &IsoDate);
    }

    #[test]
    fn test_iso_date_falls_through_to_later_route() {
        let router = crate::Router::new()
            .route(iso_date(), |_: chrono::NaiveDate| "date")
            .route(string(), |_: String| "text");

        assert_eq!(router.try_dispatch("/2016-02-29"), Some("date"));
        assert_eq!(router.try_dispatch("/2016-2-29"), Some("text"));
    }

    #[test]
    fn test_element_leaf() {
        assert_eq!(int().parse("/42"), Some((42,)));
        assert_eq!(int().parse("/forty-two"), None);
        assert_eq!(long().path((5_000_000_000,)), "/5000000000");
        assert_eq!(double().parse("/2.5"), Some((2.5,)));
        assert_eq!(string().parse("/hello%20world"), Some(("hello world".to_string(),)));
    }
}
