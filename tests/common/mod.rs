//! Shared schemes for integration tests.

use chrono::NaiveDate;
use route_scheme::{int, Element, Parsed, Project, Scheme, Seq, YearMonthDay};

route_scheme::path_enum! {
    /// Used to give each position in a composite a distinct type.
    pub enum Colour {
        Red,
        Green,
        Blue,
    }
}

pub type Int = Element<Parsed<i32>>;

pub type DateScheme = Project<Seq<Seq<Int, Int>, Int>, YearMonthDay>;

/// `<year>/<month>/<day>` as a calendar date.
pub fn date() -> DateScheme {
    int().then(int()).then(int()).project(YearMonthDay)
}

#[allow(dead_code)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[allow(dead_code)]
pub fn segments(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Segment count of a scheme.
#[allow(dead_code)]
pub fn arity_of<S: Scheme>(_: &S) -> usize {
    S::ARITY
}
