//! Typed, bidirectional path schemes.
//!
//! A scheme parses a request path into a tuple of typed values and renders the
//! same tuple back into a path. Schemes are built from leaves and combined
//! with sequencing, restriction and projection; the captured tuple type of
//! every composite is computed by the compiler from its parts.
//!
//! # Architecture Overview
//!
//! ```text
//!   element codecs ──┐
//!   fixed / root ────┼──▶ scheme tree ──▶ engine (parse / render) ──▶ routing (first match wins)
//!   combinators ─────┘        ▲
//!     seq / restrict / project│
//!                             └── captured-value lists (type-level, tuple at the edges)
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use route_scheme::{fixed, int, locale, LanguageTag, Scheme, YearMonthDay};
//!
//! let date = int().then(int()).then(int()).project(YearMonthDay);
//! let weekday = fixed("weekday").then(locale()).then(date);
//!
//! let (lang, day) = weekday.parse("/weekday/en/2016/2/29").unwrap();
//! assert_eq!(lang, "en".parse::<LanguageTag>().unwrap());
//! assert_eq!(day, NaiveDate::from_ymd_opt(2016, 2, 29).unwrap());
//!
//! assert_eq!(weekday.path((lang, day)), "/weekday/en/2016/2/29");
//! assert_eq!(weekday.parse("/weekday/en/2016/2/30"), None);
//! ```

// Engine
pub mod scheme;

// Leaves and combinators
pub mod combinators;
pub mod element;

// Collaborator surface
pub mod routing;

pub use combinators::{sequence, FnProjection, Project, Projection, Restrict, Seq, YearMonthDay};
pub use element::{
    double, element, int, iso_date, locale, long, named, parsed, string, Codec, Element, IsoDate,
    LanguageTag, LanguageTagError, Named, Parsed, PathEnum,
};
pub use routing::{Handler, Route, RouteEntry, Router};
pub use scheme::{fixed, root, Captures, Concat, Fixed, HCons, HNil, Root, Scheme, Values};
