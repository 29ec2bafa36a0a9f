//! Scheme combinators.
//!
//! # Data Flow
//! ```text
//! Seq<L, R>        segments[..L::ARITY] → L, segments[L::ARITY..] → R, captures L ++ R
//! Restrict<S, F>   S → predicate(captures) → captures or non-match
//! Project<S, P>    S → from_parts(captures) → single mapped value or non-match
//! ```
//!
//! # Design Decisions
//! - Combinators own their children and functions; nothing is mutated after construction
//! - Any child non-match is the parent's non-match; partial lists never escape
//! - Rendering never re-validates: restrictions and projections trust their input

pub mod project;
pub mod restrict;
pub mod sequence;

pub use project::{FnProjection, Project, Projection, YearMonthDay};
pub use restrict::Restrict;
pub use sequence::{sequence, Seq};
