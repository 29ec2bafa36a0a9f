//! Scheme trees and the matching/rendering engine.
//!
//! # Data Flow
//! ```text
//! Parsing:
//!     "/weekday/en/2016/2/29"
//!     → path.rs (split, percent-decode)
//!     → arity check against the root scheme
//!     → Scheme::try_parse (recursive, each node gets exactly its segments)
//!     → captured-value list → tuple
//!
//! Rendering:
//!     tuple → captured-value list
//!     → Scheme::render (recursive, each node pushes exactly its segments)
//!     → path.rs (percent-encode, join)
//! ```
//!
//! # Design Decisions
//! - Every node's arity is an associated constant, never a runtime value
//! - Sequencing splits segments at a statically known index, so there is no backtracking
//! - Non-match is `None` at every level; nothing in here returns an error
//! - Nodes are immutable; a scheme is shared by reference across any number of callers

pub mod captures;
pub mod fixed;
pub mod path;

pub use captures::{Captures, Concat, HCons, HNil};
pub use fixed::{fixed, root, Fixed, Root};

use crate::combinators::{FnProjection, Project, Projection, Restrict, Seq};

/// The tuple of values a scheme captures.
pub type Values<S> = <<S as Scheme>::Captures as Captures>::Tuple;

/// A node of a scheme tree.
///
/// Implementors consume exactly [`Scheme::ARITY`] segments and capture a list
/// of type [`Scheme::Captures`]. The provided methods are the engine's entry
/// points and should not normally be overridden.
pub trait Scheme {
    /// Number of path segments this node consumes.
    const ARITY: usize;

    /// The captured-value list this node produces.
    type Captures: Captures;

    /// Parse exactly `ARITY` decoded segments.
    fn try_parse(&self, segments: &[String]) -> Option<Self::Captures>;

    /// Push exactly `ARITY` decoded segments for `captures` onto `out`.
    fn render(&self, captures: Self::Captures, out: &mut Vec<String>);

    /// Parse a raw request path.
    ///
    /// The path must consist of exactly `ARITY` segments once leading and
    /// trailing separators are removed.
    fn parse(&self, path: &str) -> Option<<Self::Captures as Captures>::Tuple> {
        let segments = path::split(path)?;
        parse_exact(self, &segments).map(Captures::into_tuple)
    }

    /// Parse segments that have already been split and decoded.
    fn match_segments<T: AsRef<str>>(
        &self,
        segments: &[T],
    ) -> Option<<Self::Captures as Captures>::Tuple> {
        if segments.len() != Self::ARITY {
            return None;
        }
        let owned: Vec<String> = segments.iter().map(|s| s.as_ref().to_owned()).collect();
        self.try_parse(&owned).map(Captures::into_tuple)
    }

    /// Render `values` as decoded segments.
    fn segments(&self, values: <Self::Captures as Captures>::Tuple) -> Vec<String> {
        let mut out = Vec::with_capacity(Self::ARITY);
        self.render(<Self::Captures as Captures>::from_tuple(values), &mut out);
        assert_eq!(out.len(), Self::ARITY, "scheme rendered a wrong segment count");
        out
    }

    /// Render `values` as a raw path, the inverse of [`Scheme::parse`].
    fn path(&self, values: <Self::Captures as Captures>::Tuple) -> String {
        path::join(&self.segments(values))
    }

    /// Follow this scheme with `next`; captures are concatenated left to right.
    fn then<R: Scheme>(self, next: R) -> Seq<Self, R>
    where
        Self: Sized,
    {
        Seq::new(self, next)
    }

    /// Follow this scheme with a literal segment.
    fn then_fixed(self, literal: impl Into<String>) -> Seq<Self, Fixed>
    where
        Self: Sized,
    {
        Seq::new(self, Fixed::new(literal))
    }

    /// Reject otherwise successful matches for which `predicate` is false.
    fn restrict<F>(self, predicate: F) -> Restrict<Self, F>
    where
        Self: Sized,
        F: Fn(&<Self::Captures as Captures>::Tuple) -> bool,
    {
        Restrict::new(self, predicate)
    }

    /// Map the captured values to and from a single domain value.
    fn project<P>(self, projection: P) -> Project<Self, P>
    where
        Self: Sized,
        P: Projection<<Self::Captures as Captures>::Tuple>,
    {
        Project::new(self, projection)
    }

    /// [`Scheme::project`] with a pair of closures.
    fn project_with<U, F, G>(self, from_parts: F, to_parts: G) -> Project<Self, FnProjection<F, G>>
    where
        Self: Sized,
        F: Fn(<Self::Captures as Captures>::Tuple) -> Option<U>,
        G: Fn(U) -> <Self::Captures as Captures>::Tuple,
    {
        Project::new(self, FnProjection::new(from_parts, to_parts))
    }
}

impl<S: Scheme + ?Sized> Scheme for &S {
    const ARITY: usize = S::ARITY;

    type Captures = S::Captures;

    fn try_parse(&self, segments: &[String]) -> Option<Self::Captures> {
        (**self).try_parse(segments)
    }

    fn render(&self, captures: Self::Captures, out: &mut Vec<String>) {
        (**self).render(captures, out)
    }
}

/// Parse `segments` with `scheme`, requiring the counts to agree.
pub(crate) fn parse_exact<S: Scheme + ?Sized>(
    scheme: &S,
    segments: &[String],
) -> Option<S::Captures> {
    if segments.len() != S::ARITY {
        return None;
    }
    scheme.try_parse(segments)
}
