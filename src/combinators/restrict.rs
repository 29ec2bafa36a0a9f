//! Restriction combinator.
//!
//! # Responsibilities
//! - Add a validity check on a scheme's captured values
//! - Keep the wrapped scheme's arity and capture type unchanged
//!
//! # Design Decisions
//! - A failed predicate is a plain non-match, so dispatch falls through to later routes
//! - Rendering does not consult the predicate

use std::fmt;

use crate::scheme::{Captures, Scheme};

/// A scheme whose matches must also satisfy a predicate.
#[derive(Clone)]
pub struct Restrict<S, F> {
    inner: S,
    predicate: F,
}

impl<S, F> Restrict<S, F> {
    pub fn new(inner: S, predicate: F) -> Self {
        Self { inner, predicate }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Restrict<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restrict")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S, F> Scheme for Restrict<S, F>
where
    S: Scheme,
    F: Fn(&<S::Captures as Captures>::Tuple) -> bool,
{
    const ARITY: usize = S::ARITY;

    type Captures = S::Captures;

    fn try_parse(&self, segments: &[String]) -> Option<S::Captures> {
        let values = self.inner.try_parse(segments)?.into_tuple();
        if (self.predicate)(&values) {
            Some(<S::Captures as Captures>::from_tuple(values))
        } else {
            None
        }
    }

    fn render(&self, captures: S::Captures, out: &mut Vec<String>) {
        self.inner.render(captures, out)
    }
}
