//! Projection combinator.
//!
//! # Responsibilities
//! - Map a scheme's captured values to one domain value, and back
//! - Present the mapped value to enclosing schemes as a single capture
//!
//! # Design Decisions
//! - `from_parts` may fail; failure is a non-match, not an error
//! - `to_parts` is total and must invert `from_parts` for every value it produced
//! - A projected three-segment date composes like any one-value leaf

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::scheme::{Captures, HCons, HNil, Scheme};

/// A two-way mapping between a tuple of parts and a single value.
pub trait Projection<Parts> {
    type Mapped;

    /// Build the mapped value, or `None` if the parts do not form one.
    fn from_parts(&self, parts: Parts) -> Option<Self::Mapped>;

    /// Decompose a mapped value. Must be the inverse of [`Projection::from_parts`].
    fn to_parts(&self, value: Self::Mapped) -> Parts;
}

/// A [`Projection`] made of two closures.
#[derive(Clone, Copy)]
pub struct FnProjection<F, G> {
    from_parts: F,
    to_parts: G,
}

impl<F, G> FnProjection<F, G> {
    pub fn new(from_parts: F, to_parts: G) -> Self {
        Self {
            from_parts,
            to_parts,
        }
    }
}

impl<F, G> fmt::Debug for FnProjection<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProjection").finish_non_exhaustive()
    }
}

impl<Parts, U, F, G> Projection<Parts> for FnProjection<F, G>
where
    F: Fn(Parts) -> Option<U>,
    G: Fn(U) -> Parts,
{
    type Mapped = U;

    fn from_parts(&self, parts: Parts) -> Option<U> {
        (self.from_parts)(parts)
    }

    fn to_parts(&self, value: U) -> Parts {
        (self.to_parts)(value)
    }
}

/// Year, month and day as a calendar date.
///
/// Combinations that are not a real date, such as 2016/2/30, do not map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct YearMonthDay;

impl Projection<(i32, i32, i32)> for YearMonthDay {
    type Mapped = NaiveDate;

    fn from_parts(&self, (year, month, day): (i32, i32, i32)) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
    }

    fn to_parts(&self, date: NaiveDate) -> (i32, i32, i32) {
        (date.year(), date.month() as i32, date.day() as i32)
    }
}

/// A scheme whose captures are mapped through a [`Projection`].
#[derive(Clone)]
pub struct Project<S, P> {
    inner: S,
    projection: P,
}

impl<S, P> Project<S, P> {
    pub fn new(inner: S, projection: P) -> Self {
        Self { inner, projection }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Project<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S, P> Scheme for Project<S, P>
where
    S: Scheme,
    P: Projection<<S::Captures as Captures>::Tuple>,
{
    const ARITY: usize = S::ARITY;

    type Captures = HCons<P::Mapped, HNil>;

    fn try_parse(&self, segments: &[String]) -> Option<Self::Captures> {
        let parts = self.inner.try_parse(segments)?.into_tuple();
        let mapped = self.projection.from_parts(parts)?;
        Some(HCons(mapped, HNil))
    }

    fn render(&self, HCons(value, HNil): Self::Captures, out: &mut Vec<String>) {
        let parts = self.projection.to_parts(value);
        self.inner
            .render(<S::Captures as Captures>::from_tuple(parts), out)
    }
}
