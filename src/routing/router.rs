//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store route entries in declaration order
//! - Find the first entry whose scheme matches a path and call its handler
//! - Report an explicit no-match so the caller can fall back
//!
//! # Design Decisions
//! - The path is split and decoded once per dispatch, not once per entry
//! - O(n) scan over entries; each scheme check is O(path length)
//! - Entries are type-erased behind `Route` so schemes of different types share one table

use std::fmt;

use crate::routing::Handler;
use crate::scheme::{parse_exact, path, Captures, Scheme, Values};

/// A type-erased route entry.
pub trait Route<Out>: Send + Sync {
    /// Run the handler if the scheme matches exactly these segments.
    fn try_route(&self, segments: &[String]) -> Option<Out>;
}

/// A scheme paired with the handler for its captured values.
#[derive(Debug, Clone)]
pub struct RouteEntry<S, H> {
    scheme: S,
    handler: H,
}

impl<S, H> RouteEntry<S, H> {
    pub fn new(scheme: S, handler: H) -> Self {
        Self { scheme, handler }
    }

    pub fn scheme(&self) -> &S {
        &self.scheme
    }
}

impl<S, H, Out> Route<Out> for RouteEntry<S, H>
where
    S: Scheme + Send + Sync,
    H: Handler<Values<S>, Out> + Send + Sync,
{
    fn try_route(&self, segments: &[String]) -> Option<Out> {
        let captures = parse_exact(&self.scheme, segments)?;
        Some(self.handler.call(captures.into_tuple()))
    }
}

/// An ordered table of routes. The first matching entry handles the path.
pub struct Router<'a, Out> {
    routes: Vec<Box<dyn Route<Out> + 'a>>,
}

impl<'a, Out> Router<'a, Out> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route. Earlier routes take precedence.
    pub fn route<S, H>(mut self, scheme: S, handler: H) -> Self
    where
        S: Scheme + Send + Sync + 'a,
        H: Handler<Values<S>, Out> + Send + Sync + 'a,
    {
        self.routes.push(Box::new(RouteEntry::new(scheme, handler)));
        self
    }

    /// Append an already boxed route.
    pub fn push(&mut self, route: Box<dyn Route<Out> + 'a>) {
        self.routes.push(route);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Dispatch `path` to the first matching route.
    ///
    /// Returns `None` if no route matched.
    pub fn try_dispatch(&self, path: &str) -> Option<Out> {
        let Some(segments) = path::split(path) else {
            tracing::trace!(path, "path is not valid percent-encoded UTF-8");
            return None;
        };

        for (index, route) in self.routes.iter().enumerate() {
            if let Some(out) = route.try_route(&segments) {
                tracing::debug!(path, route = index, "route matched");
                return Some(out);
            }
        }

        tracing::debug!(path, routes = self.routes.len(), "no route matched");
        None
    }

    /// Dispatch `path`, calling `fallback` if no route matched.
    pub fn dispatch(&self, path: &str, fallback: impl FnOnce() -> Out) -> Out {
        self.try_dispatch(path).unwrap_or_else(fallback)
    }
}

impl<Out> Default for Router<'_, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Out> fmt::Debug for Router<'_, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes.len())
            .finish()
    }
}
