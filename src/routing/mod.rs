//! Route dispatch on top of the scheme engine.
//!
//! # Data Flow
//! ```text
//! Incoming path
//!     → router.rs (split once, try entries in declaration order)
//!     → RouteEntry (scheme parse → handler called with the captured values)
//!     → handler output, or the caller's fallback when nothing matched
//! ```
//!
//! # Design Decisions
//! - First match wins; declaration order is the only priority
//! - A scheme non-match of any kind falls through to the next entry
//! - Routers are immutable once built and can be shared, or built per request
//!   with handlers borrowing request state

pub mod handler;
pub mod router;

pub use handler::Handler;
pub use router::{Route, RouteEntry, Router};
