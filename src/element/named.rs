//! Enumeration codec.
//!
//! Segments match a variant only when they spell its declared name exactly,
//! including case.

use std::fmt;
use std::marker::PhantomData;

use super::Codec;

/// An enumeration whose variants can appear in a path by name.
///
/// Usually implemented with [`path_enum!`](crate::path_enum).
pub trait PathEnum: Sized + Clone + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The declared name of this variant.
    fn name(&self) -> &'static str;
}

/// Declare an enum that implements [`PathEnum`] using its variant names.
///
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// ```
/// route_scheme::path_enum! {
///     pub enum Shape { Circle, Square }
/// }
///
/// use route_scheme::{named, Scheme};
/// assert_eq!(named::<Shape>().parse("/Circle"), Some((Shape::Circle,)));
/// assert_eq!(named::<Shape>().parse("/circle"), None);
/// ```
#[macro_export]
macro_rules! path_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),*
        }

        impl $crate::element::PathEnum for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Codec for a [`PathEnum`].
pub struct Named<E>(PhantomData<fn() -> E>);

impl<E> Named<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for Named<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Named<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Named<E> {}

impl<E> fmt::Debug for Named<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Named<{}>", std::any::type_name::<E>())
    }
}

impl<E: PathEnum> Codec for Named<E> {
    type Value = E;

    fn decode(&self, segment: &str) -> Option<E> {
        E::VARIANTS
            .iter()
            .find(|variant| variant.name() == segment)
            .cloned()
    }

    fn encode(&self, value: &E) -> String {
        value.name().to_string()
    }
}
