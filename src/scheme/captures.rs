//! Captured-value lists.
//!
//! # Responsibilities
//! - Represent the ordered, heterogeneous values a scheme captures
//! - Concatenate two lists (sequencing) and split them apart again (rendering)
//! - Convert between the internal list and a plain Rust tuple
//!
//! # Design Decisions
//! - Lists are type-level cons cells (`HCons<H, T>` ending in `HNil`), so the
//!   length and every element type are fixed at compile time
//! - Concatenation is defined structurally on the left operand, which makes it
//!   associative: `(a ++ b) ++ c` and `a ++ (b ++ c)` are the same type
//! - Tuples are the public face; conversions exist for lists of up to 12 values

/// The empty captured-value list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HNil;

/// A captured-value list with head `H` followed by the list `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HCons<H, T>(pub H, pub T);

/// A captured-value list that converts to and from a tuple.
pub trait Captures: Sized {
    /// Number of values in the list.
    const LEN: usize;

    /// The tuple with the same element types, in the same order.
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;

    fn from_tuple(tuple: Self::Tuple) -> Self;
}

/// Order-preserving concatenation of two captured-value lists.
pub trait Concat<R>: Sized {
    type Output;

    /// Append `right` after every value of `self`.
    fn concat(self, right: R) -> Self::Output;

    /// Exact inverse of [`Concat::concat`].
    fn split(joined: Self::Output) -> (Self, R);
}

impl<R> Concat<R> for HNil {
    type Output = R;

    fn concat(self, right: R) -> R {
        right
    }

    fn split(joined: R) -> (Self, R) {
        (HNil, joined)
    }
}

impl<H, T, R> Concat<R> for HCons<H, T>
where
    T: Concat<R>,
{
    type Output = HCons<H, T::Output>;

    fn concat(self, right: R) -> Self::Output {
        HCons(self.0, self.1.concat(right))
    }

    fn split(joined: Self::Output) -> (Self, R) {
        let HCons(head, rest) = joined;
        let (tail, right) = T::split(rest);
        (HCons(head, tail), right)
    }
}

/// Spells out the list type for the given element types.
///
/// ```
/// use route_scheme::{HCons, HNil, HList};
///
/// let _: HList![i32, String] = HCons(1, HCons(String::from("a"), HNil));
/// ```
#[macro_export]
macro_rules! HList {
    () => { $crate::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::HCons<$head, $crate::HList![$($tail),*]>
    };
}

macro_rules! hlist_pat {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => { HCons($head, hlist_pat!($($tail),*)) };
}

macro_rules! hlist_ty {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => { HCons<$head, hlist_ty!($($tail),*)> };
}

macro_rules! impl_captures {
    ($len:expr; $($T:ident),*) => {
        impl<$($T),*> Captures for hlist_ty!($($T),*) {
            const LEN: usize = $len;

            type Tuple = ($($T,)*);

            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_tuple(self) -> Self::Tuple {
                let hlist_pat!($($T),*) = self;
                ($($T,)*)
            }

            #[allow(non_snake_case)]
            fn from_tuple(tuple: Self::Tuple) -> Self {
                let ($($T,)*) = tuple;
                hlist_pat!($($T),*)
            }
        }
    };
}

impl_captures!(0;);
impl_captures!(1; A);
impl_captures!(2; A, B);
impl_captures!(3; A, B, C);
impl_captures!(4; A, B, C, D);
impl_captures!(5; A, B, C, D, E);
impl_captures!(6; A, B, C, D, E, F);
impl_captures!(7; A, B, C, D, E, F, G);
impl_captures!(8; A, B, C, D, E, F, G, H);
impl_captures!(9; A, B, C, D, E, F, G, H, I);
impl_captures!(10; A, B, C, D, E, F, G, H, I, J);
impl_captures!(11; A, B, C, D, E, F, G, H, I, J, K);
impl_captures!(12; A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_preserves_order() {
        let left = HCons(1u8, HCons("two", HNil));
        let right = HCons(3.0f64, HNil);

        let joined = left.concat(right);
        assert_eq!(joined.into_tuple(), (1u8, "two", 3.0f64));
    }

    #[test]
    fn test_concat_with_empty_is_identity() {
        let list = HCons('x', HNil);
        assert_eq!(HNil.concat(list), list);
        assert_eq!(list.concat(HNil), list);
    }

    #[test]
    fn test_split_inverts_concat() {
        let joined = HCons(1, HCons(2, HCons(3, HNil)));
        let (left, right) = <HList![i32] as Concat<HList![i32, i32]>>::split(joined);
        assert_eq!(left, HCons(1, HNil));
        assert_eq!(right, HCons(2, HCons(3, HNil)));

        let (left, right) = <HList![i32, i32, i32] as Concat<HNil>>::split(joined);
        assert_eq!(left, joined);
        assert_eq!(right, HNil);
    }

    #[test]
    fn test_concat_is_associative() {
        let a = HCons(1, HNil);
        let b = HCons("b", HNil);
        let c = HCons('c', HNil);

        let left_assoc = a.concat(b).concat(c);
        let right_assoc = a.concat(b.concat(c));
        assert_eq!(left_assoc, right_assoc);
    }

    #[test]
    fn test_tuple_conversions() {
        let () = HNil.into_tuple();
        assert_eq!(<HList![i32]>::from_tuple((7,)), HCons(7, HNil));
        assert_eq!(<HList![i32, bool]>::LEN, 2);

        let twelve = (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12);
        let list = <HList![i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32]>::from_tuple(twelve);
        assert_eq!(list.into_tuple(), twelve);
    }
}
