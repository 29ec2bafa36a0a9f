//! Sequencing combinator.
//!
//! # Responsibilities
//! - Join two schemes end to end
//! - Concatenate their captures, left before right
//! - Split a composite capture list back apart when rendering
//!
//! # Design Decisions
//! - Arity is `L::ARITY + R::ARITY`, computed at compile time
//! - The segment boundary between children is fixed, so a failed child ends the match
//!   with no backtracking
//! - Capture order follows the tree's left-to-right reading order no matter how the
//!   tree was associated, because list concatenation is associative

use crate::scheme::{Captures, Concat, Scheme};

/// Two schemes matched one after the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seq<L, R> {
    left: L,
    right: R,
}

impl<L, R> Seq<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Scheme for Seq<L, R>
where
    L: Scheme,
    R: Scheme,
    L::Captures: Concat<R::Captures>,
    <L::Captures as Concat<R::Captures>>::Output: Captures,
{
    const ARITY: usize = L::ARITY + R::ARITY;

    type Captures = <L::Captures as Concat<R::Captures>>::Output;

    fn try_parse(&self, segments: &[String]) -> Option<Self::Captures> {
        debug_assert_eq!(segments.len(), Self::ARITY);
        let (left_segments, right_segments) = segments.split_at(L::ARITY);

        let left = self.left.try_parse(left_segments)?;
        let right = self.right.try_parse(right_segments)?;
        Some(left.concat(right))
    }

    fn render(&self, captures: Self::Captures, out: &mut Vec<String>) {
        let (left, right) = <L::Captures as Concat<R::Captures>>::split(captures);
        self.left.render(left, out);
        self.right.render(right, out);
    }
}

/// Join `left` and `right` end to end.
pub fn sequence<L: Scheme, R: Scheme>(left: L, right: R) -> Seq<L, R> {
    Seq::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{int, string};
    use crate::scheme::{fixed, root, Fixed, HCons, HNil};

    fn arity_of<S: Scheme>(_: &S) -> usize {
        S::ARITY
    }

    #[test]
    fn test_children_are_reachable() {
        let scheme = fixed("negate").then(int());

        assert_eq!(scheme.left().literal(), "negate");
        assert_eq!(scheme.right().path((3,)), "/3");
        assert_eq!(arity_of(scheme.left()) + arity_of(scheme.right()), arity_of(&scheme));
    }

    #[test]
    fn test_arity_is_sum_of_children() {
        assert_eq!(arity_of(&sequence(int(), int())), 2);
        assert_eq!(arity_of(&sequence(root(), int())), 1);
        assert_eq!(arity_of(&fixed("a").then(int()).then(string()).then_fixed("b")), 4);
        assert_eq!(<Seq<Fixed, Fixed> as Scheme>::ARITY, 2);
    }

    #[test]
    fn test_fixed_prefix_contributes_nothing() {
        let scheme = fixed("negate").then(int());

        let captures = scheme.try_parse(&["negate".to_string(), "100".to_string()]);
        assert_eq!(captures, Some(HCons(100, HNil)));
    }

    #[test]
    fn test_either_child_failing_fails_the_sequence() {
        let scheme = int().then(int());

        assert_eq!(scheme.match_segments(&["1", "2"]), Some((1, 2)));
        assert_eq!(scheme.match_segments(&["x", "2"]), None);
        assert_eq!(scheme.match_segments(&["1", "x"]), None);
    }

    #[test]
    fn test_render_concatenates_children() {
        let scheme = fixed("a").then(int()).then_fixed("b").then(string());

        assert_eq!(scheme.segments((1, "c".to_string())), vec!["a", "1", "b", "c"]);
    }

    #[test]
    fn test_prefixing_prepends_captures() {
        let tail = int().then(string());
        let prefixed = string().then(tail);

        assert_eq!(
            prefixed.match_segments(&["head", "2", "tail"]),
            Some(("head".to_string(), 2, "tail".to_string()))
        );
        assert_eq!(prefixed.segments(("head".to_string(), 2, "tail".to_string())), vec!["head", "2", "tail"]);
    }
}
