//! Leaves that capture nothing.

use super::captures::HNil;
use super::Scheme;

/// Matches one literal segment, case-sensitively, and captures nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fixed {
    literal: String,
}

impl Fixed {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl From<&str> for Fixed {
    fn from(literal: &str) -> Self {
        Self::new(literal)
    }
}

impl Scheme for Fixed {
    const ARITY: usize = 1;

    type Captures = HNil;

    fn try_parse(&self, segments: &[String]) -> Option<HNil> {
        debug_assert_eq!(segments.len(), Self::ARITY);
        (segments[0] == self.literal).then_some(HNil)
    }

    fn render(&self, _: HNil, out: &mut Vec<String>) {
        out.push(self.literal.clone());
    }
}

/// The empty path. Consumes no segments and captures nothing.
///
/// Sequencing with `Root` on either side leaves a scheme unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Root;

impl Scheme for Root {
    const ARITY: usize = 0;

    type Captures = HNil;

    fn try_parse(&self, segments: &[String]) -> Option<HNil> {
        debug_assert!(segments.is_empty());
        Some(HNil)
    }

    fn render(&self, _: HNil, _: &mut Vec<String>) {}
}

/// A literal segment.
pub fn fixed(literal: impl Into<String>) -> Fixed {
    Fixed::new(literal)
}

/// The empty path, `/`.
pub fn root() -> Root {
    Root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_str_literal() {
        let scheme: Fixed = "weekday".into();
        assert_eq!(scheme.literal(), "weekday");
        assert_eq!(scheme, fixed("weekday"));
        assert_eq!(scheme.parse("/weekday"), Some(()));
    }

    #[test]
    fn test_fixed_matches_exact_literal() {
        let negate = fixed("negate");

        assert_eq!(negate.try_parse(&segs(&["negate"])), Some(HNil));
        assert_eq!(negate.try_parse(&segs(&["Negate"])), None);
        assert_eq!(negate.try_parse(&segs(&["negat"])), None);
        assert_eq!(negate.try_parse(&segs(&["negate "])), None);
    }

    #[test]
    fn test_fixed_renders_literal() {
        let mut out = Vec::new();
        fixed("weekday").render(HNil, &mut out);
        assert_eq!(out, vec!["weekday"]);
    }

    #[test]
    fn test_root() {
        assert_eq!(root().parse("/"), Some(()));
        assert_eq!(root().parse(""), Some(()));
        assert_eq!(root().parse("/anything"), None);
        assert_eq!(root().path(()), "/");
    }
}
