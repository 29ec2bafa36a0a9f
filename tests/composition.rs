//! Capture order and arity under every way of associating a composite.
//!
//! Four leaves of distinct types, `int / string / Colour / double`, must
//! capture `(i32, String, Colour, f64)` whichever side new parts were added
//! from. The tuple type annotations are checked by the compiler; the values by
//! the assertions.

use route_scheme::{double, fixed, int, locale, named, root, sequence, string, LanguageTag, Scheme};

mod common;

use common::{arity_of, date, ymd, Colour};

type Four = (i32, String, Colour, f64);

const PATH: &str = "/7/seven/Red/7.5";

fn expected() -> Four {
    (7, "seven".to_string(), Colour::Red, 7.5)
}

fn check<S>(scheme: S)
where
    S: Scheme,
    S::Captures: route_scheme::Captures<Tuple = Four>,
{
    assert_eq!(arity_of(&scheme), 4);
    assert_eq!(scheme.parse(PATH), Some(expected()));
    assert_eq!(scheme.path(expected()), PATH);
}

#[test]
fn test_left_nested() {
    // ((a b) c) d
    check(int().then(string()).then(named::<Colour>()).then(double()));
}

#[test]
fn test_right_nested() {
    // a (b (c d))
    check(int().then(string().then(named::<Colour>().then(double()))));
}

#[test]
fn test_balanced() {
    // (a b) (c d)
    check(int().then(string()).then(named::<Colour>().then(double())));
}

#[test]
fn test_inner_left() {
    // (a (b c)) d
    check(int().then(string().then(named::<Colour>())).then(double()));
}

#[test]
fn test_inner_right() {
    // a ((b c) d)
    check(int().then(string().then(named::<Colour>()).then(double())));
}

#[test]
fn test_prefixing_and_appending_mixed() {
    let middle = sequence(string(), named::<Colour>());
    let prefixed = sequence(int(), middle);
    check(sequence(prefixed, double()));

    let middle = sequence(string(), named::<Colour>());
    let appended = sequence(middle, double());
    check(sequence(int(), appended));
}

#[test]
fn test_empty_captures_are_transparent() {
    // Root and fixed parts interleaved at every level change arity, not captures.
    let scheme = root()
        .then(int().then_fixed("a"))
        .then(root().then(string()))
        .then(fixed("b").then(named::<Colour>().then(root())))
        .then(double().then_fixed("c"));

    assert_eq!(arity_of(&scheme), 7);
    let path = "/7/a/seven/b/Red/7.5/c";
    assert_eq!(scheme.parse(path), Some(expected()));
    assert_eq!(scheme.path(expected()), path);
    assert_eq!(scheme.parse("/7/x/seven/b/Red/7.5/c"), None);
}

#[test]
fn test_projection_behaves_as_single_value_at_any_depth() {
    let en: LanguageTag = "en".parse().unwrap();
    let leap = ymd(2016, 2, 29);

    let appended = locale().then(date()).then(int());
    let prefixed = locale().then(date().then(int()));
    let nested = locale().then(date().then(int()).restrict(|_| true));

    let path = "/en/2016/2/29/3";
    assert_eq!(appended.parse(path), Some((en.clone(), leap, 3)));
    assert_eq!(prefixed.parse(path), Some((en.clone(), leap, 3)));
    assert_eq!(nested.parse(path), Some((en.clone(), leap, 3)));

    assert_eq!(arity_of(&appended), 5);
    assert_eq!(arity_of(&prefixed), 5);
    assert_eq!(prefixed.path((en, leap, 3)), path);
}

#[test]
fn test_arity_is_stable_across_calls() {
    let scheme = int().then(date()).then_fixed("x");

    for _ in 0..3 {
        assert_eq!(arity_of(&scheme), 5);
        assert_eq!(scheme.segments((1, ymd(2000, 1, 1))).len(), 5);
    }
}

#[test]
fn test_non_match_anywhere_is_non_match_everywhere() {
    let scheme = int().then(string()).then(named::<Colour>()).then(double());

    assert_eq!(scheme.parse("/x/seven/Red/7.5"), None);
    assert_eq!(scheme.parse("/7/seven/red/7.5"), None);
    assert_eq!(scheme.parse("/7/seven/Red/x"), None);

    let restricted = scheme.restrict(|(n, _, _, _)| *n > 10);
    assert_eq!(restricted.parse(PATH), None);
}
