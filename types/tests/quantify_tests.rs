//! Tests for quantifier utilities and variable analyses.

mod common;

use common::{kitchen_sink, one_of_each_variant};
use corvid_types::algo::{
    contains_wildcards, free_variables, is_mono_type, move_quantifiers_to_front,
    quantify_over_free_variables, universally_quantify, used_variables,
};
use corvid_types::{Constraint, Name, SkolemScope, Ty, TyKind, ty};
use pretty_assertions::assert_eq;

fn names(list: &[&str]) -> Vec<Name> {
    list.iter().copied().map(Name::from).collect()
}

// ============================================================================
// Variable analyses
// ============================================================================

#[test]
fn test_free_variables_first_occurrence_order() {
    let ty = ty!(forall a. (b a c b));
    assert_eq!(free_variables(&ty), names(&["b", "c"]));
}

#[test]
fn test_free_variables_scoped_binder() {
    // The inner `a` is bound, the outer one is not.
    let ty = ty!(a -> (forall a. a));
    assert_eq!(free_variables(&ty), names(&["a"]));
}

#[test]
fn test_used_variables_include_bound() {
    let ty = ty!(forall a. (b a c b));
    assert_eq!(used_variables(&ty), names(&["b", "a", "c"]));
}

#[test]
fn test_used_variables_kitchen_sink() {
    assert_eq!(
        used_variables(&kitchen_sink()),
        names(&["a", "f", "x", "s", "b", "r", "c", "p", "q"])
    );
}

#[test]
fn test_free_variables_kitchen_sink() {
    // `s` is bound; the display-only variants contribute nothing.
    assert_eq!(
        free_variables(&kitchen_sink()),
        names(&["a", "f", "x", "b", "r"])
    );
}

#[test]
fn test_free_variables_many_distinct_names() {
    let args: Vec<Ty> = (0..20_000).map(|i| Ty::var(format!("v{i}"))).collect();
    let ty = Ty::constrained(vec![Constraint::new("C", args)], ty!(v0));
    let free = free_variables(&ty);
    assert_eq!(free.len(), 20_000);
    assert_eq!(free[19_999], Name::from("v19999"));
}

#[test]
fn test_contains_wildcards() {
    assert!(contains_wildcards(&ty!(@Maybe _)));
    assert!(contains_wildcards(&Ty::row_cons("x", ty!(_), ty!(r))));
    assert!(!contains_wildcards(&ty!(forall a. (a -> a))));
}

// ============================================================================
// Quantification
// ============================================================================

#[test]
fn test_quantify_closes_type() {
    for ty in one_of_each_variant().into_iter().chain([kitchen_sink()]) {
        let closed = quantify_over_free_variables(&ty);
        assert!(free_variables(&closed).is_empty(), "{closed}");
    }
}

#[test]
fn test_quantify_order_follows_first_occurrence() {
    let ty = ty!(b -> a -> b);
    assert_eq!(quantify_over_free_variables(&ty), ty!(forall b a. (b -> a -> b)));
}

#[test]
fn test_quantify_closed_type_unchanged() {
    let ty = ty!(forall a. (a -> a));
    assert_eq!(quantify_over_free_variables(&ty), ty);
}

#[test]
fn test_universally_quantify_owned_names() {
    let ty = universally_quantify(names(&["x", "y"]), ty!(x y));
    assert_eq!(ty, ty!(forall x y. (x y)));
    assert!(!is_mono_type(&ty));
}

#[test]
fn test_mono_types() {
    let mono: Vec<Ty> = one_of_each_variant()
        .into_iter()
        .filter(|ty| is_mono_type(ty))
        .collect();
    // Every sample except the one `ForAll`.
    assert_eq!(mono.len(), 13);
    assert!(mono.iter().all(|ty| !matches!(ty.kind(), TyKind::ForAll(..))));
}

// ============================================================================
// Moving quantifiers to the front
// ============================================================================

fn interleaved() -> Ty {
    // forall a. Show a => forall b. (Eq b, Ord b) => a -> b
    Ty::for_all(
        "a",
        Ty::constrained(
            vec![Constraint::new("Show", [ty!(a)])],
            Ty::for_all(
                "b",
                Ty::constrained(
                    vec![
                        Constraint::new("Eq", [ty!(b)]),
                        Constraint::new("Ord", [ty!(b)]),
                    ],
                    ty!(a -> b),
                ),
                Some(SkolemScope(2)),
            ),
        ),
        Some(SkolemScope(1)),
    )
}

#[test]
fn test_move_quantifiers_canonical_shape() {
    let expected = Ty::for_all(
        "a",
        Ty::for_all(
            "b",
            Ty::constrained(
                vec![
                    Constraint::new("Show", [ty!(a)]),
                    Constraint::new("Eq", [ty!(b)]),
                    Constraint::new("Ord", [ty!(b)]),
                ],
                ty!(a -> b),
            ),
            Some(SkolemScope(2)),
        ),
        Some(SkolemScope(1)),
    );
    assert_eq!(move_quantifiers_to_front(&interleaved()), expected);
}

#[test]
fn test_move_quantifiers_idempotent() {
    let once = move_quantifiers_to_front(&interleaved());
    assert_eq!(move_quantifiers_to_front(&once), once);

    for ty in one_of_each_variant() {
        let once = move_quantifiers_to_front(&ty);
        assert_eq!(move_quantifiers_to_front(&once), once);
    }
}

#[test]
fn test_move_quantifiers_keeps_free_variables() {
    let ty = interleaved();
    assert_eq!(
        free_variables(&move_quantifiers_to_front(&ty)),
        free_variables(&ty)
    );
}

#[test]
fn test_move_quantifiers_ignores_nested_positions() {
    // The quantifier in argument position stays put.
    let ty = ty!((forall a. (a -> a)) -> @Int);
    assert_eq!(move_quantifiers_to_front(&ty), ty);
}
