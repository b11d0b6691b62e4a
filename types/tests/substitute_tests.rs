//! Tests for capture-avoiding substitution.

mod common;

use common::kitchen_sink;
use corvid_types::algo::{Bindings, free_variables, row_to_list, substitute_all, substitute_one};
use corvid_types::{Constraint, Kind, Name, Ty, ty};
use pretty_assertions::assert_eq;

fn bindings<const N: usize>(pairs: [(&str, Ty); N]) -> Bindings {
    pairs
        .into_iter()
        .map(|(name, ty)| (Name::from(name), ty))
        .collect()
}

// ============================================================================
// Basic replacement
// ============================================================================

#[test]
fn test_replaces_free_occurrences() {
    let result = substitute_one("a", &ty!(@Int), &ty!(a -> (@Maybe a)));
    assert_eq!(result, ty!(@Int -> (@Maybe @Int)));
}

#[test]
fn test_other_variables_untouched() {
    let result = substitute_one("a", &ty!(@Int), &ty!(b -> c));
    assert_eq!(result, ty!(b -> c));
}

#[test]
fn test_simultaneous_swap() {
    let swap = bindings([("a", ty!(b)), ("b", ty!(a))]);
    assert_eq!(substitute_all(&swap, &ty!(a -> b)), ty!(b -> a));
}

#[test]
fn test_replacement_not_substituted_again() {
    let chain = bindings([("a", ty!(b)), ("b", ty!(c))]);
    assert_eq!(substitute_all(&chain, &ty!(a)), ty!(b));
}

#[test]
fn test_empty_bindings_is_identity() {
    let ty = kitchen_sink();
    let result = substitute_all(&Bindings::new(), &ty);
    assert!(result.ptr_eq(&ty));
}

// ============================================================================
// Binders
// ============================================================================

#[test]
fn test_shadowed_binding_is_ignored() {
    let ty = ty!(forall a. (a b));
    let result = substitute_one("a", &ty!(@Int), &ty);
    assert_eq!(result, ty);
}

#[test]
fn test_shadowing_only_drops_the_shadowed_key() {
    let both = bindings([("a", ty!(@Int)), ("b", ty!(@String))]);
    let result = substitute_all(&both, &ty!(forall a. (a b)));
    assert_eq!(result, ty!(forall a. (a @String)));
}

#[test]
fn test_binder_without_clash_is_kept() {
    let result = substitute_one("a", &ty!(@Int), &ty!(forall b. (a b)));
    assert_eq!(result, ty!(forall b. (@Int b)));
}

#[test]
fn test_capturing_binder_is_renamed() {
    let result = substitute_one("a", &ty!(b), &ty!(forall b. (a b)));
    assert_eq!(result, ty!(forall b0. (b b0)));
}

#[test]
fn test_clashing_binder_over_closed_body_is_renamed() {
    let result = substitute_one("a", &ty!(b), &ty!(forall b. @Int));
    assert_eq!(result, ty!(forall b0. @Int));
}

#[test]
fn test_clashing_binder_in_argument_position_is_renamed() {
    let ty = Ty::app(ty!(a), ty!(forall b. @Int));
    let result = substitute_one("a", &ty!(b), &ty);
    assert_eq!(result, Ty::app(ty!(b), ty!(forall b0. @Int)));
}

#[test]
fn test_fresh_name_avoids_free_variables_of_body() {
    // `b0` is free in the body, so the renamed binder must not be `b0`.
    let result = substitute_one("a", &ty!(b), &ty!(forall b. (a b b0)));
    assert_eq!(result, ty!(forall b1. (b b1 b0)));
    assert_eq!(free_variables(&result), [Name::from("b"), Name::from("b0")]);
}

#[test]
fn test_fresh_name_avoids_keys_and_replacement_variables() {
    let subst = bindings([("a", ty!(b b0)), ("b1", ty!(@Int))]);
    let result = substitute_all(&subst, &ty!(forall b. (a b)));
    assert_eq!(result, ty!(forall b2. (b b0 b2)));
}

#[test]
fn test_nested_binders_are_renamed_consistently() {
    let result = substitute_one("a", &ty!(b), &ty!(forall b b0. (a b b0)));
    assert_eq!(result, ty!(forall b0 b00. (b b0 b00)));
    assert_eq!(free_variables(&result), [Name::from("b")]);
}

#[test]
fn test_renaming_keeps_skolem_scope() {
    let scope = Some(corvid_types::SkolemScope(9));
    let ty = Ty::for_all("b", ty!(a b), scope);
    let result = substitute_one("a", &ty!(b), &ty);
    assert_eq!(result, Ty::for_all("b0", ty!(b b0), scope));
}

#[test]
fn test_no_capture_on_kitchen_sink() {
    // Closing every free variable over one fresh name must leave exactly
    // that name free.
    let ty = kitchen_sink();
    let subst: Bindings = free_variables(&ty)
        .into_iter()
        .map(|name| (name, ty!(s)))
        .collect();
    let result = substitute_all(&subst, &ty);
    assert_eq!(free_variables(&result), [Name::from("s")]);
}

// ============================================================================
// Other variants
// ============================================================================

#[test]
fn test_constraint_arguments_are_substituted() {
    let ty = Ty::constrained(vec![Constraint::new("Show", [ty!(a)])], ty!(a -> @String));
    let result = substitute_one("a", &ty!(@Int), &ty);
    let expected = Ty::constrained(
        vec![Constraint::new("Show", [ty!(@Int)])],
        ty!(@Int -> @String),
    );
    assert_eq!(result, expected);
}

#[test]
fn test_row_fields_and_tail_are_substituted() {
    let row = Ty::row_cons("x", ty!(a), ty!(r));
    let subst = bindings([
        ("a", ty!(@Int)),
        ("r", Ty::row_cons("y", ty!(@Boolean), Ty::row_empty())),
    ]);
    let (fields, tail) = row_to_list(&substitute_all(&subst, &row));
    assert_eq!(
        fields,
        [
            (Name::from("x"), ty!(@Int)),
            (Name::from("y"), ty!(@Boolean)),
        ]
    );
    assert_eq!(tail, Ty::row_empty());
}

#[test]
fn test_kinded_type_is_substituted() {
    let ty = Ty::kinded(ty!(f), Kind::function(Kind::Star, Kind::Star));
    let result = substitute_one("f", &ty!(@Maybe), &ty);
    assert_eq!(
        result,
        Ty::kinded(ty!(@Maybe), Kind::function(Kind::Star, Kind::Star))
    );
}

#[test]
fn test_leaves_without_variables_untouched() {
    let ty = ty!(_ (?1) @Int);
    let result = substitute_one("a", &ty!(@Int), &ty);
    assert!(result.ptr_eq(&ty));
}

#[test]
fn test_display_only_variants_are_opaque() {
    let ty = Ty::app(Ty::pretty_function(ty!(a), ty!(a)), ty!(a));
    let result = substitute_one("a", &ty!(@Int), &ty);
    assert_eq!(
        result,
        Ty::app(Ty::pretty_function(ty!(a), ty!(a)), ty!(@Int))
    );
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn test_unchanged_subtrees_are_shared() {
    let untouched = ty!(@Maybe (b -> c));
    let ty = Ty::app(ty!(a), untouched.clone());
    let result = substitute_one("a", &ty!(@Int), &ty);
    match result.kind() {
        corvid_types::TyKind::App(head, arg) => {
            assert_eq!(head, &ty!(@Int));
            assert!(arg.ptr_eq(&untouched));
        }
        other => panic!("expected an application, got {other:?}"),
    }
}

#[test]
fn test_no_match_shares_root() {
    let ty = ty!(forall b. (b c));
    let result = substitute_one("a", &ty!(d), &ty);
    assert!(result.ptr_eq(&ty));
}
