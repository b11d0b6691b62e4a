use alloc::vec::Vec;

use super::vars::free_variables;
use crate::core::{Constraint, Name, SkolemScope, Ty, TyKind};

/// True unless the outermost node is a universal quantifier.
pub fn is_mono_type(ty: &Ty) -> bool {
    !matches!(ty.kind(), TyKind::ForAll(..))
}

/// Wrap `body` in one `ForAll` per name, the first name outermost.
///
/// `[a, b]` over `t` gives `forall a. forall b. t`. No skolem scopes are
/// attached.
pub fn universally_quantify<I>(names: I, body: Ty) -> Ty
where
    I: IntoIterator,
    I::Item: Into<Name>,
    I::IntoIter: DoubleEndedIterator,
{
    names
        .into_iter()
        .rev()
        .fold(body, |inner, name| Ty::for_all(name, inner, None))
}

/// Close `ty` over its free variables, in order of first occurrence.
pub fn quantify_over_free_variables(ty: &Ty) -> Ty {
    universally_quantify(free_variables(ty), ty.clone())
}

/// Hoist the leading quantifiers and constraints of `ty` into canonical
/// order: every quantifier first, then a single `Constrained` holding all
/// constraints, then the remaining type.
///
/// Only the spine of nested `ForAll` and `Constrained` nodes at the root is
/// considered; quantifiers further down (e.g. in a function argument) are
/// left alone. Quantifiers keep their order and skolem scopes, constraints
/// keep their encounter order. Empty wrappers are not introduced.
pub fn move_quantifiers_to_front(ty: &Ty) -> Ty {
    let mut quantifiers: Vec<(Name, Option<SkolemScope>)> = Vec::new();
    let mut constraints: Vec<Constraint> = Vec::new();
    let mut current = ty;
    loop {
        match current.kind() {
            TyKind::ForAll(name, body, scope) => {
                quantifiers.push((name.clone(), *scope));
                current = body;
            }
            TyKind::Constrained(cs, body) => {
                constraints.extend(cs.iter().cloned());
                current = body;
            }
            _ => break,
        }
    }
    tracing::trace!(
        quantifiers = quantifiers.len(),
        constraints = constraints.len(),
        "hoisting quantifiers"
    );

    let inner = if constraints.is_empty() {
        current.clone()
    } else {
        Ty::constrained(constraints, current.clone())
    };
    quantifiers
        .into_iter()
        .rev()
        .fold(inner, |body, (name, scope)| Ty::for_all(name, body, scope))
}
