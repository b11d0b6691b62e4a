//! Capture-avoiding substitution of named type variables.
//!
//! All bindings are applied simultaneously: a variable introduced by a
//! replacement is never substituted again. When a binder would capture a
//! free variable of a replacement, the binder is renamed to the first of
//! `v`, `v0`, `v1`, ... that clashes with nothing in scope. Renaming is
//! deterministic, so results are stable across runs.

use alloc::borrow::Cow;
use alloc::format;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use super::vars::free_variables;
use crate::core::{Name, Ty, TyFlags, TyKind};

/// Simultaneous substitution: variable name to replacement.
pub type Bindings = HashMap<Name, Ty>;

/// Replace every free occurrence of `name` in `target` with `replacement`.
pub fn substitute_one(name: &str, replacement: &Ty, target: &Ty) -> Ty {
    let mut bindings = Bindings::with_capacity(1);
    bindings.insert(Name::from(name), replacement.clone());
    substitute_all(&bindings, target)
}

/// Replace every free occurrence of each bound name in `target` with its
/// replacement, all at once, without capturing any variable.
///
/// Total: rows with unusual tails and display-only variants are passed
/// through. Subtrees without variables or quantifiers are shared with
/// `target`.
pub fn substitute_all(bindings: &Bindings, target: &Ty) -> Ty {
    Substituter { bound: Vec::new() }.go(&Scope::new(Cow::Borrowed(bindings)), target)
}

/// Bindings in effect at some node, with the free variables of their
/// replacements computed once.
struct Scope<'a> {
    bindings: Cow<'a, Bindings>,
    replacement_vars: HashSet<Name>,
}

impl<'a> Scope<'a> {
    fn new(bindings: Cow<'a, Bindings>) -> Self {
        let replacement_vars = bindings.values().flat_map(free_variables).collect();
        Self {
            bindings,
            replacement_vars,
        }
    }

    fn without(&self, name: &Name) -> Scope<'static> {
        let mut narrowed = (*self.bindings).clone();
        narrowed.remove(name);
        Scope::new(Cow::Owned(narrowed))
    }
}

struct Substituter {
    /// Names bound by the binders enclosing the current node.
    bound: Vec<Name>,
}

impl Substituter {
    fn go(&mut self, scope: &Scope<'_>, ty: &Ty) -> Ty {
        // Quantifiers are kept in view: a clashing binder is renamed even
        // when its body mentions no variable.
        if scope.bindings.is_empty()
            || !ty
                .flags()
                .intersects(TyFlags::HAS_VARS | TyFlags::HAS_QUANTIFIERS)
        {
            return ty.clone();
        }
        match ty.kind() {
            TyKind::Var(v) => scope.bindings.get(v).cloned().unwrap_or_else(|| ty.clone()),
            TyKind::ForAll(v, body, scope_tag) => {
                if scope.bindings.contains_key(v) {
                    // The binder shadows `v`: drop its binding and look at
                    // the same binder again with what is left.
                    return self.go(&scope.without(v), ty);
                }
                if !scope.replacement_vars.contains(v) {
                    let body = self.under_binder(v.clone(), scope, body);
                    return ty.rebuild([body]);
                }

                let mut forbidden: HashSet<Name> = scope.bindings.keys().cloned().collect();
                forbidden.extend(self.bound.iter().cloned());
                forbidden.extend(scope.replacement_vars.iter().cloned());
                forbidden.extend(free_variables(body));
                let fresh = fresh_name(v, &forbidden);
                tracing::trace!(binder = %v, fresh = %fresh, "renaming binder to avoid capture");

                let mut rename = Bindings::with_capacity(1);
                rename.insert(v.clone(), Ty::var(fresh.clone()));
                let renamed = self.go(&Scope::new(Cow::Owned(rename)), body);
                let body = self.under_binder(fresh.clone(), scope, &renamed);
                Ty::for_all(fresh, body, *scope_tag)
            }
            TyKind::App(..) | TyKind::Constrained(..) | TyKind::RowCons(..) | TyKind::Kinded(..) => {
                let children: Vec<Ty> = ty
                    .kind()
                    .children()
                    .into_iter()
                    .map(|child| self.go(scope, child))
                    .collect();
                ty.rebuild(children)
            }
            TyKind::Unknown(_)
            | TyKind::Wildcard
            | TyKind::Constructor(_)
            | TyKind::Skolem(..)
            | TyKind::RowEmpty
            | TyKind::PrettyFunction(..)
            | TyKind::PrettyObject(_)
            | TyKind::PrettyForAll(..) => ty.clone(),
        }
    }

    fn under_binder(&mut self, name: Name, scope: &Scope<'_>, body: &Ty) -> Ty {
        self.bound.push(name);
        let result = self.go(scope, body);
        self.bound.pop();
        result
    }
}

/// First of `orig`, `orig0`, `orig1`, ... not in `forbidden`.
fn fresh_name(orig: &Name, forbidden: &HashSet<Name>) -> Name {
    if !forbidden.contains(orig) {
        return orig.clone();
    }
    (0u64..)
        .map(|n| Name::from(format!("{orig}{n}")))
        .find(|candidate| !forbidden.contains(candidate))
        .unwrap_or_else(|| orig.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_name_skips_taken_suffixes() {
        let forbidden: HashSet<Name> = ["b", "b0", "b1"].into_iter().map(Name::from).collect();
        assert_eq!(fresh_name(&Name::from("b"), &forbidden), Name::from("b2"));
    }

    #[test]
    fn test_fresh_name_keeps_free_original() {
        let forbidden: HashSet<Name> = HashSet::new();
        assert_eq!(fresh_name(&Name::from("b"), &forbidden), Name::from("b"));
    }

    #[test]
    fn test_narrowed_scope_drops_replacement_variables() {
        let mut bindings = Bindings::new();
        bindings.insert(Name::from("a"), Ty::var("x"));
        bindings.insert(Name::from("b"), Ty::var("y"));
        let scope = Scope::new(Cow::Borrowed(&bindings));
        assert!(scope.replacement_vars.contains(&Name::from("x")));

        let narrowed = scope.without(&Name::from("a"));
        assert!(!narrowed.replacement_vars.contains(&Name::from("x")));
        assert!(narrowed.replacement_vars.contains(&Name::from("y")));
    }
}
