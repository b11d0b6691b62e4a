use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::core::traversal::everything_on_types;
use crate::core::{Name, Ty, TyFlags, TyKind};

/// Every variable name occurring anywhere in `ty`, bound or free.
///
/// Names are de-duplicated and listed in order of first occurrence.
pub fn used_variables(ty: &Ty) -> Vec<Name> {
    let all = everything_on_types(
        ty,
        |mut acc: Vec<Name>, rest| {
            acc.extend(rest);
            acc
        },
        |t| match t.kind() {
            TyKind::Var(v) => alloc::vec![v.clone()],
            _ => Vec::new(),
        },
    );
    dedup_in_order(all)
}

/// Variables of `ty` not bound by an enclosing `ForAll`.
///
/// Names are de-duplicated and listed in order of first occurrence. The
/// display-only variants contribute nothing.
pub fn free_variables(ty: &Ty) -> Vec<Name> {
    let mut collector = FreeVars::default();
    collector.collect(ty);
    collector.free
}

#[derive(Default)]
struct FreeVars {
    /// Names bound by the enclosing binders.
    bound: HashSet<Name>,
    /// Free names in order of first occurrence, `seen` mirrors it.
    free: Vec<Name>,
    seen: HashSet<Name>,
}

impl FreeVars {
    fn collect(&mut self, ty: &Ty) {
        if !ty.flags().contains(TyFlags::HAS_VARS) {
            return;
        }
        match ty.kind() {
            TyKind::Var(v) => {
                if !self.bound.contains(v) && self.seen.insert(v.clone()) {
                    self.free.push(v.clone());
                }
            }
            TyKind::ForAll(v, body, _) => {
                // An inner binder of an already bound name must not unbind it.
                let introduced = self.bound.insert(v.clone());
                self.collect(body);
                if introduced {
                    self.bound.remove(v);
                }
            }
            TyKind::App(..) | TyKind::Constrained(..) | TyKind::RowCons(..) | TyKind::Kinded(..) => {
                for child in ty.kind().children() {
                    self.collect(child);
                }
            }
            TyKind::Unknown(_)
            | TyKind::Wildcard
            | TyKind::Constructor(_)
            | TyKind::Skolem(..)
            | TyKind::RowEmpty
            | TyKind::PrettyFunction(..)
            | TyKind::PrettyObject(_)
            | TyKind::PrettyForAll(..) => {}
        }
    }
}

/// True if any node of `ty` is a `Wildcard`.
pub fn contains_wildcards(ty: &Ty) -> bool {
    everything_on_types(ty, |a, b| a || b, |t| matches!(t.kind(), TyKind::Wildcard))
}

fn dedup_in_order(names: Vec<Name>) -> Vec<Name> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
