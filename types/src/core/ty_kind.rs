use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::constraint::Constraint;
use super::flags::TyFlags;
use super::kind::Kind;
use super::names::{Label, Name, ProperName, Qualified, SkolemScope, SourceSpan};
use super::ty::Ty;

/// The closed set of type variants.
///
/// The serialized variant names below are the persisted wire format: new
/// variants may be added, existing ones must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", content = "contents")]
pub enum TyKind {
    /// Unification variable, identified by a number handed out by the checker.
    #[serde(rename = "TUnknown")]
    Unknown(u32),

    /// Named type variable.
    #[serde(rename = "TypeVar")]
    Var(Name),

    /// Placeholder in a partial type signature.
    #[serde(rename = "TypeWildcard")]
    Wildcard,

    /// Nominal type constructor.
    #[serde(rename = "TypeConstructor")]
    Constructor(Qualified<ProperName>),

    /// Type-level application.
    #[serde(rename = "TypeApp")]
    App(Ty, Ty),

    /// Universal quantifier. The scope tags skolems produced when this
    /// binder is instantiated.
    ForAll(Name, Ty, Option<SkolemScope>),

    /// Type guarded by typeclass constraints.
    #[serde(rename = "ConstrainedType")]
    Constrained(Vec<Constraint>, Ty),

    /// Rigid constant standing for a quantified variable: name, id, scope of
    /// the originating binder and optional source location.
    Skolem(Name, u32, SkolemScope, Option<SourceSpan>),

    /// The empty (closed) row.
    #[serde(rename = "REmpty")]
    RowEmpty,

    /// One labeled entry followed by the rest of the row.
    #[serde(rename = "RCons")]
    RowCons(Label, Ty, Ty),

    /// Type with an explicit kind annotation.
    #[serde(rename = "KindedType")]
    Kinded(Ty, Kind),

    /// Display-only: a saturated function arrow.
    #[serde(rename = "PrettyPrintFunction")]
    PrettyFunction(Ty, Ty),

    /// Display-only: a record built from a row.
    #[serde(rename = "PrettyPrintObject")]
    PrettyObject(Ty),

    /// Display-only: several binders collapsed into one quantifier.
    #[serde(rename = "PrettyPrintForAll")]
    PrettyForAll(Vec<Name>, Ty),
}

impl TyKind {
    pub fn compute_flags(&self) -> TyFlags {
        let own = match self {
            TyKind::Unknown(_) => TyFlags::HAS_UNKNOWNS,
            TyKind::Var(_) => TyFlags::HAS_VARS,
            TyKind::Wildcard => TyFlags::HAS_WILDCARDS,
            TyKind::Skolem(..) => TyFlags::HAS_SKOLEMS,
            TyKind::ForAll(..) | TyKind::PrettyForAll(..) => TyFlags::HAS_QUANTIFIERS,
            TyKind::Constructor(_)
            | TyKind::App(..)
            | TyKind::Constrained(..)
            | TyKind::RowEmpty
            | TyKind::RowCons(..)
            | TyKind::Kinded(..)
            | TyKind::PrettyFunction(..)
            | TyKind::PrettyObject(_) => TyFlags::empty(),
        };
        self.children()
            .into_iter()
            .fold(own, |acc, child| acc | child.flags())
    }

    /// The structural children of this node, in definition order:
    ///
    /// - `App`: `[function, argument]`
    /// - `ForAll`: `[body]`
    /// - `Constrained`: `[arguments of each constraint..., body]`
    /// - `RowCons`: `[head, tail]`
    /// - `Kinded`: `[type]`
    /// - `PrettyFunction`: `[argument, result]`
    /// - `PrettyObject`: `[row]`
    /// - `PrettyForAll`: `[body]`
    /// - Leaves (`Unknown`, `Var`, `Wildcard`, `Constructor`, `Skolem`,
    ///   `RowEmpty`): `[]`
    pub fn children(&self) -> SmallVec<[&Ty; 2]> {
        let mut out = SmallVec::new();
        match self {
            TyKind::Unknown(_)
            | TyKind::Var(_)
            | TyKind::Wildcard
            | TyKind::Constructor(_)
            | TyKind::Skolem(..)
            | TyKind::RowEmpty => {}
            TyKind::App(f, a) | TyKind::PrettyFunction(f, a) => {
                out.push(f);
                out.push(a);
            }
            TyKind::RowCons(_, head, tail) => {
                out.push(head);
                out.push(tail);
            }
            TyKind::ForAll(_, body, _) | TyKind::PrettyForAll(_, body) => out.push(body),
            TyKind::Constrained(constraints, body) => {
                out.extend(constraints.iter().flat_map(|c| c.args.iter()));
                out.push(body);
            }
            TyKind::Kinded(ty, _) => out.push(ty),
            TyKind::PrettyObject(row) => out.push(row),
        }
        out
    }

    /// Rebuild this node with new children, given in the order of
    /// [`TyKind::children`].
    ///
    /// Non-child payload (names, scopes, kinds, constraint classes) is kept.
    /// If `children` runs out early the remaining original children are kept.
    pub fn from_iter_children(&self, children: impl IntoIterator<Item = Ty>) -> TyKind {
        let mut children = children.into_iter();
        let mut next = |old: &Ty| children.next().unwrap_or_else(|| old.clone());
        match self {
            TyKind::Unknown(_)
            | TyKind::Var(_)
            | TyKind::Wildcard
            | TyKind::Constructor(_)
            | TyKind::Skolem(..)
            | TyKind::RowEmpty => self.clone(),
            TyKind::App(f, a) => {
                let f = next(f);
                TyKind::App(f, next(a))
            }
            TyKind::ForAll(name, body, scope) => TyKind::ForAll(name.clone(), next(body), *scope),
            TyKind::Constrained(constraints, body) => {
                let constraints = constraints
                    .iter()
                    .map(|c| Constraint {
                        class: c.class.clone(),
                        args: c.args.iter().map(&mut next).collect(),
                    })
                    .collect();
                TyKind::Constrained(constraints, next(body))
            }
            TyKind::RowCons(label, head, tail) => {
                let head = next(head);
                TyKind::RowCons(label.clone(), head, next(tail))
            }
            TyKind::Kinded(ty, kind) => TyKind::Kinded(next(ty), kind.clone()),
            TyKind::PrettyFunction(arg, ret) => {
                let arg = next(arg);
                TyKind::PrettyFunction(arg, next(ret))
            }
            TyKind::PrettyObject(row) => TyKind::PrettyObject(next(row)),
            TyKind::PrettyForAll(names, body) => TyKind::PrettyForAll(names.clone(), next(body)),
        }
    }

    pub fn alloc(self) -> Ty {
        Ty::new(self)
    }
}
