use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::{fmt, hash, mem};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use static_assertions::assert_impl_all;

use super::constraint::Constraint;
use super::flags::TyFlags;
use super::kind::Kind;
use super::names::{Label, Name, ProperName, Qualified, SkolemScope, SourceSpan};
use super::ty_kind::TyKind;

/// Shared, immutable handle to a type node.
///
/// Cloning is a reference-count bump. Equality, ordering and hashing are
/// structural over the [`TyKind`] tree (bound-variable names included), with
/// a pointer-identity fast path.
#[derive(Clone)]
pub struct Ty(Arc<TyNode>);

assert_impl_all!(Ty: Send, Sync);

impl Ty {
    pub fn new(kind: TyKind) -> Self {
        Self(Arc::new(TyNode::new(kind)))
    }

    pub fn node(&self) -> &TyNode {
        &self.0
    }

    pub fn kind(&self) -> &TyKind {
        self.node().kind()
    }

    pub fn flags(&self) -> TyFlags {
        self.node().flags()
    }

    /// True if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Ty) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Rebuild this node with new children (see [`TyKind::children`]).
    ///
    /// Returns `self` unchanged when every child is pointer-identical to the
    /// original, so untouched subtrees stay shared.
    pub fn rebuild(&self, children: impl IntoIterator<Item = Ty>) -> Ty {
        let new: SmallVec<[Ty; 2]> = children.into_iter().collect();
        let old = self.kind().children();
        if new.len() == old.len() && new.iter().zip(old.iter()).all(|(n, o)| n.ptr_eq(o)) {
            return self.clone();
        }
        Ty::new(self.kind().from_iter_children(new))
    }
}

// === Constructors ===

impl Ty {
    pub fn unknown(id: u32) -> Self {
        TyKind::Unknown(id).alloc()
    }

    pub fn var(name: impl Into<Name>) -> Self {
        TyKind::Var(name.into()).alloc()
    }

    pub fn wildcard() -> Self {
        TyKind::Wildcard.alloc()
    }

    pub fn constructor(name: impl Into<Qualified<ProperName>>) -> Self {
        TyKind::Constructor(name.into()).alloc()
    }

    pub fn app(f: Ty, arg: Ty) -> Self {
        TyKind::App(f, arg).alloc()
    }

    /// `Prim.Function arg ret`.
    pub fn function(arg: Ty, ret: Ty) -> Self {
        Ty::app(Ty::app(Ty::constructor("Prim.Function"), arg), ret)
    }

    pub fn for_all(name: impl Into<Name>, body: Ty, scope: Option<SkolemScope>) -> Self {
        TyKind::ForAll(name.into(), body, scope).alloc()
    }

    pub fn constrained(constraints: Vec<Constraint>, body: Ty) -> Self {
        TyKind::Constrained(constraints, body).alloc()
    }

    pub fn skolem(
        name: impl Into<Name>,
        id: u32,
        scope: SkolemScope,
        span: Option<SourceSpan>,
    ) -> Self {
        TyKind::Skolem(name.into(), id, scope, span).alloc()
    }

    pub fn row_empty() -> Self {
        TyKind::RowEmpty.alloc()
    }

    pub fn row_cons(label: impl Into<Label>, head: Ty, tail: Ty) -> Self {
        TyKind::RowCons(label.into(), head, tail).alloc()
    }

    pub fn kinded(ty: Ty, kind: Kind) -> Self {
        TyKind::Kinded(ty, kind).alloc()
    }

    pub fn pretty_function(arg: Ty, ret: Ty) -> Self {
        TyKind::PrettyFunction(arg, ret).alloc()
    }

    pub fn pretty_object(row: Ty) -> Self {
        TyKind::PrettyObject(row).alloc()
    }

    pub fn pretty_for_all(names: impl IntoIterator<Item = Name>, body: Ty) -> Self {
        TyKind::PrettyForAll(names.into_iter().collect(), body).alloc()
    }
}

impl PartialEq for Ty {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.kind() == other.kind()
    }
}

impl Eq for Ty {}

impl PartialOrd for Ty {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ty {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.kind().cmp(other.kind())
    }
}

impl hash::Hash for Ty {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.node().hash(state)
    }
}

impl fmt::Debug for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.kind(), f)
    }
}

impl From<TyKind> for Ty {
    fn from(kind: TyKind) -> Self {
        Ty::new(kind)
    }
}

impl Serialize for Ty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.kind().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TyKind::deserialize(deserializer).map(Ty::new)
    }
}

/// A type node: the variant together with its cached flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TyNode(TyFlags, TyKind);

impl TyNode {
    pub fn new(kind: TyKind) -> Self {
        let flags = kind.compute_flags();
        Self(flags, kind)
    }

    pub fn flags(&self) -> TyFlags {
        self.0
    }

    pub fn kind(&self) -> &TyKind {
        &self.1
    }
}

/// Releases the subtree with a heap work-list instead of recursing, so
/// dropping a deep type (a long row, say) cannot overflow the stack.
impl Drop for TyNode {
    fn drop(&mut self) {
        let mut pending: Vec<Ty> = Vec::new();
        detach_children(mem::replace(&mut self.1, TyKind::Wildcard), &mut pending);
        while let Some(ty) = pending.pop() {
            // Shared children are left to their other owners.
            if let Some(mut node) = Arc::into_inner(ty.0) {
                detach_children(mem::replace(&mut node.1, TyKind::Wildcard), &mut pending);
            }
        }
    }
}

fn detach_children(kind: TyKind, pending: &mut Vec<Ty>) {
    match kind {
        TyKind::App(f, a) | TyKind::PrettyFunction(f, a) => pending.extend([f, a]),
        TyKind::RowCons(_, head, tail) => pending.extend([head, tail]),
        TyKind::ForAll(_, body, _) | TyKind::PrettyForAll(_, body) => pending.push(body),
        TyKind::Constrained(constraints, body) => {
            pending.extend(constraints.into_iter().flat_map(|c| c.args));
            pending.push(body);
        }
        TyKind::Kinded(ty, _) => pending.push(ty),
        TyKind::PrettyObject(row) => pending.push(row),
        TyKind::Unknown(_)
        | TyKind::Var(_)
        | TyKind::Wildcard
        | TyKind::Constructor(_)
        | TyKind::Skolem(..)
        | TyKind::RowEmpty => {}
    }
}

impl hash::Hash for TyNode {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Flags are computed from the kind, so we don't need to hash them.
        self.kind().hash(state);
    }
}
