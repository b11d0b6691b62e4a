//! Whole-tree rewrites built on [`drive_fold`].
//!
//! The `_m` variants take a fallible step. Steps run strictly left to right
//! (bottom-up: post-order, top-down: pre-order), so state captured by the
//! closure observes earlier steps, and the first `Err` aborts the rewrite.

use core::convert::Infallible;

use super::fold::{Fold, FoldStep, drive_fold};
use crate::core::Ty;

struct BottomUp<F>(F);

impl<E, F> Fold for BottomUp<F>
where
    F: FnMut(Ty) -> Result<Ty, E>,
{
    type Output = Ty;
    type Error = E;

    fn visit(&mut self, _ty: &Ty) -> Result<FoldStep<Ty>, E> {
        Ok(FoldStep::Recurse)
    }

    fn combine(
        &mut self,
        ty: &Ty,
        children: impl ExactSizeIterator<Item = Ty> + DoubleEndedIterator,
    ) -> Result<Ty, E> {
        (self.0)(ty.rebuild(children))
    }
}

struct TopDown<F>(F);

impl<E, F> Fold for TopDown<F>
where
    F: FnMut(Ty) -> Result<Ty, E>,
{
    type Output = Ty;
    type Error = E;

    fn visit(&mut self, ty: &Ty) -> Result<FoldStep<Ty>, E> {
        (self.0)(ty.clone()).map(FoldStep::RecurseInto)
    }

    fn combine(
        &mut self,
        ty: &Ty,
        children: impl ExactSizeIterator<Item = Ty> + DoubleEndedIterator,
    ) -> Result<Ty, E> {
        Ok(ty.rebuild(children))
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Bottom-up rewrite: `f` sees each node after its children were rewritten.
///
/// Every node is transformed exactly once; the result of `f` is not
/// revisited.
pub fn everywhere_on_types(ty: &Ty, mut f: impl FnMut(Ty) -> Ty) -> Ty {
    infallible(everywhere_on_types_m(ty, |t| Ok(f(t))))
}

/// Top-down rewrite: `f` sees each node before its children.
///
/// The children of the node returned by `f` are rewritten next; the returned
/// node itself is not passed to `f` again.
pub fn everywhere_on_types_top_down(ty: &Ty, mut f: impl FnMut(Ty) -> Ty) -> Ty {
    infallible(everywhere_on_types_top_down_m(ty, |t| Ok(f(t))))
}

/// Fallible bottom-up rewrite.
pub fn everywhere_on_types_m<E>(ty: &Ty, f: impl FnMut(Ty) -> Result<Ty, E>) -> Result<Ty, E> {
    drive_fold(ty, BottomUp(f))
}

/// Fallible top-down rewrite.
pub fn everywhere_on_types_top_down_m<E>(
    ty: &Ty,
    f: impl FnMut(Ty) -> Result<Ty, E>,
) -> Result<Ty, E> {
    drive_fold(ty, TopDown(f))
}
