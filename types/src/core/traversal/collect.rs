//! Accumulating folds: compute a summary value from every node.

use alloc::{vec, vec::Vec};
use core::convert::Infallible;

use super::fold::{Fold, FoldStep, drive_fold};
use crate::core::Ty;

struct Everything<C, F> {
    combine: C,
    f: F,
}

impl<R, C, F> Fold for Everything<C, F>
where
    C: FnMut(R, R) -> R,
    F: FnMut(&Ty) -> R,
{
    type Output = R;
    type Error = Infallible;

    fn visit(&mut self, _ty: &Ty) -> Result<FoldStep<R>, Infallible> {
        Ok(FoldStep::Recurse)
    }

    fn combine(
        &mut self,
        ty: &Ty,
        children: impl ExactSizeIterator<Item = R> + DoubleEndedIterator,
    ) -> Result<R, Infallible> {
        let own = (self.f)(ty);
        Ok(children.fold(own, &mut self.combine))
    }
}

/// Summarize a type: each node's value is `f(node)` combined with the values
/// of its children, left to right.
///
/// `f` should be pure; it is called once per node, children before parents.
pub fn everything_on_types<R>(
    ty: &Ty,
    combine: impl FnMut(R, R) -> R,
    f: impl FnMut(&Ty) -> R,
) -> R {
    match drive_fold(ty, Everything { combine, f }) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Summarize a type while threading a context from parents to children.
///
/// `f` maps the context of a node and the node itself to the context passed
/// to its children and the node's own partial result. Contexts never flow
/// between siblings. A node's result is its partial result combined with the
/// results of its children left to right; nodes without children combine
/// their partial result with `zero`.
///
/// `f` is called in pre-order, left to right.
pub fn everything_with_context_on_types<S, R>(
    ctx: S,
    zero: R,
    mut combine: impl FnMut(R, R) -> R,
    mut f: impl FnMut(&S, &Ty) -> (S, R),
    ty: &Ty,
) -> R
where
    S: Clone,
    R: Clone,
{
    enum Task<S, R> {
        Visit(S, Ty),
        Combine(usize, R),
    }

    let mut stack = vec![Task::Visit(ctx, ty.clone())];
    let mut results: Vec<R> = Vec::new();

    while let Some(task) = stack.pop() {
        match task {
            Task::Visit(ctx, ty) => {
                let (inner, partial) = f(&ctx, &ty);
                let children = ty.kind().children();
                if children.is_empty() {
                    results.push(combine(partial, zero.clone()));
                    continue;
                }
                stack.push(Task::Combine(children.len(), partial));
                stack.extend(
                    children
                        .into_iter()
                        .rev()
                        .map(|child| Task::Visit(inner.clone(), child.clone())),
                );
            }
            Task::Combine(count, partial) => {
                let start = results
                    .len()
                    .checked_sub(count)
                    .expect("Bug: result stack underflow");
                let out = results.drain(start..).fold(partial, &mut combine);
                results.push(out);
            }
        }
    }

    results.pop().unwrap_or(zero)
}
