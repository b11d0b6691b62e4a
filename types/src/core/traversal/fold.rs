//! Generic fold (catamorphism) for type traversal and transformation.
//!
//! The `Fold` trait provides a stack-based visitor pattern that can:
//! - Transform types (`Output = Ty`)
//! - Collect information (`Output = Vec<Name>`, `bool`, ...)
//! - Perform side effects (`Output = ()`)
//!
//! Traversal depth is bounded by heap, not by the call stack.

use alloc::{vec, vec::Vec};

use crate::core::Ty;

/// Control flow for the fold traversal.
///
/// - `Recurse`: Process children, then call `combine`
/// - `RecurseInto(ty)`: Process the children of `ty` instead, then call
///   `combine` with `ty`
/// - `Done(out)`: Skip children, push `out` to results stack
/// - `Replace(ty)`: Visit `ty` instead (push to task stack)
pub enum FoldStep<Output> {
    /// Continue into children, then combine results.
    Recurse,
    /// Continue into the children of this node, which stands in for the
    /// visited one. Unlike `Replace`, the node itself is not visited again.
    RecurseInto(Ty),
    /// Finished with this node, prune children (push to results stack).
    Done(Output),
    /// Replace this node with another and visit it (push to task stack).
    Replace(Ty),
}

/// A fold (catamorphism) over types.
///
/// The `Output` type determines what kind of fold this is:
/// - `Ty` for type transformations
/// - `()` for side-effect-only traversals
/// - Any other type for computing values
///
/// Nodes are visited in pre-order, left to right. `combine` for a node runs
/// after every node of its subtree has been visited and combined.
pub trait Fold {
    type Output;
    type Error;

    /// Called before processing a type's children.
    ///
    /// Return:
    /// - `FoldStep::Recurse` to process children and call `combine`
    /// - `FoldStep::RecurseInto(ty)` to process the children of `ty`
    /// - `FoldStep::Done(out)` to skip children and use `out` as result
    /// - `FoldStep::Replace(ty)` to visit `ty` instead
    fn visit(&mut self, ty: &Ty) -> Result<FoldStep<Self::Output>, Self::Error>;

    /// Called after all children have been processed.
    ///
    /// `children` yields the results for the children of `ty` in the order of
    /// [`TyKind::children`](crate::TyKind::children); it is empty for leaves.
    fn combine(
        &mut self,
        ty: &Ty,
        children: impl ExactSizeIterator<Item = Self::Output> + DoubleEndedIterator,
    ) -> Result<Self::Output, Self::Error>;
}

impl<F: Fold> Fold for &mut F {
    type Output = F::Output;
    type Error = F::Error;

    fn visit(&mut self, ty: &Ty) -> Result<FoldStep<Self::Output>, Self::Error> {
        (**self).visit(ty)
    }

    fn combine(
        &mut self,
        ty: &Ty,
        children: impl ExactSizeIterator<Item = Self::Output> + DoubleEndedIterator,
    ) -> Result<Self::Output, Self::Error> {
        (**self).combine(ty, children)
    }
}

enum Task {
    Visit(Ty),
    Combine(usize, Ty),
}

/// Drive a fold over a type tree using stack-based iteration.
///
/// This avoids stack overflow for deeply nested types. The first error
/// returned by the folder aborts the traversal.
pub fn drive_fold<F>(root: &Ty, mut folder: F) -> Result<F::Output, F::Error>
where
    F: Fold,
{
    let mut stack = vec![Task::Visit(root.clone())];
    let mut results: Vec<F::Output> = Vec::new();

    while let Some(task) = stack.pop() {
        match task {
            Task::Visit(ty) => match folder.visit(&ty)? {
                FoldStep::Done(out) => {
                    results.push(out);
                }
                FoldStep::Replace(new_ty) => {
                    stack.push(Task::Visit(new_ty));
                }
                FoldStep::Recurse => push_children(&mut stack, ty),
                FoldStep::RecurseInto(new_ty) => push_children(&mut stack, new_ty),
            },
            Task::Combine(count, ty) => {
                let start = results
                    .len()
                    .checked_sub(count)
                    .expect("Bug: result stack underflow");
                let children = results.drain(start..);
                let out = folder.combine(&ty, children)?;
                results.push(out);
            }
        }
    }

    debug_assert_eq!(
        results.len(),
        1,
        "Algorithm bug: expected exactly one result"
    );
    Ok(results.pop().expect("empty result stack"))
}

fn push_children(stack: &mut Vec<Task>, ty: Ty) {
    let children = ty.kind().children();
    let count = children.len();
    let visits: Vec<Task> = children
        .into_iter()
        .rev()
        .map(|child| Task::Visit(child.clone()))
        .collect();
    stack.push(Task::Combine(count, ty));
    stack.extend(visits);
}
