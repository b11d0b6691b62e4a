//! Type traversal utilities for folding and rewriting type structures.
//!
//! Everything here is driven by [`drive_fold`], which walks the tree with an
//! explicit task stack:
//! - [`Fold`]: the general bottom-up fold, for custom traversals
//! - [`everywhere_on_types`] and friends: pure and fallible rewrites, in
//!   bottom-up and top-down order
//! - [`everything_on_types`], [`everything_with_context_on_types`]: summaries
//!
//! All traversals reach every child listed by
//! [`TyKind::children`](crate::TyKind::children).
//!
//! # Example
//!
//! ```
//! use corvid_types::traversal::everywhere_on_types;
//! use corvid_types::{Ty, TyKind};
//!
//! // Replace every wildcard with a fresh unification variable.
//! let mut next = 0;
//! let ty = Ty::app(Ty::wildcard(), Ty::wildcard());
//! let filled = everywhere_on_types(&ty, |t| match t.kind() {
//!     TyKind::Wildcard => {
//!         next += 1;
//!         Ty::unknown(next)
//!     }
//!     _ => t,
//! });
//! assert_eq!(filled, Ty::app(Ty::unknown(1), Ty::unknown(2)));
//! ```

mod collect;
mod fold;
mod rewrite;

pub use collect::{everything_on_types, everything_with_context_on_types};
pub use fold::{Fold, FoldStep, drive_fold};
pub use rewrite::{
    everywhere_on_types, everywhere_on_types_m, everywhere_on_types_top_down,
    everywhere_on_types_top_down_m,
};
