//! Corvid type representation.
//!
//! This crate provides the recursive type structure shared by every compiler
//! pass, together with the structural operations over it: row encoding,
//! capture-avoiding substitution, variable analysis, quantifier
//! normalization and a family of generic traversals.
//!
//! # Example
//!
//! ```
//! use corvid_types::{algo::substitute_one, ty, Ty};
//!
//! // forall b. a b
//! let target = ty!(forall b. (a b));
//!
//! // Substituting `a := b` renames the binder instead of capturing `b`.
//! let result = substitute_one("a", &Ty::var("b"), &target);
//! assert_eq!(result, ty!(forall b0. (b b0)));
//! ```

#![no_std]
extern crate alloc;

pub mod algo;
pub mod core;
mod macros;

pub use crate::core::traversal;
pub use crate::core::{
    Constraint, Kind, Label, ModuleName, Name, ProperName, Qualified, SkolemScope, SourcePos,
    SourceSpan, Ty, TyFlags, TyKind, TyNode,
};
