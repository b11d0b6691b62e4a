//! Core type system components.
//!
//! This module provides the fundamental building blocks for the type system:
//!
//! - [`Ty`] and [`TyNode`]: Shared type handles and their underlying nodes
//! - [`TyKind`]: The closed set of type variants
//! - [`TyFlags`]: Cached type properties for efficient queries
//! - [`Constraint`], [`Kind`] and the name types carried by the variants
//!
//! See the [`traversal`] submodule for the generic folds and rewrites.

mod constraint;
mod display;
mod flags;
mod kind;
mod names;
pub mod traversal;
mod ty;
mod ty_kind;

pub use constraint::Constraint;
pub use flags::TyFlags;
pub use kind::Kind;
pub use names::{
    Label, ModuleName, Name, ProperName, Qualified, SkolemScope, SourcePos, SourceSpan,
};
pub use ty::{Ty, TyNode};
pub use ty_kind::TyKind;
