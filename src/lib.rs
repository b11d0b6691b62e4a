//! Corvid - the type representation of a PureScript-style compiler
//!
//! # Overview
//!
//! This crate re-exports the type AST and its transformations from
//! `corvid-types` and adds a JSON wire format for persisting types in
//! compiled module metadata.
//!
//! # Quick Start
//!
//! ```
//! use corvid::{algo, codec, ty};
//!
//! // forall a. a -> a
//! let id = algo::quantify_over_free_variables(&ty!(a -> a));
//! assert!(algo::free_variables(&id).is_empty());
//!
//! let json = codec::encode(&id).unwrap();
//! assert_eq!(codec::decode(&json).unwrap(), id);
//! ```
//!
//! # Depth
//!
//! The traversal combinators run on an explicit stack and accept types of any
//! depth. Substitution, variable analysis, `Display` and serialization recurse
//! on the call stack; [`codec`] bounds the depth of everything it writes or
//! reads (see [`codec::CodecOptions`]).

pub mod codec;

pub use codec::{CodecError, CodecOptions};

// Re-export the type AST and everything built on it.
pub use corvid_types::{
    Constraint, Kind, Label, ModuleName, Name, ProperName, Qualified, SkolemScope, SourcePos,
    SourceSpan, Ty, TyFlags, TyKind, TyNode, algo, traversal, ty,
};
