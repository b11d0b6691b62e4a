//! Structural algorithms over types.
//!
//! - [`row`]: conversion between `RowCons` chains and label/type lists
//! - [`vars`]: free and used variable analysis, wildcard detection
//! - [`substitute`]: capture-avoiding substitution of named variables
//! - [`quantify`]: introducing and normalizing universal quantifiers
//!
//! Substitution and free-variable collection recurse on the call stack, one
//! frame per nesting level of the input.

pub mod quantify;
pub mod row;
pub mod substitute;
pub mod vars;

pub use quantify::{
    is_mono_type, move_quantifiers_to_front, quantify_over_free_variables, universally_quantify,
};
pub use row::{row_from_list, row_to_list};
pub use substitute::{Bindings, substitute_all, substitute_one};
pub use vars::{contains_wildcards, free_variables, used_variables};
