use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::names::{ProperName, Qualified};
use super::ty::Ty;

/// A typeclass constraint: a class applied to type arguments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Constraint {
    pub class: Qualified<ProperName>,
    pub args: Vec<Ty>,
}

impl Constraint {
    pub fn new(class: impl Into<Qualified<ProperName>>, args: impl IntoIterator<Item = Ty>) -> Self {
        Self {
            class: class.into(),
            args: args.into_iter().collect(),
        }
    }
}
