use alloc::boxed::Box;

use serde::{Deserialize, Serialize};

use super::names::{ProperName, Qualified};

/// The kind carried by a `Kinded` annotation.
///
/// Kinds are payload only here: nothing in this crate infers or checks them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", content = "contents")]
pub enum Kind {
    /// Unresolved kind placeholder.
    #[serde(rename = "KUnknown")]
    Unknown(u32),

    /// The kind of value types.
    Star,

    /// The kind of effects.
    Bang,

    /// Kind of rows whose entries have the given kind.
    Row(Box<Kind>),

    /// Kind-level function.
    #[serde(rename = "FunKind")]
    Function(Box<Kind>, Box<Kind>),

    /// A user-declared kind.
    #[serde(rename = "NamedKind")]
    Named(Qualified<ProperName>),
}

impl Kind {
    pub fn row(kind: Kind) -> Self {
        Kind::Row(Box::new(kind))
    }

    pub fn function(arg: Kind, ret: Kind) -> Self {
        Kind::Function(Box::new(arg), Box::new(ret))
    }
}
