use core::fmt;

use ecow::EcoString;
use serde::{Deserialize, Serialize};

/// Name of a type variable or binder.
pub type Name = EcoString;

/// Label of a row entry (record field or effect name).
pub type Label = EcoString;

/// A dotted module name such as `Data.Maybe`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(pub EcoString);

impl ModuleName {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModuleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A capitalized name: type constructor or class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProperName(pub EcoString);

impl ProperName {
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProperName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ProperName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A name optionally qualified by the module it originates from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Qualified<T> {
    pub module: Option<ModuleName>,
    pub name: T,
}

impl<T> Qualified<T> {
    pub fn new(module: Option<ModuleName>, name: T) -> Self {
        Self { module, name }
    }

    pub fn unqualified(name: T) -> Self {
        Self { module: None, name }
    }
}

/// Splits on the last `.`: `"Data.Maybe.Maybe"` is `Maybe` from `Data.Maybe`.
impl From<&str> for Qualified<ProperName> {
    fn from(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((module, name)) => Self::new(Some(module.into()), name.into()),
            None => Self::unqualified(path.into()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Qualified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}.{}", module, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Identifies one instantiation of a quantifier. Allocated by the checker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SkolemScope(pub u32);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

/// Source provenance of a skolem constant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    pub name: EcoString,
    pub start: SourcePos,
    pub end: SourcePos,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_from_dotted_path() {
        let q = Qualified::<ProperName>::from("Data.Maybe.Maybe");
        assert_eq!(q.module, Some(ModuleName::from("Data.Maybe")));
        assert_eq!(q.name, ProperName::from("Maybe"));
    }

    #[test]
    fn test_qualified_from_bare_name() {
        let q = Qualified::<ProperName>::from("Maybe");
        assert_eq!(q.module, None);
        assert_eq!(q.name.as_str(), "Maybe");
    }

    #[test]
    fn test_qualified_display() {
        use alloc::string::ToString;

        assert_eq!(Qualified::<ProperName>::from("Prim.Int").to_string(), "Prim.Int");
        assert_eq!(Qualified::<ProperName>::from("Int").to_string(), "Int");
    }
}
