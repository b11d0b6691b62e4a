use bitflags::bitflags;

bitflags! {
    /// Flags indicating various properties of a type.
    ///
    /// These flags are computed once when a node is allocated and cached
    /// for efficient queries. A node's flags are its own property united with
    /// the flags of all of its children, so a clear bit proves that the whole
    /// subtree lacks the property and it can be skipped.
    ///
    /// Flags are not part of a type's identity: equality, ordering and
    /// hashing ignore them.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TyFlags: u8 {
        /// Contains a named type variable (`Var`).
        const HAS_VARS = 1;
        /// Contains a `Wildcard`.
        const HAS_WILDCARDS = 1 << 1;
        /// Contains a unification variable (`Unknown`).
        const HAS_UNKNOWNS = 1 << 2;
        /// Contains a `Skolem` constant.
        const HAS_SKOLEMS = 1 << 3;
        /// Contains a quantifier (`ForAll` or `PrettyForAll`).
        const HAS_QUANTIFIERS = 1 << 4;
    }
}
