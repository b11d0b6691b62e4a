//! Type construction macros for ergonomic type building.
//!
//! # Example
//!
//! ```
//! use corvid_types::{ty, Ty};
//!
//! // Variables, constructors, wildcards and unknowns
//! let a = ty!(a);
//! let maybe = ty!(@Maybe);
//! let hole = ty!(_);
//! let unknown = ty!(?3);
//!
//! // Application is juxtaposition, the arrow is right associative
//! let map = ty!((a -> b) -> (@List a) -> (@List b));
//!
//! // Quantifiers
//! let id = ty!(forall a. a -> a);
//! assert_eq!(id, Ty::for_all("a", Ty::function(Ty::var("a"), Ty::var("a")), None));
//! ```

/// Macro for constructing types with a concise syntax.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `a` | Type variable `a` |
/// | `@Maybe` | Unqualified type constructor `Maybe` |
/// | `_` | Wildcard |
/// | `?3` | Unification variable 3 |
/// | `f x y` | Application, left associative |
/// | `A -> B` | Function type (`Prim.Function A B`), right associative |
/// | `forall a b. T` | Nested quantifiers, `a` outermost |
/// | `(T)` | Grouping |
///
/// Arrow operands and application arguments are single token trees (or an
/// `@Con` / `?n` pair), so compound operands need parentheses: `(f a) -> b`.
#[macro_export]
macro_rules! ty {
    // === Application (internal) ===

    (@app $acc:expr ; ) => { $acc };
    (@app $acc:expr ; @ $con:ident $($rest:tt)*) => {
        $crate::ty!(@app $crate::Ty::app($acc, $crate::ty!(@ $con)) ; $($rest)*)
    };
    (@app $acc:expr ; ? $id:literal $($rest:tt)*) => {
        $crate::ty!(@app $crate::Ty::app($acc, $crate::ty!(? $id)) ; $($rest)*)
    };
    (@app $acc:expr ; $arg:tt $($rest:tt)*) => {
        $crate::ty!(@app $crate::Ty::app($acc, $crate::ty!($arg)) ; $($rest)*)
    };

    // === Quantifiers ===

    (forall $($var:ident)+ . $($body:tt)+) => {
        $crate::algo::universally_quantify(
            [$(stringify!($var)),+],
            $crate::ty!($($body)+),
        )
    };

    // === Function arrow ===

    ($arg:tt -> $($ret:tt)+) => {
        $crate::Ty::function($crate::ty!($arg), $crate::ty!($($ret)+))
    };
    (@ $con:ident -> $($ret:tt)+) => {
        $crate::Ty::function($crate::ty!(@ $con), $crate::ty!($($ret)+))
    };
    (? $id:literal -> $($ret:tt)+) => {
        $crate::Ty::function($crate::ty!(? $id), $crate::ty!($($ret)+))
    };

    // === Leaves ===

    (_) => { $crate::Ty::wildcard() };
    (? $id:literal) => { $crate::Ty::unknown($id) };
    (@ $con:ident) => { $crate::Ty::constructor(stringify!($con)) };
    ($var:ident) => { $crate::Ty::var(stringify!($var)) };
    (( $($inner:tt)+ )) => { $crate::ty!($($inner)+) };

    // === Application ===

    (@ $con:ident $($arg:tt)+) => {
        $crate::ty!(@app $crate::ty!(@ $con) ; $($arg)+)
    };
    (? $id:literal $($arg:tt)+) => {
        $crate::ty!(@app $crate::ty!(? $id) ; $($arg)+)
    };
    ($head:tt $($arg:tt)+) => {
        $crate::ty!(@app $crate::ty!($head) ; $($arg)+)
    };
}
