//! Compact rendering for diagnostics and log fields.
//!
//! Every compound form is parenthesized; this is not the language's
//! pretty-printer.

use core::fmt;

use super::kind::Kind;
use super::ty::Ty;
use super::ty_kind::TyKind;

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.kind(), f)
    }
}

impl fmt::Display for TyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TyKind::Unknown(id) => write!(f, "?{id}"),
            TyKind::Var(name) => write!(f, "{name}"),
            TyKind::Wildcard => f.write_str("_"),
            TyKind::Constructor(name) => write!(f, "{name}"),
            TyKind::App(func, arg) => write!(f, "({func} {arg})"),
            TyKind::ForAll(name, body, _) => write!(f, "(forall {name}. {body})"),
            TyKind::Constrained(constraints, body) => {
                f.write_str("(")?;
                for constraint in constraints {
                    write!(f, "{}", constraint.class)?;
                    for arg in &constraint.args {
                        write!(f, " {arg}")?;
                    }
                    f.write_str(" => ")?;
                }
                write!(f, "{body})")
            }
            TyKind::Skolem(name, id, _, _) => write!(f, "{name}#{id}"),
            TyKind::RowEmpty => f.write_str("()"),
            TyKind::RowCons(..) => write_row(f, self),
            TyKind::Kinded(ty, kind) => write!(f, "({ty} :: {kind})"),
            TyKind::PrettyFunction(arg, ret) => write!(f, "({arg} -> {ret})"),
            TyKind::PrettyObject(row) => write!(f, "{{{row}}}"),
            TyKind::PrettyForAll(names, body) => {
                f.write_str("(forall")?;
                for name in names {
                    write!(f, " {name}")?;
                }
                write!(f, ". {body})")
            }
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, mut kind: &TyKind) -> fmt::Result {
    f.write_str("(")?;
    let mut first = true;
    while let TyKind::RowCons(label, head, tail) = kind {
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        write!(f, "{label} :: {head}")?;
        kind = tail.kind();
    }
    match kind {
        TyKind::RowEmpty => f.write_str(")"),
        tail => write!(f, " | {tail})"),
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Unknown(id) => write!(f, "?{id}"),
            Kind::Star => f.write_str("*"),
            Kind::Bang => f.write_str("!"),
            Kind::Row(kind) => write!(f, "(# {kind})"),
            Kind::Function(arg, ret) => write!(f, "({arg} -> {ret})"),
            Kind::Named(name) => write!(f, "{name}"),
        }
    }
}
