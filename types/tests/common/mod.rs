//! Shared fixtures for type integration tests.

#![allow(dead_code)]

use corvid_types::{
    Constraint, Kind, ModuleName, Name, ProperName, Qualified, SkolemScope, SourcePos, SourceSpan,
    Ty, TyKind, ty,
};

/// One sample of every variant, each with distinct contents.
pub fn one_of_each_variant() -> Vec<Ty> {
    vec![
        Ty::unknown(7),
        ty!(a),
        ty!(_),
        Ty::constructor(Qualified::new(
            Some(ModuleName::from("Data.Maybe")),
            ProperName::from("Maybe"),
        )),
        ty!(f x),
        Ty::for_all("s", ty!(s), Some(SkolemScope(3))),
        Ty::constrained(
            vec![
                Constraint::new("Data.Show.Show", [ty!(a)]),
                Constraint::new("Data.Eq.Eq", [ty!(b), ty!(?1)]),
            ],
            ty!(a -> b),
        ),
        Ty::skolem(
            "t",
            11,
            SkolemScope(3),
            Some(SourceSpan {
                name: "src/Main.purs".into(),
                start: SourcePos { line: 4, column: 1 },
                end: SourcePos { line: 4, column: 18 },
            }),
        ),
        Ty::row_empty(),
        Ty::row_cons("x", ty!(@Int), Ty::row_cons("y", ty!(_), ty!(r))),
        Ty::kinded(ty!(f), Kind::function(Kind::row(Kind::Star), Kind::Star)),
        Ty::pretty_function(ty!(a), ty!(b)),
        Ty::pretty_object(Ty::row_cons("z", ty!(c), Ty::row_empty())),
        Ty::pretty_for_all([Name::from("p"), Name::from("q")], ty!(p q)),
    ]
}

/// A single type containing every variant at least once.
pub fn kitchen_sink() -> Ty {
    one_of_each_variant()
        .into_iter()
        .reduce(Ty::app)
        .expect("fixture is non-empty")
}

/// Variant name, for assertions about traversal order.
pub fn tag(ty: &Ty) -> &'static str {
    match ty.kind() {
        TyKind::Unknown(_) => "Unknown",
        TyKind::Var(_) => "Var",
        TyKind::Wildcard => "Wildcard",
        TyKind::Constructor(_) => "Constructor",
        TyKind::App(..) => "App",
        TyKind::ForAll(..) => "ForAll",
        TyKind::Constrained(..) => "Constrained",
        TyKind::Skolem(..) => "Skolem",
        TyKind::RowEmpty => "RowEmpty",
        TyKind::RowCons(..) => "RowCons",
        TyKind::Kinded(..) => "Kinded",
        TyKind::PrettyFunction(..) => "PrettyFunction",
        TyKind::PrettyObject(_) => "PrettyObject",
        TyKind::PrettyForAll(..) => "PrettyForAll",
    }
}
