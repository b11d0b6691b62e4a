use alloc::vec::Vec;

use crate::core::{Label, Ty, TyKind};

/// Split a row into its entries, in chain order, and its tail.
///
/// The tail is the first node that is not a `RowCons`: `RowEmpty` for a
/// closed row, a variable for an open one. Any other node is returned as the
/// tail unchanged.
pub fn row_to_list(row: &Ty) -> (Vec<(Label, Ty)>, Ty) {
    let mut fields = Vec::new();
    let mut current = row;
    while let TyKind::RowCons(label, head, tail) = current.kind() {
        fields.push((label.clone(), head.clone()));
        current = tail;
    }
    (fields, current.clone())
}

/// Rebuild a row from its entries and tail. Inverse of [`row_to_list`].
pub fn row_from_list(fields: Vec<(Label, Ty)>, tail: Ty) -> Ty {
    fields
        .into_iter()
        .rev()
        .fold(tail, |rest, (label, head)| Ty::row_cons(label, head, rest))
}
