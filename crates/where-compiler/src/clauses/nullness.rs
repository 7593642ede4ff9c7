use crate::{error::Result, evaluator::Evaluator, resolver::ResolverSlot};
use model::{Query, WhereClause};

/// Null and the empty string both count as "no value".
pub fn where_null(_query: &Query, clause: &WhereClause, slot: &ResolverSlot) -> Result<Evaluator> {
    let column = slot.column(&clause.column);
    Ok(Evaluator::new(move || column.get().is_empty()))
}

pub fn where_not_null(
    _query: &Query,
    clause: &WhereClause,
    slot: &ResolverSlot,
) -> Result<Evaluator> {
    let column = slot.column(&clause.column);
    Ok(Evaluator::new(move || !column.get().is_empty()))
}
