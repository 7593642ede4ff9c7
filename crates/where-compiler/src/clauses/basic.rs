use crate::{
    error::{CompileError, Result},
    evaluator::Evaluator,
    operator::Operator,
    resolver::ResolverSlot,
};
use model::{Query, WhereClause};
use tracing::debug;

/// `column <operator> value`. The operator is parsed here so an unknown one
/// fails the compile instead of yielding a predicate.
pub fn where_basic(_query: &Query, clause: &WhereClause, slot: &ResolverSlot) -> Result<Evaluator> {
    let raw = clause
        .operator
        .as_deref()
        .ok_or_else(|| CompileError::missing(clause, "operator"))?;

    let operator = raw
        .parse::<Operator>()
        .map_err(|_| CompileError::UnknownOperator {
            column: clause.column.clone(),
            operator: raw.to_string(),
        })?;

    let target = clause
        .value
        .clone()
        .ok_or_else(|| CompileError::missing(clause, "value"))?;

    debug!("Basic comparison: {} {} {}", clause.column, operator, target);
    let column = slot.column(&clause.column);
    Ok(Evaluator::new(move || operator.test(&column.get(), &target)))
}
