use crate::{
    compare::loose_cmp,
    error::{CompileError, Result},
    evaluator::Evaluator,
    resolver::ResolverSlot,
};
use model::{Query, Value, WhereClause};
use std::cmp::Ordering;

fn bounds(clause: &WhereClause) -> Result<(Value, Value)> {
    match clause.values.as_slice() {
        [low, high] => Ok((low.clone(), high.clone())),
        other => Err(CompileError::InvalidArity {
            kind: clause.kind.clone(),
            column: clause.column.clone(),
            expected: 2,
            found: other.len(),
        }),
    }
}

/// Inclusive on both ends. A value that does not order against a bound
/// (null, or a non-numeric string against numbers) is outside the range.
fn within(value: &Value, low: &Value, high: &Value) -> bool {
    matches!(
        loose_cmp(value, low),
        Some(Ordering::Greater | Ordering::Equal)
    ) && matches!(loose_cmp(value, high), Some(Ordering::Less | Ordering::Equal))
}

pub fn where_between(
    _query: &Query,
    clause: &WhereClause,
    slot: &ResolverSlot,
) -> Result<Evaluator> {
    let (low, high) = bounds(clause)?;
    let column = slot.column(&clause.column);
    Ok(Evaluator::new(move || within(&column.get(), &low, &high)))
}

pub fn where_not_between(
    _query: &Query,
    clause: &WhereClause,
    slot: &ResolverSlot,
) -> Result<Evaluator> {
    let (low, high) = bounds(clause)?;
    let column = slot.column(&clause.column);
    Ok(Evaluator::new(move || !within(&column.get(), &low, &high)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MapResolver;
    use std::sync::Arc;

    fn between(value: impl Into<Value>, low: i64, high: i64) -> bool {
        let slot = ResolverSlot::new(Arc::new(MapResolver::new().with("age", value)));
        where_between(&Query::new(), &WhereClause::between("age", low, high), &slot)
            .unwrap()
            .evaluate()
    }

    #[test]
    fn test_between_is_inclusive() {
        assert!(between(18, 18, 65));
        assert!(between(65, 18, 65));
        assert!(between(30, 18, 65));
        assert!(!between(17, 18, 65));
        assert!(!between(66, 18, 65));
    }

    #[test]
    fn test_between_null_is_outside() {
        assert!(!between(Value::Null, 18, 65));

        let slot = ResolverSlot::new(Arc::new(MapResolver::new()));
        let eval = where_not_between(&Query::new(), &WhereClause::not_between("age", 1, 2), &slot)
            .unwrap();
        assert!(eval.evaluate());
    }

    #[test]
    fn test_wrong_arity() {
        let mut clause = WhereClause::between("age", 1, 2);
        clause.values.push(Value::Int(3));
        let err = where_between(&Query::new(), &clause, &ResolverSlot::default()).unwrap_err();
        assert_eq!(
            err,
            CompileError::InvalidArity {
                kind: "Between".to_string(),
                column: "age".to_string(),
                expected: 2,
                found: 3,
            }
        );
    }
}
