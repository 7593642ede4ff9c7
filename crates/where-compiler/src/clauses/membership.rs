use crate::{compare::loose_eq, error::Result, evaluator::Evaluator, resolver::ResolverSlot};
use model::{Query, Value, WhereClause};
use std::sync::Arc;

fn contains(values: &[Value], value: &Value) -> bool {
    values.iter().any(|candidate| loose_eq(value, candidate))
}

pub fn where_in(_query: &Query, clause: &WhereClause, slot: &ResolverSlot) -> Result<Evaluator> {
    let values: Arc<[Value]> = clause.values.clone().into();
    let column = slot.column(&clause.column);
    Ok(Evaluator::new(move || contains(&values, &column.get())))
}

pub fn where_not_in(
    _query: &Query,
    clause: &WhereClause,
    slot: &ResolverSlot,
) -> Result<Evaluator> {
    let values: Arc<[Value]> = clause.values.clone().into();
    let column = slot.column(&clause.column);
    Ok(Evaluator::new(move || !contains(&values, &column.get())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MapResolver;

    fn eval_both(value: impl Into<Value>, values: &[&str]) -> (bool, bool) {
        let slot = ResolverSlot::new(Arc::new(MapResolver::new().with("role", value)));
        let query = Query::new();
        let in_clause = WhereClause::in_list("role", values.iter().copied());
        let not_in_clause = WhereClause::not_in("role", values.iter().copied());
        let in_eval = where_in(&query, &in_clause, &slot).unwrap();
        let not_in_eval = where_not_in(&query, &not_in_clause, &slot).unwrap();
        (in_eval.evaluate(), not_in_eval.evaluate())
    }

    #[test]
    fn test_in_and_not_in() {
        assert_eq!(eval_both("editor", &["admin", "editor"]), (true, false));
        assert_eq!(eval_both("guest", &["admin", "editor"]), (false, true));
    }

    #[test]
    fn test_not_in_negates_in_for_edge_values() {
        for value in [Value::Null, Value::from(""), Value::Int(1), Value::from("1")] {
            let (is_in, not_in) = eval_both(value, &["1", ""]);
            assert_eq!(is_in, !not_in);
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(eval_both("admin", &[]), (false, true));
    }

    #[test]
    fn test_numeric_membership_is_loose() {
        assert_eq!(eval_both(2, &["1", "2"]), (true, false));
    }
}
