//! Query descriptors as produced by a query builder.
//!
//! A [`Query`] only carries its `where` clauses; the compiler never needs
//! anything else from it.

pub mod clause;

pub use clause::{WhereClause, kind};

use crate::core::value::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wheres: Vec<WhereClause>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, clause: WhereClause) -> Self {
        self.wheres.push(clause);
        self
    }

    pub fn where_basic(self, column: &str, operator: &str, value: impl Into<Value>) -> Self {
        self.push(WhereClause::basic(column, operator, value))
    }

    pub fn or_where_basic(self, column: &str, operator: &str, value: impl Into<Value>) -> Self {
        self.push(WhereClause::basic(column, operator, value).or())
    }

    pub fn where_in<V: Into<Value>>(
        self,
        column: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.push(WhereClause::in_list(column, values))
    }

    pub fn or_where_in<V: Into<Value>>(
        self,
        column: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.push(WhereClause::in_list(column, values).or())
    }

    pub fn where_not_in<V: Into<Value>>(
        self,
        column: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.push(WhereClause::not_in(column, values))
    }

    pub fn where_null(self, column: &str) -> Self {
        self.push(WhereClause::null(column))
    }

    pub fn or_where_null(self, column: &str) -> Self {
        self.push(WhereClause::null(column).or())
    }

    pub fn where_not_null(self, column: &str) -> Self {
        self.push(WhereClause::not_null(column))
    }

    pub fn where_between(
        self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        self.push(WhereClause::between(column, low, high))
    }

    pub fn where_not_between(
        self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        self.push(WhereClause::not_between(column, low, high))
    }

    pub fn has_wheres(&self) -> bool {
        !self.wheres.is_empty()
    }
}
