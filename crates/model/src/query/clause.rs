use crate::core::value::Value;
use serde::{Deserialize, Deserializer, Serialize};

/// Clause kind discriminators understood by the built-in compiler.
pub mod kind {
    pub const BASIC: &str = "Basic";
    pub const IN: &str = "In";
    pub const NOT_IN: &str = "NotIn";
    pub const NULL: &str = "Null";
    pub const NOT_NULL: &str = "NotNull";
    pub const BETWEEN: &str = "Between";
    pub const NOT_BETWEEN: &str = "NotBetween";
}

pub const AND: &str = "and";
pub const OR: &str = "or";

/// One filter condition of a query.
///
/// `boolean` joins this clause to the ones before it. It is kept as the raw
/// builder string and only interpreted by the compiler. On the first clause
/// of a query it carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereClause {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_boolean")]
    pub boolean: String,
    pub column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Value>,
}

fn default_boolean() -> String {
    AND.to_string()
}

// `"value": null` is a comparison against null, not a missing value.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl WhereClause {
    pub fn new(kind: &str, column: &str) -> Self {
        WhereClause {
            kind: kind.to_string(),
            boolean: default_boolean(),
            column: column.to_string(),
            operator: None,
            value: None,
            values: Vec::new(),
        }
    }

    pub fn basic(column: &str, operator: &str, value: impl Into<Value>) -> Self {
        WhereClause {
            operator: Some(operator.to_string()),
            value: Some(value.into()),
            ..Self::new(kind::BASIC, column)
        }
    }

    pub fn in_list<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Self {
        WhereClause {
            values: values.into_iter().map(Into::into).collect(),
            ..Self::new(kind::IN, column)
        }
    }

    pub fn not_in<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Self {
        WhereClause {
            values: values.into_iter().map(Into::into).collect(),
            ..Self::new(kind::NOT_IN, column)
        }
    }

    pub fn null(column: &str) -> Self {
        Self::new(kind::NULL, column)
    }

    pub fn not_null(column: &str) -> Self {
        Self::new(kind::NOT_NULL, column)
    }

    pub fn between(column: &str, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        WhereClause {
            values: vec![low.into(), high.into()],
            ..Self::new(kind::BETWEEN, column)
        }
    }

    pub fn not_between(column: &str, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        WhereClause {
            values: vec![low.into(), high.into()],
            ..Self::new(kind::NOT_BETWEEN, column)
        }
    }

    /// Join this clause with OR instead of AND.
    pub fn or(mut self) -> Self {
        self.boolean = OR.to_string();
        self
    }

    pub fn with_boolean(mut self, boolean: &str) -> Self {
        self.boolean = boolean.to_string();
        self
    }
}
