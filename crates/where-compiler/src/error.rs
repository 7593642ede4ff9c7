use model::WhereClause;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("No compiler registered for clause kind '{0}'")]
    UnknownClauseKind(String),

    #[error("Unknown comparison operator '{operator}' on column '{column}'")]
    UnknownOperator { column: String, operator: String },

    #[error("Unknown connective '{connective}' on column '{column}', expected 'and' or 'or'")]
    UnknownConnective { column: String, connective: String },

    #[error("{kind} clause on column '{column}' is missing '{field}'")]
    MissingField {
        kind: String,
        column: String,
        field: &'static str,
    },

    #[error("{kind} clause on column '{column}' expects {expected} values, got {found}")]
    InvalidArity {
        kind: String,
        column: String,
        expected: usize,
        found: usize,
    },
}

impl CompileError {
    pub(crate) fn missing(clause: &WhereClause, field: &'static str) -> Self {
        CompileError::MissingField {
            kind: clause.kind.clone(),
            column: clause.column.clone(),
            field,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
