pub mod core;
pub mod query;

pub use crate::core::value::Value;
pub use crate::query::{Query, WhereClause};
