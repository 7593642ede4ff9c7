//! Kind-specific clause compilers.
//!
//! Each compiler turns one [`WhereClause`](model::WhereClause) into an
//! [`Evaluator`](crate::Evaluator) that reads its column lazily through the
//! compiler's resolver slot.

pub mod basic;
pub mod membership;
pub mod nullness;
pub mod range;

pub use basic::where_basic;
pub use membership::{where_in, where_not_in};
pub use nullness::{where_not_null, where_null};
pub use range::{where_between, where_not_between};
