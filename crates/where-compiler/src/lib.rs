//! Compiles the `where` clauses of a query descriptor into a single boolean
//! predicate evaluated against values supplied by a column resolver.

pub mod clauses;
pub mod compare;
pub mod compiler;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod operator;
pub mod registry;
pub mod resolver;

pub use compiler::WhereCompiler;
pub use config::CompilerConfig;
pub use error::{CompileError, Result};
pub use evaluator::{CompiledClause, Connective, Evaluator, Predicate};
pub use operator::Operator;
pub use registry::{ClauseCompilerFn, ClauseRegistry};
pub use resolver::{ColumnRef, ColumnResolver, MapResolver, NullResolver, ResolverSlot};
