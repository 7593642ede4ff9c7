use crate::{
    clauses,
    error::{CompileError, Result},
    evaluator::Evaluator,
    resolver::ResolverSlot,
};
use model::{Query, WhereClause, query::kind};
use std::collections::HashMap;

/// Compiles one clause of a known kind into an evaluator.
pub type ClauseCompilerFn = fn(&Query, &WhereClause, &ResolverSlot) -> Result<Evaluator>;

/// Clause compilers keyed by the exact clause kind string.
#[derive(Clone)]
pub struct ClauseRegistry {
    compilers: HashMap<String, ClauseCompilerFn>,
}

impl ClauseRegistry {
    /// Create a registry holding the built-in clause kinds
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(kind::BASIC, clauses::where_basic);
        registry.register(kind::IN, clauses::where_in);
        registry.register(kind::NOT_IN, clauses::where_not_in);
        registry.register(kind::NULL, clauses::where_null);
        registry.register(kind::NOT_NULL, clauses::where_not_null);
        registry.register(kind::BETWEEN, clauses::where_between);
        registry.register(kind::NOT_BETWEEN, clauses::where_not_between);

        registry
    }

    pub fn empty() -> Self {
        ClauseRegistry {
            compilers: HashMap::new(),
        }
    }

    /// Adds a kind, or replaces the compiler of an existing one.
    pub fn register(&mut self, kind: &str, compiler: ClauseCompilerFn) {
        self.compilers.insert(kind.to_string(), compiler);
    }

    pub fn compile(
        &self,
        query: &Query,
        clause: &WhereClause,
        slot: &ResolverSlot,
    ) -> Result<Evaluator> {
        let compiler = self
            .compilers
            .get(&clause.kind)
            .ok_or_else(|| CompileError::UnknownClauseKind(clause.kind.clone()))?;

        compiler(query, clause, slot)
    }

    pub fn has_kind(&self, kind: &str) -> bool {
        self.compilers.contains_key(kind)
    }

    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.compilers.keys().map(|s| s.as_str()).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for ClauseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClauseRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClauseRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
