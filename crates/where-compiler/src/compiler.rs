use crate::{
    config::CompilerConfig,
    error::{CompileError, Result},
    evaluator::{CompiledClause, Connective, Predicate},
    registry::{ClauseCompilerFn, ClauseRegistry},
    resolver::{ColumnRef, ColumnResolver, ResolverSlot},
};
use model::Query;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Compiles the `where` clauses of a [`Query`] into a [`Predicate`].
///
/// Compilation checks every clause up front (kind, operator, connective) and
/// fails on the first bad one. The resulting predicate reads column values
/// only when invoked, through the resolver installed at that moment.
#[derive(Debug)]
pub struct WhereCompiler {
    resolver: ResolverSlot,
    registry: ClauseRegistry,
}

impl WhereCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        let (resolver, registry) = config.into_parts();
        WhereCompiler {
            resolver: ResolverSlot::new(resolver),
            registry,
        }
    }

    /// Replace the column resolver. Predicates already compiled by this
    /// compiler use the new resolver from their next invocation on.
    pub fn set_column_resolver<R>(&self, resolver: R) -> &Self
    where
        R: ColumnResolver + 'static,
    {
        self.set_shared_column_resolver(Arc::new(resolver))
    }

    pub fn set_shared_column_resolver(&self, resolver: Arc<dyn ColumnResolver>) -> &Self {
        self.resolver.replace(resolver);
        self
    }

    pub fn register(&mut self, kind: &str, compiler: ClauseCompilerFn) -> &mut Self {
        self.registry.register(kind, compiler);
        self
    }

    pub fn compile(&self, query: &Query) -> Result<Predicate> {
        self.compile_wheres(query)
    }

    pub fn compile_wheres(&self, query: &Query) -> Result<Predicate> {
        if query.wheres.is_empty() {
            debug!("Query has no where clauses, compiling to an unconditional match");
            return Ok(Predicate::always());
        }

        let clauses = self.compile_wheres_to_array(query)?;
        if clauses.is_empty() {
            return Ok(Predicate::always());
        }

        Ok(self.evaluate_where_clauses(clauses))
    }

    /// Compile each clause in order into a connective and an evaluator.
    pub fn compile_wheres_to_array(&self, query: &Query) -> Result<Vec<CompiledClause>> {
        let mut compiled = Vec::with_capacity(query.wheres.len());

        for (index, clause) in query.wheres.iter().enumerate() {
            // The first clause has nothing to join to; its connective is never read.
            let connective = if index == 0 {
                Ok(Connective::And)
            } else {
                clause.boolean.parse::<Connective>().map_err(|_| {
                    CompileError::UnknownConnective {
                        column: clause.column.clone(),
                        connective: clause.boolean.clone(),
                    }
                })
            };

            let entry = connective
                .and_then(|connective| {
                    self.registry
                        .compile(query, clause, &self.resolver)
                        .map(|evaluator| CompiledClause::new(connective, evaluator))
                })
                .inspect_err(|e| warn!("Failed to compile where clause: {}", e))?;

            debug!(
                "Compiled {} clause on '{}' joined by {}",
                clause.kind, clause.column, entry.connective
            );
            compiled.push(entry);
        }

        Ok(compiled)
    }

    /// Fold the compiled clauses left to right into one predicate.
    ///
    /// The first clause seeds the result and its connective is ignored. Every
    /// later clause is evaluated before being combined, so all evaluators run
    /// exactly once per invocation whatever the intermediate result.
    pub fn evaluate_where_clauses(&self, clauses: Vec<CompiledClause>) -> Predicate {
        let clauses: Arc<[CompiledClause]> = clauses.into();

        Predicate::new(move || {
            let mut result: Option<bool> = None;

            for clause in clauses.iter() {
                let value = clause.evaluator.evaluate();
                result = Some(match result {
                    None => value,
                    Some(acc) => clause.connective.combine(acc, value),
                });
            }

            trace!("Evaluated {} where clauses: {:?}", clauses.len(), result);
            result.unwrap_or(true)
        })
    }

    /// Deferred read of `name` through this compiler's resolver.
    pub fn column(&self, name: &str) -> ColumnRef {
        self.resolver.column(name)
    }
}

impl Default for WhereCompiler {
    fn default() -> Self {
        WhereCompiler::new(CompilerConfig::default())
    }
}
