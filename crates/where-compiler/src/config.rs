use crate::{
    registry::{ClauseCompilerFn, ClauseRegistry},
    resolver::{ColumnResolver, NullResolver},
};
use std::{fmt, sync::Arc};

/// Construction options for [`WhereCompiler`](crate::WhereCompiler).
#[derive(Clone, Default)]
pub struct CompilerConfig {
    /// Resolver used by compiled predicates. Defaults to [`NullResolver`].
    pub column_resolver: Option<Arc<dyn ColumnResolver>>,
    /// Clause kinds the compiler understands. Defaults to the built-ins.
    pub registry: ClauseRegistry,
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column_resolver<R>(mut self, resolver: R) -> Self
    where
        R: ColumnResolver + 'static,
    {
        self.column_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn with_registry(mut self, registry: ClauseRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_clause(mut self, kind: &str, compiler: ClauseCompilerFn) -> Self {
        self.registry.register(kind, compiler);
        self
    }

    pub(crate) fn into_parts(self) -> (Arc<dyn ColumnResolver>, ClauseRegistry) {
        let resolver = self
            .column_resolver
            .unwrap_or_else(|| Arc::new(NullResolver));
        (resolver, self.registry)
    }
}

impl fmt::Debug for CompilerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilerConfig")
            .field("column_resolver", &self.column_resolver.is_some())
            .field("registry", &self.registry)
            .finish()
    }
}
