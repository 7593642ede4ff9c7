use model::Value;
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

/// Maps a column name to its current value.
///
/// This is the only way the compiler reaches data. Any closure
/// `Fn(&str) -> Value` is a resolver. Absent columns resolve to
/// [`Value::Null`].
pub trait ColumnResolver: Send + Sync {
    fn resolve(&self, column: &str) -> Value;
}

impl<F> ColumnResolver for F
where
    F: Fn(&str) -> Value + Send + Sync,
{
    fn resolve(&self, column: &str) -> Value {
        self(column)
    }
}

/// Resolves every column to null. Used when no resolver is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl ColumnResolver for NullResolver {
    fn resolve(&self, _column: &str) -> Value {
        Value::Null
    }
}

/// Resolves columns from an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    values: HashMap<String, Value>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: &str, value: impl Into<Value>) {
        self.values.insert(column.to_string(), value.into());
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MapResolver {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapResolver {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ColumnResolver for MapResolver {
    fn resolve(&self, column: &str) -> Value {
        self.values.get(column).cloned().unwrap_or(Value::Null)
    }
}

/// Shared, replaceable handle to the resolver of one compiler.
///
/// Every evaluator compiled by that compiler keeps a clone of the slot, so
/// replacing the resolver is seen by already compiled predicates on their
/// next invocation. Ordering between a replacement and an in-flight
/// evaluation on another thread is up to the caller.
#[derive(Clone)]
pub struct ResolverSlot {
    inner: Arc<RwLock<Arc<dyn ColumnResolver>>>,
}

impl ResolverSlot {
    pub fn new(resolver: Arc<dyn ColumnResolver>) -> Self {
        ResolverSlot {
            inner: Arc::new(RwLock::new(resolver)),
        }
    }

    pub fn replace(&self, resolver: Arc<dyn ColumnResolver>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = resolver;
    }

    pub fn current(&self) -> Arc<dyn ColumnResolver> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolve `column` with the resolver installed right now. The lock is
    /// released before the resolver runs.
    pub fn resolve(&self, column: &str) -> Value {
        let resolver = self.current();
        resolver.resolve(column)
    }

    pub fn column(&self, name: &str) -> ColumnRef {
        ColumnRef {
            name: Arc::from(name),
            slot: self.clone(),
        }
    }
}

impl Default for ResolverSlot {
    fn default() -> Self {
        ResolverSlot::new(Arc::new(NullResolver))
    }
}

impl fmt::Debug for ResolverSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverSlot").finish_non_exhaustive()
    }
}

/// Deferred read of one column. Each [`ColumnRef::get`] asks the slot's
/// current resolver again.
#[derive(Clone, Debug)]
pub struct ColumnRef {
    name: Arc<str>,
    slot: ResolverSlot,
}

impl ColumnRef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> Value {
        self.slot.resolve(&self.name)
    }
}
