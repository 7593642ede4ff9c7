#![allow(dead_code)]

use model::{Query, Value};
use std::{
    collections::HashMap,
    sync::{
        Arc, Once,
        atomic::{AtomicUsize, Ordering},
    },
};
use where_compiler::ColumnResolver;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn query(json: serde_json::Value) -> Query {
    serde_json::from_value(json).expect("valid query descriptor")
}

/// Map-backed resolver that counts every lookup.
#[derive(Clone, Default)]
pub struct CountingResolver {
    values: HashMap<String, Value>,
    calls: Arc<AtomicUsize>,
}

impl CountingResolver {
    pub fn new<V: Into<Value>>(pairs: impl IntoIterator<Item = (&'static str, V)>) -> Self {
        CountingResolver {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ColumnResolver for CountingResolver {
    fn resolve(&self, column: &str) -> Value {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.values.get(column).cloned().unwrap_or(Value::Null)
    }
}
