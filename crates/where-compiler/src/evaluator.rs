use std::{fmt, str::FromStr, sync::Arc};

/// Deferred boolean test for one clause.
#[derive(Clone)]
pub struct Evaluator(Arc<dyn Fn() -> bool + Send + Sync>);

impl Evaluator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Evaluator(Arc::new(f))
    }

    pub fn constant(value: bool) -> Self {
        Evaluator::new(move || value)
    }

    pub fn evaluate(&self) -> bool {
        (self.0)()
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Evaluator(..)")
    }
}

/// Logical operator joining a clause to the result of the clauses before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn combine(self, acc: bool, value: bool) -> bool {
        match self {
            Connective::And => acc && value,
            Connective::Or => acc || value,
        }
    }
}

impl FromStr for Connective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(Connective::And),
            "or" => Ok(Connective::Or),
            _ => Err(format!("Unsupported connective: {s}")),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => write!(f, "and"),
            Connective::Or => write!(f, "or"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledClause {
    pub connective: Connective,
    pub evaluator: Evaluator,
}

impl CompiledClause {
    pub fn new(connective: Connective, evaluator: Evaluator) -> Self {
        CompiledClause {
            connective,
            evaluator,
        }
    }
}

/// The compiled `where` condition of a whole query.
///
/// Invoking it never touches the compiler; it only reads column values
/// through the resolver, so it is as thread-safe as that resolver.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn() -> bool + Send + Sync>);

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Predicate(Arc::new(f))
    }

    /// Matches everything. The result of compiling a query without clauses.
    pub fn always() -> Self {
        Predicate::new(|| true)
    }

    pub fn evaluate(&self) -> bool {
        (self.0)()
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
