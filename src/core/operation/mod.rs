use crate::core::types::{CategoryFilter, OperationCategory};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// Failure raised by an operation's transform.
///
/// The two recoverable kinds render as stable, human-readable strings that the
/// engine substitutes for the step output, so a later step still receives text
/// to work on. `Fault` is the unrecoverable tier: it aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("Error: Invalid {0} input")]
    InvalidEncoding(&'static str),
    #[error("Error: Invalid {0}")]
    InvalidFormat(&'static str),
    #[error("{0}")]
    Fault(String),
}

impl TransformError {
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TransformError::Fault(_))
    }
}

/// Trait implemented by catalog operations.
///
/// Transforms must be pure: same input and params, same output, no observable
/// side effects on shared state. The `params` slot is reserved for
/// per-instance settings; every built-in operation currently ignores it.
pub trait Operation: Send + Sync + 'static {
    /// Stable identifier used in recipes and suggestions.
    fn id(&self) -> &'static str;

    /// Display name shown in catalog listings.
    fn name(&self) -> &'static str;

    /// One-line description of the transform.
    fn description(&self) -> &'static str;

    /// Catalog category.
    fn category(&self) -> OperationCategory;

    /// Apply the transform to the current text.
    fn apply(&self, input: &str, params: &Value) -> Result<String, TransformError>;
}

/// Builder used to register operations before the catalog is frozen.
pub struct OperationRegistryBuilder {
    operations: IndexMap<&'static str, Arc<dyn Operation>>,
}

impl Default for OperationRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationRegistryBuilder {
    pub fn new() -> Self {
        Self {
            operations: IndexMap::new(),
        }
    }

    pub fn register<T: Operation>(&mut self, operation: T) -> &mut Self {
        let id = operation.id();
        if self.operations.contains_key(id) {
            panic!("duplicate operation registered: {}", id);
        }
        self.operations.insert(id, Arc::new(operation));
        self
    }

    pub fn build(self) -> OperationRegistry {
        OperationRegistry {
            inner: Arc::new(self.operations),
        }
    }
}

/// Immutable operation catalog. Registration order is the display order.
#[derive(Clone)]
pub struct OperationRegistry {
    inner: Arc<IndexMap<&'static str, Arc<dyn Operation>>>,
}

impl OperationRegistry {
    pub fn builder() -> OperationRegistryBuilder {
        OperationRegistryBuilder::new()
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Operation>> {
        self.inner.get(id).cloned()
    }

    /// All operations in registration order.
    pub fn list(&self) -> impl Iterator<Item = &Arc<dyn Operation>> {
        self.inner.values()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Narrow the catalog by category and case-insensitive search term.
    ///
    /// The term matches against the operation name or its category label.
    /// Survivors keep registration order. Pure and synchronous, safe to call
    /// on every keystroke.
    pub fn filter(&self, search_term: &str, category: CategoryFilter) -> Vec<Arc<dyn Operation>> {
        let term = search_term.trim().to_lowercase();
        self.inner
            .values()
            .filter(|operation| category.matches(operation.category()))
            .filter(|operation| {
                term.is_empty()
                    || operation.name().to_lowercase().contains(&term)
                    || operation.category().label().to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }
}
