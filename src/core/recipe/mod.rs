use serde_json::{Map, Value};
use uuid::Uuid;

/// One step of a recipe: a reference to a catalog operation plus the settings
/// scoped to this instance.
///
/// `instance_id` exists only for addressing (removal); it is generated fresh on
/// creation and never reused. The referenced `operation_id` may be unknown to
/// the registry, in which case the engine treats the step as identity.
#[derive(Debug, Clone)]
pub struct RecipeStep {
    pub instance_id: Uuid,
    pub operation_id: String,
    pub params: Value,
}

impl RecipeStep {
    fn new(operation_id: impl Into<String>) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            operation_id: operation_id.into(),
            params: Value::Object(Map::new()),
        }
    }
}

/// Ordered sequence of operation instances. Order is execution order.
///
/// Duplicate `operation_id` values are allowed and common; `instance_id`
/// values are unique within the recipe.
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    steps: Vec<RecipeStep>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one instance with empty params; returns its fresh instance id.
    pub fn append(&mut self, operation_id: &str) -> Uuid {
        let step = RecipeStep::new(operation_id);
        let id = step.instance_id;
        self.steps.push(step);
        id
    }

    /// Append one instance per id, in the given order, as a single update.
    ///
    /// Steps are materialized first and spliced in with one `extend`, so a
    /// reader holding `&self` can never observe a torn batch.
    pub fn append_batch<I, S>(&mut self, operation_ids: I) -> Vec<Uuid>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps: Vec<RecipeStep> = operation_ids.into_iter().map(RecipeStep::new).collect();
        let ids = steps.iter().map(|step| step.instance_id).collect();
        self.steps.extend(steps);
        ids
    }

    /// Remove exactly the instance with the given id; no-op when absent.
    pub fn remove(&mut self, instance_id: Uuid) -> bool {
        let before = self.steps.len();
        self.steps.retain(|step| step.instance_id != instance_id);
        self.steps.len() != before
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn steps(&self) -> &[RecipeStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
