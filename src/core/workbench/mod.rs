use crate::core::engine;
use crate::core::operation::OperationRegistry;
use crate::core::recipe::Recipe;
use crate::detect::DetectionResult;
use uuid::Uuid;

/// Mutable session state behind the interactive surface: the input text, the
/// recipe being assembled, and the last detection result awaiting a verdict.
///
/// Single owner, single writer. `output()` recomputes the whole fold from the
/// full input on every call; there is no dependency tracking and no caching,
/// so any mutation is picked up by the next read.
pub struct Workbench {
    registry: OperationRegistry,
    input: String,
    recipe: Recipe,
    analysis: Option<DetectionResult>,
}

impl Workbench {
    pub fn new(registry: OperationRegistry) -> Self {
        Self {
            registry,
            input: String::new(),
            recipe: Recipe::new(),
            analysis: None,
        }
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn append_step(&mut self, operation_id: &str) -> Uuid {
        self.recipe.append(operation_id)
    }

    pub fn append_steps<I, S>(&mut self, operation_ids: I) -> Vec<Uuid>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipe.append_batch(operation_ids)
    }

    pub fn remove_step(&mut self, instance_id: Uuid) -> bool {
        self.recipe.remove(instance_id)
    }

    pub fn clear_recipe(&mut self) {
        self.recipe.clear();
    }

    pub fn analysis(&self) -> Option<&DetectionResult> {
        self.analysis.as_ref()
    }

    pub fn set_analysis(&mut self, analysis: DetectionResult) {
        self.analysis = Some(analysis);
    }

    /// Append the suggested operations as one batch and discard the analysis.
    /// Returns the new instance ids; empty when no analysis is pending.
    pub fn accept_suggestion(&mut self) -> Vec<Uuid> {
        match self.analysis.take() {
            Some(analysis) => self.recipe.append_batch(analysis.suggested_operations),
            None => Vec::new(),
        }
    }

    /// Discard the pending analysis without touching the recipe.
    pub fn dismiss_suggestion(&mut self) {
        self.analysis = None;
    }

    /// Recompute the output from the full input and the current recipe.
    pub fn output(&self) -> String {
        engine::run(&self.registry, &self.input, &self.recipe)
    }
}
