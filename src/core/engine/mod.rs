use crate::core::operation::OperationRegistry;
use crate::core::recipe::Recipe;
use tracing::{debug, warn};

/// Fold the recipe over the input text, left to right.
///
/// Steps whose operation id does not resolve are skipped as identity.
/// Recoverable step failures become the step output and the fold continues;
/// an unrecoverable fault aborts immediately and the returned string is the
/// synthetic error message, discarding any partial output. Every call folds
/// from the full input; nothing is memoized across edits.
pub fn run(registry: &OperationRegistry, input: &str, recipe: &Recipe) -> String {
    let mut current = input.to_string();
    for step in recipe.steps() {
        let Some(operation) = registry.get(&step.operation_id) else {
            debug!(operation_id = %step.operation_id, "skipping unresolved recipe step");
            continue;
        };
        match operation.apply(&current, &step.params) {
            Ok(next) => current = next,
            Err(err) if err.is_recoverable() => {
                debug!(operation_id = %step.operation_id, error = %err, "step failed, continuing with error text");
                current = err.to_string();
            }
            Err(fault) => {
                warn!(operation_id = %step.operation_id, error = %fault, "aborting run on operation fault");
                return format!("Error executing recipe: {}", fault);
            }
        }
    }
    current
}
