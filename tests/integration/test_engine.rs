use novachef::core::engine;
use novachef::core::operations::{builtin_registry, register_builtins};
use novachef::core::{
    Operation, OperationCategory, OperationRegistry, Recipe, TransformError, Workbench,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingOp {
    id: &'static str,
    calls: Arc<AtomicUsize>,
}

impl Operation for CountingOp {
    fn id(&self) -> &'static str {
        self.id
    }
    fn name(&self) -> &'static str {
        "Counting"
    }
    fn description(&self) -> &'static str {
        "counts invocations"
    }
    fn category(&self) -> OperationCategory {
        OperationCategory::Utils
    }
    fn apply(&self, input: &str, _params: &Value) -> Result<String, TransformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(input.to_string())
    }
}

struct FaultOp;

impl Operation for FaultOp {
    fn id(&self) -> &'static str {
        "always-faults"
    }
    fn name(&self) -> &'static str {
        "Always Faults"
    }
    fn description(&self) -> &'static str {
        "raises an unrecoverable fault"
    }
    fn category(&self) -> OperationCategory {
        OperationCategory::Utils
    }
    fn apply(&self, _input: &str, _params: &Value) -> Result<String, TransformError> {
        Err(TransformError::Fault("synthetic failure".to_string()))
    }
}

#[test]
fn test_empty_recipe_returns_input_unchanged() {
    let registry = builtin_registry();
    for input in ["", "hello", "é 漢字"] {
        assert_eq!(engine::run(&registry, input, &Recipe::new()), input);
    }
}

#[test]
fn test_unresolved_step_is_skipped_and_run_completes() {
    let registry = builtin_registry();
    let mut recipe = Recipe::new();
    recipe.append("no-such-operation");
    recipe.append("to-uppercase");
    assert_eq!(engine::run(&registry, "abc", &recipe), "ABC");
}

#[test]
fn test_incremental_recipe_scenario() {
    let registry = builtin_registry();
    let mut recipe = Recipe::new();

    recipe.append("base64-decode");
    assert_eq!(engine::run(&registry, "aGVsbG8=", &recipe), "hello");

    recipe.append("to-uppercase");
    assert_eq!(engine::run(&registry, "aGVsbG8=", &recipe), "HELLO");

    recipe.append("sha256");
    assert_eq!(
        engine::run(&registry, "aGVsbG8=", &recipe),
        "3733cd977ff8eb18b987357e22ced99f46097f31ecb239e878ae63760e83e4d5"
    );
}

#[test]
fn test_recoverable_error_text_feeds_later_steps() {
    let registry = builtin_registry();
    let mut recipe = Recipe::new();
    recipe.append("base64-decode");
    assert_eq!(
        engine::run(&registry, "not base64 !!", &recipe),
        "Error: Invalid Base64 input"
    );

    recipe.append("to-lowercase");
    assert_eq!(
        engine::run(&registry, "not base64 !!", &recipe),
        "error: invalid base64 input"
    );
}

#[test]
fn test_fault_aborts_and_later_steps_never_run() {
    let before_calls = Arc::new(AtomicUsize::new(0));
    let after_calls = Arc::new(AtomicUsize::new(0));

    let mut builder = OperationRegistry::builder();
    register_builtins(&mut builder);
    builder.register(CountingOp {
        id: "count-before",
        calls: Arc::clone(&before_calls),
    });
    builder.register(FaultOp);
    builder.register(CountingOp {
        id: "count-after",
        calls: Arc::clone(&after_calls),
    });
    let registry = builder.build();

    let mut recipe = Recipe::new();
    recipe.append("count-before");
    recipe.append("always-faults");
    recipe.append("count-after");

    let output = engine::run(&registry, "payload", &recipe);
    assert_eq!(output, "Error executing recipe: synthetic failure");
    assert_eq!(before_calls.load(Ordering::SeqCst), 1);
    assert_eq!(after_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_every_run_folds_from_the_full_input() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut builder = OperationRegistry::builder();
    register_builtins(&mut builder);
    builder.register(CountingOp {
        id: "count",
        calls: Arc::clone(&calls),
    });
    let registry = builder.build();

    let mut recipe = Recipe::new();
    recipe.append("count");
    engine::run(&registry, "a", &recipe);
    engine::run(&registry, "a", &recipe);
    // No memoization: the unchanged input is still reprocessed.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_workbench_recomputes_after_every_mutation() {
    let mut workbench = Workbench::new(builtin_registry());
    workbench.set_input("aGVsbG8=");
    assert_eq!(workbench.output(), "aGVsbG8=");

    let decode = workbench.append_step("base64-decode");
    assert_eq!(workbench.output(), "hello");

    workbench.append_step("to-uppercase");
    assert_eq!(workbench.output(), "HELLO");

    workbench.remove_step(decode);
    assert_eq!(workbench.output(), "AGVSBG8=");

    workbench.clear_recipe();
    assert_eq!(workbench.output(), "aGVsbG8=");
}
