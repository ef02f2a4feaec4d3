pub mod engine;
pub mod error;
pub mod operation;
pub mod operations;
pub mod recipe;
pub mod types;
pub mod workbench;

pub use error::AppError;
pub use operation::{Operation, OperationRegistry, OperationRegistryBuilder, TransformError};
pub use recipe::{Recipe, RecipeStep};
pub use types::{CategoryFilter, ErrorCategory, ErrorSeverity, OperationCategory};
pub use workbench::Workbench;
