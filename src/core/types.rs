use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category assigned to every registered operation.
///
/// The set is closed: adding a category is a source change, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationCategory {
    Encoding,
    Hashing,
    Encryption,
    DataFormat,
    Utils,
}

impl OperationCategory {
    /// Human-facing label, also the value matched by category search terms.
    pub fn label(&self) -> &'static str {
        match self {
            OperationCategory::Encoding => "Encoding",
            OperationCategory::Hashing => "Hashing",
            OperationCategory::Encryption => "Encryption",
            OperationCategory::DataFormat => "Data Format",
            OperationCategory::Utils => "Utils",
        }
    }

    pub fn all() -> [OperationCategory; 5] {
        [
            OperationCategory::Encoding,
            OperationCategory::Hashing,
            OperationCategory::Encryption,
            OperationCategory::DataFormat,
            OperationCategory::Utils,
        ]
    }
}

impl std::fmt::Display for OperationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for OperationCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|category| category.label().to_lowercase() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown category '{}'; supported values are {}",
                    value,
                    Self::all().map(|c| c.label()).join(", ")
                )
            })
    }
}

/// Category predicate applied when narrowing the operation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(OperationCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: OperationCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        OperationCategory::from_str(value).map(CategoryFilter::Only)
    }
}

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ValidationError,
    ConfigError,
    IoError,
    DetectionError,
    InternalError,
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    Warning,
    Info,
    Debug,
}
