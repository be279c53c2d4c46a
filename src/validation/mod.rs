pub mod engine;
pub mod errors;
pub mod models;
pub mod probes;
pub mod report;
pub mod rule;
pub mod rules;

pub use engine::StackValidator;
pub use errors::ValidationError;
pub use models::{has_failures, Check, Severity, StackOutputs, ValidationResult};
pub use report::{OverallStatus, Summary, ValidationReport};
pub use rule::{StaticRule, ValidationRule};
