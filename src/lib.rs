//! ETS InfoPlus
//!
//! Symptom checklist, condition suggestions and medical center directory
//! for the ETS (STI) information widget.
//!
//! Layout:
//! - `catalog/`: Static symptom, center and condition tables with id lookups
//! - `inference`: Fixed rule table mapping symptoms to candidate conditions
//! - `report/`: View models for evaluations and center selection
//! - `formatters/`: HTML, Markdown and JSON rendering
//! - `config`: Output format and log filter from the environment
//!
//! Suggestions are orientation only and never a diagnosis.

pub mod catalog;
pub mod inference;
pub mod report;
pub mod formatters;
pub mod config;

// Re-export commonly used types
pub use catalog::{
    describe_condition, find_center_by_id, find_symptom_by_id, Center, Condition, Symptom,
    FALLBACK_DESCRIPTION,
};
pub use inference::{infer_condition_names, infer_conditions, ALWAYS_SUGGESTED};
pub use report::{center_card, checklist, city_directory, evaluate, EvaluationReport, ReportError};
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
pub use config::{ConfigError, ReportConfig, ReportFormat};
