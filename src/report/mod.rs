pub mod types;
pub mod error;
pub mod questionnaire;
pub mod locator;

pub use types::{
    CenterCard, Checklist, CityDirectory, CityEntry, ConditionCard, EvaluationReport, SymptomLine,
};

pub use error::{ReportError, NO_SELECTION_MESSAGE};
pub use questionnaire::{checklist, evaluate, RECOMMENDATION};
pub use locator::{center_card, city_directory, CENTER_ADVICE};
