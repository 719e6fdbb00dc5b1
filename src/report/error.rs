use thiserror::Error;

/// Shown when an evaluation is requested with nothing selected
pub const NO_SELECTION_MESSAGE: &str = "Por favor selecciona al menos un síntoma para evaluar.";

/// Errors raised while assembling a report.
///
/// The inference engine itself never fails; these cover the requests a
/// front end should reject before (or instead of) rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("{}", NO_SELECTION_MESSAGE)]
    NoSymptomsSelected,

    #[error("unknown symptom id {0}")]
    UnknownSymptom(u32),

    #[error("unknown center id {0}")]
    UnknownCenter(u32),
}
