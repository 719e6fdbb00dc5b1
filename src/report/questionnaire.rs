//! Symptom questionnaire
//!
//! Builds the checklist and turns a submitted selection into an
//! [`EvaluationReport`]. An empty selection is rejected here and never
//! reaches the inference engine.

use rustc_hash::FxHashSet;

use crate::catalog::{find_symptom_by_id, symptoms};
use crate::inference::infer_conditions;
use crate::report::error::ReportError;
use crate::report::types::{Checklist, ConditionCard, EvaluationReport, SymptomLine};

pub const CHECKLIST_TITLE: &str = "Cuestionario de Síntomas";
pub const CHECKLIST_PROMPT: &str = "Selecciona los síntomas que presentas:";

/// Disclaimer attached to every evaluation
pub const RECOMMENDATION: &str = "Esta evaluación es solo orientativa. Consulta con un profesional médico para un diagnóstico preciso.";

/// Checklist of every symptom, ascending by id
pub fn checklist() -> Checklist {
    Checklist {
        title: CHECKLIST_TITLE.to_string(),
        prompt: CHECKLIST_PROMPT.to_string(),
        symptoms: symptoms().iter().map(SymptomLine::from).collect(),
    }
}

/// Evaluate a submitted selection.
///
/// Selection order is kept for display and repeated ids are shown once.
///
/// # Errors
/// - [`ReportError::NoSymptomsSelected`] if `selected` is empty
/// - [`ReportError::UnknownSymptom`] for the first id not in the checklist
pub fn evaluate(selected: &[u32]) -> Result<EvaluationReport, ReportError> {
    if selected.is_empty() {
        tracing::debug!("Evaluation requested with no symptoms selected");
        return Err(ReportError::NoSymptomsSelected);
    }

    let mut seen: FxHashSet<u32> = FxHashSet::default();
    let mut selected_symptoms = Vec::with_capacity(selected.len());
    for &id in selected {
        if !seen.insert(id) {
            continue;
        }
        let symptom = find_symptom_by_id(id).ok_or(ReportError::UnknownSymptom(id))?;
        selected_symptoms.push(SymptomLine::from(symptom));
    }

    let conditions: Vec<ConditionCard> = infer_conditions(selected.iter().copied())
        .into_iter()
        .map(ConditionCard::from)
        .collect();

    tracing::debug!(
        "Evaluated {} symptoms -> {} conditions",
        selected_symptoms.len(),
        conditions.len()
    );

    Ok(EvaluationReport {
        selected_symptoms,
        conditions,
        recommendation: RECOMMENDATION.to_string(),
    })
}
