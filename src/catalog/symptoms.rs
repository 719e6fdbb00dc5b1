//! Symptom checklist
//!
//! The twelve selectable symptoms, ordered by id. Ids are stable: the
//! inference rules refer to them directly.

use serde::Serialize;

/// A selectable checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub id: u32,
    pub label: &'static str,
}

// ============================================================================
// EMBEDDED SYMPTOM DATA
// ============================================================================

static SYMPTOMS: &[Symptom] = &[
    Symptom { id: 1, label: "Ardor al orinar" },
    Symptom { id: 2, label: "Llagas o heridas en la zona íntima" },
    Symptom { id: 3, label: "Flujo anormal o mal olor" },
    Symptom { id: 4, label: "Fiebre sin explicación" },
    Symptom { id: 5, label: "Dolor en la zona pélvica o testicular" },
    Symptom { id: 6, label: "Sangrado anormal" },
    Symptom { id: 7, label: "Dolor o inflamación en las articulaciones" },
    Symptom { id: 8, label: "Erupciones en la piel o llagas en otras partes del cuerpo" },
    Symptom { id: 9, label: "Ganglios inflamados" },
    Symptom { id: 10, label: "Cansancio extremo o pérdida de peso" },
    Symptom { id: 11, label: "Sudoraciones nocturnas" },
    Symptom { id: 12, label: "Náuseas, vómito o diarrea persistente" },
];

/// All symptoms in display order (ascending id).
pub fn symptoms() -> &'static [Symptom] {
    SYMPTOMS
}

/// Find a symptom by id.
///
/// # Examples
/// ```
/// use ets_infoplus::catalog::find_symptom_by_id;
///
/// assert_eq!(find_symptom_by_id(1).map(|s| s.label), Some("Ardor al orinar"));
/// assert!(find_symptom_by_id(999).is_none());
/// ```
pub fn find_symptom_by_id(id: u32) -> Option<&'static Symptom> {
    SYMPTOMS.iter().find(|s| s.id == id)
}
