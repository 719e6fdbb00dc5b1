//! Condition inference
//!
//! Maps a set of selected symptom ids to candidate conditions using a fixed
//! rule table. Rules are independent: each one that has at least one trigger
//! in the selection contributes all of its conditions. The result is
//! deduplicated and keeps the order in which conditions were first added.
//!
//! NOTE: This is a simplified orientation aid and not a diagnosis.

use crate::catalog::Condition;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Condition appended to every result regardless of the selection.
///
/// HPV is very common and often asymptomatic, so it is always suggested
/// for prevention. Fires for an empty selection too; product owners should
/// confirm this stays the intended policy.
pub const ALWAYS_SUGGESTED: Condition = Condition::Hpv;

/// A trigger-set -> target-set mapping
#[derive(Debug, Clone, Copy)]
pub struct InferenceRule {
    /// Symptom ids, any one of which fires the rule
    pub triggers: &'static [u32],
    /// Conditions added when the rule fires
    pub adds: &'static [Condition],
}

impl InferenceRule {
    /// True if any trigger id is in the selection
    pub fn fires(&self, selected: &FxHashSet<u32>) -> bool {
        self.triggers.iter().any(|id| selected.contains(id))
    }
}

// ============================================================================
// RULE TABLE
// ============================================================================

static RULES: &[InferenceRule] = &[
    // Urinary / discharge cluster
    InferenceRule {
        triggers: &[1, 3, 6, 12],
        adds: &[Condition::Chlamydia, Condition::Gonorrhea],
    },
    // Sores / rash cluster
    InferenceRule {
        triggers: &[2, 8],
        adds: &[Condition::Syphilis, Condition::GenitalHerpes],
    },
    // Systemic
    InferenceRule {
        triggers: &[4, 10, 11, 7, 9],
        adds: &[Condition::Hiv],
    },
    InferenceRule {
        triggers: &[4, 10, 11],
        adds: &[Condition::AdvancedSyphilis],
    },
    // Localized
    InferenceRule {
        triggers: &[5],
        adds: &[Condition::Epididymitis],
    },
];

/// The fixed rule table, in evaluation order.
pub fn rules() -> &'static [InferenceRule] {
    RULES
}

/// Infer candidate conditions for a selection of symptom ids.
///
/// Total over any input: duplicates and order are irrelevant and unknown
/// ids match no rule. [`ALWAYS_SUGGESTED`] is always present.
///
/// # Examples
/// ```
/// use ets_infoplus::catalog::Condition;
/// use ets_infoplus::inference::infer_conditions;
///
/// assert_eq!(
///     infer_conditions([4]),
///     vec![Condition::Hiv, Condition::AdvancedSyphilis, Condition::Hpv]
/// );
/// assert_eq!(infer_conditions(Vec::<u32>::new()), vec![Condition::Hpv]);
/// ```
pub fn infer_conditions<I>(selected: I) -> Vec<Condition>
where
    I: IntoIterator<Item = u32>,
{
    let selected: FxHashSet<u32> = selected.into_iter().collect();

    // At most Condition::ALL.len() entries, so this never spills
    let mut found: SmallVec<[Condition; 8]> = SmallVec::new();

    for rule in RULES.iter().filter(|rule| rule.fires(&selected)) {
        for &condition in rule.adds {
            if !found.contains(&condition) {
                found.push(condition);
            }
        }
    }

    if !found.contains(&ALWAYS_SUGGESTED) {
        found.push(ALWAYS_SUGGESTED);
    }

    found.into_vec()
}

/// Same as [`infer_conditions`], returning display names.
pub fn infer_condition_names<I>(selected: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = u32>,
{
    infer_conditions(selected)
        .into_iter()
        .map(Condition::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{describe_condition, find_symptom_by_id, FALLBACK_DESCRIPTION};
    use crate::catalog::Condition::*;

    /// Every trigger must name a real symptom
    #[test]
    fn test_rule_triggers_are_known_symptoms() {
        for (i, rule) in RULES.iter().enumerate() {
            for &id in rule.triggers {
                assert!(
                    find_symptom_by_id(id).is_some(),
                    "rule {} references unknown symptom id {}",
                    i,
                    id
                );
            }
        }
    }

    #[test]
    fn test_rule_targets_are_catalogued() {
        for rule in RULES {
            for condition in rule.adds {
                assert_ne!(describe_condition(condition.name()), FALLBACK_DESCRIPTION);
            }
        }
    }

    #[test]
    fn test_single_symptom_urinary() {
        assert_eq!(infer_conditions([1]), vec![Chlamydia, Gonorrhea, Hpv]);
    }

    #[test]
    fn test_sores_and_pelvic_pain() {
        assert_eq!(
            infer_conditions([2, 5]),
            vec![Syphilis, GenitalHerpes, Epididymitis, Hpv]
        );
    }

    #[test]
    fn test_fever_fires_two_rules() {
        assert_eq!(infer_conditions([4]), vec![Hiv, AdvancedSyphilis, Hpv]);
    }

    #[test]
    fn test_joint_pain_only_hiv() {
        // 7 is in the systemic rule but not the advanced-stage one
        assert_eq!(infer_conditions([7]), vec![Hiv, Hpv]);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(infer_conditions(Vec::<u32>::new()), vec![Hpv]);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        assert_eq!(infer_conditions([0, 13, 999]), vec![Hpv]);
        assert_eq!(infer_conditions([999, 5]), vec![Epididymitis, Hpv]);
    }

    #[test]
    fn test_overlapping_rules_dedup() {
        // 4, 10 and 11 all fire the same two rules
        assert_eq!(infer_conditions([4, 10, 11]), vec![Hiv, AdvancedSyphilis, Hpv]);
        assert_eq!(infer_conditions([1, 1, 3, 6, 12]), vec![Chlamydia, Gonorrhea, Hpv]);
    }

    #[test]
    fn test_all_symptoms() {
        let all: Vec<u32> = (1..=12).collect();
        assert_eq!(
            infer_conditions(all),
            vec![
                Chlamydia,
                Gonorrhea,
                Syphilis,
                GenitalHerpes,
                Hiv,
                AdvancedSyphilis,
                Epididymitis,
                Hpv,
            ]
        );
    }

    #[test]
    fn test_order_follows_rules_not_input() {
        assert_eq!(infer_conditions([5, 1]), infer_conditions([1, 5]));
    }

    #[test]
    fn test_condition_names() {
        assert_eq!(
            infer_condition_names([1]),
            vec!["Clamidia", "Gonorrea", "VPH (Virus del Papiloma Humano)"]
        );
    }
}
