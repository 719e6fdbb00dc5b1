use serde::{Deserialize, Serialize};
use crate::catalog::{describe_condition, Center, Condition, Symptom};

/// Result of evaluating a symptom selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Selected symptoms in selection order, without repeats
    pub selected_symptoms: Vec<SymptomLine>,
    /// Suggested conditions in inference order
    pub conditions: Vec<ConditionCard>,
    pub recommendation: String,
}

/// One symptom as shown in a list ("1. Ardor al orinar")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomLine {
    pub id: u32,
    pub label: String,
}

impl From<&Symptom> for SymptomLine {
    fn from(symptom: &Symptom) -> Self {
        Self {
            id: symptom.id,
            label: symptom.label.to_string(),
        }
    }
}

/// Suggested condition with its catalog description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionCard {
    pub name: String,
    pub description: String,
}

impl From<Condition> for ConditionCard {
    fn from(condition: Condition) -> Self {
        Self {
            name: condition.name().to_string(),
            description: describe_condition(condition.name()).to_string(),
        }
    }
}

/// Details of the center chosen in the city directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterCard {
    pub id: u32,
    pub city: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub services: String,
    pub advice: String,
}

impl CenterCard {
    pub(crate) fn new(center: &Center, advice: &str) -> Self {
        Self {
            id: center.id,
            city: center.city.to_string(),
            name: center.name.to_string(),
            address: center.address.to_string(),
            phone: center.phone.to_string(),
            services: center.services.to_string(),
            advice: advice.to_string(),
        }
    }
}

/// Symptom checklist shown before an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub title: String,
    pub prompt: String,
    pub symptoms: Vec<SymptomLine>,
}

/// City buttons of the center locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDirectory {
    pub title: String,
    pub prompt: String,
    pub cities: Vec<CityEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityEntry {
    /// Center id to request when this city is chosen
    pub center_id: u32,
    pub city: String,
}
