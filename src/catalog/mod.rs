//! Static catalog tables
//!
//! Contains the load-time constant data the widget is built on:
//! - Symptoms: the checklist, keyed by id
//! - Centers: the city directory, keyed by id
//! - Conditions: names and descriptions, keyed by name

pub mod symptoms;
pub mod centers;
pub mod conditions;

pub use symptoms::{Symptom, symptoms, find_symptom_by_id};
pub use centers::{Center, centers, find_center_by_id};
pub use conditions::{Condition, describe_condition, FALLBACK_DESCRIPTION};
