//! Condition catalog
//!
//! The eight conditions the inference rules can suggest, each with a short
//! plain-language description. Names double as catalog keys, so they are
//! kept exactly as displayed.

use serde::{Serialize, Serializer};
use std::fmt;

/// Description returned for any name missing from the catalog.
pub const FALLBACK_DESCRIPTION: &str = "Información no disponible";

/// A condition that may be suggested from a symptom pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    Chlamydia,
    Gonorrhea,
    Syphilis,
    GenitalHerpes,
    Hiv,
    AdvancedSyphilis,
    Epididymitis,
    Hpv,
}

impl Condition {
    /// Every condition, in catalog order.
    pub const ALL: [Condition; 8] = [
        Condition::Chlamydia,
        Condition::Gonorrhea,
        Condition::Syphilis,
        Condition::GenitalHerpes,
        Condition::Hiv,
        Condition::AdvancedSyphilis,
        Condition::Epididymitis,
        Condition::Hpv,
    ];

    /// Display name (also the catalog key)
    pub fn name(self) -> &'static str {
        match self {
            Condition::Chlamydia => "Clamidia",
            Condition::Gonorrhea => "Gonorrea",
            Condition::Syphilis => "Sífilis",
            Condition::GenitalHerpes => "Herpes genital",
            Condition::Hiv => "VIH",
            Condition::AdvancedSyphilis => "Sífilis avanzada",
            Condition::Epididymitis => "Epididimitis",
            Condition::Hpv => "VPH (Virus del Papiloma Humano)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Condition::Chlamydia => "Infección bacteriana muy común. Se transmite por contacto sexual sin protección. Muchas veces no presenta síntomas pero puede causar complicaciones graves si no se trata.",
            Condition::Gonorrhea => "Otra infección bacteriana común. Causa dolor al orinar y secreción genital. Se cura con antibióticos si se detecta a tiempo.",
            Condition::Syphilis => "Infección que avanza en varias etapas. Comienza con una úlcera indolora y puede progresar a síntomas más graves si no se trata.",
            Condition::GenitalHerpes => "Virus que causa ampollas dolorosas en los genitales. No tiene cura pero se puede controlar con medicamentos.",
            Condition::Hiv => "Virus que ataca el sistema inmunológico. Con tratamiento antirretroviral las personas pueden llevar una vida normal.",
            Condition::AdvancedSyphilis => "Etapa avanzada de la sífilis que puede afectar órganos internos.",
            Condition::Epididymitis => "Inflamación del epidídimo (conducto que almacena esperma). Causa dolor testicular.",
            Condition::Hpv => "Virus común que se previene con vacuna. Algunos tipos pueden causar cáncer.",
        }
    }

    /// Resolve a catalog key. Matching is exact (case and accents included).
    pub fn from_name(name: &str) -> Option<Condition> {
        Condition::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Get the description for a condition name, or [`FALLBACK_DESCRIPTION`].
///
/// # Examples
/// ```
/// use ets_infoplus::catalog::{describe_condition, FALLBACK_DESCRIPTION};
///
/// assert!(describe_condition("VIH").starts_with("Virus que ataca"));
/// assert_eq!(describe_condition("unknown-name"), FALLBACK_DESCRIPTION);
/// ```
pub fn describe_condition(name: &str) -> &'static str {
    Condition::from_name(name)
        .map(Condition::description)
        .unwrap_or(FALLBACK_DESCRIPTION)
}
