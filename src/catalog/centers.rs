//! Medical center directory
//!
//! One record per city. The phone field is free text: most centers ask
//! to be contacted ("Consultar") rather than publishing a number.

use serde::Serialize;

/// A medical facility with contact and service information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Center {
    pub id: u32,
    pub city: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub services: &'static str,
}

// ============================================================================
// EMBEDDED CENTER DATA
// ============================================================================

static CENTERS: &[Center] = &[
    Center {
        id: 1,
        city: "Bogotá",
        name: "AHF Colombia",
        address: "Carrera 40 #94-75",
        phone: "+57 310 804 8187",
        services: "Pruebas rápidas de VIH, asesoramiento",
    },
    Center {
        id: 2,
        city: "Medellín",
        name: "Centro Diversidad Sexual",
        address: "Centro de la ciudad",
        phone: "Consultar",
        services: "Atención integral en salud sexual",
    },
    Center {
        id: 3,
        city: "Cali",
        name: "Corporación Viviendo",
        address: "Zona sur",
        phone: "Consultar",
        services: "Pruebas y tratamiento de ETS",
    },
    Center {
        id: 4,
        city: "Cartagena",
        name: "Vivir Bien IPS",
        address: "Centro histórico",
        phone: "Consultar",
        services: "Atención médica especializada",
    },
    Center {
        id: 5,
        city: "Cúcuta",
        name: "AHF Colombia",
        address: "Zona norte",
        phone: "+57 310 804 8187",
        services: "Pruebas rápidas de VIH",
    },
    Center {
        id: 6,
        city: "Bucaramanga",
        name: "Cruz Roja",
        address: "Zona central",
        phone: "Consultar",
        services: "Atención de emergencia y pruebas",
    },
    Center {
        id: 7,
        city: "Valledupar",
        name: "Hospital Eduardo Arredondo",
        address: "Zona urbana",
        phone: "Consultar",
        services: "Atención médica general",
    },
    Center {
        id: 8,
        city: "Riohacha",
        name: "Cruz Roja",
        address: "Centro de la ciudad",
        phone: "Consultar",
        services: "Atención de emergencia",
    },
];

/// All centers in directory order.
pub fn centers() -> &'static [Center] {
    CENTERS
}

/// Find a center by id.
pub fn find_center_by_id(id: u32) -> Option<&'static Center> {
    CENTERS.iter().find(|c| c.id == id)
}
