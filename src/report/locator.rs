//! Center locator: city directory and center details

use crate::catalog::{centers, find_center_by_id};
use crate::report::error::ReportError;
use crate::report::types::{CenterCard, CityDirectory, CityEntry};

pub const DIRECTORY_TITLE: &str = "Localizador de Centros Médicos";
pub const DIRECTORY_PROMPT: &str = "Selecciona tu ciudad para encontrar centros de atención:";

/// Shown under every center
pub const CENTER_ADVICE: &str = "Llama antes de ir para confirmar horarios y disponibilidad.";

/// One entry per center, in directory order
pub fn city_directory() -> CityDirectory {
    CityDirectory {
        title: DIRECTORY_TITLE.to_string(),
        prompt: DIRECTORY_PROMPT.to_string(),
        cities: centers()
            .iter()
            .map(|c| CityEntry {
                center_id: c.id,
                city: c.city.to_string(),
            })
            .collect(),
    }
}

/// Details for the center chosen from the directory
pub fn center_card(id: u32) -> Result<CenterCard, ReportError> {
    let center = find_center_by_id(id).ok_or(ReportError::UnknownCenter(id))?;
    tracing::debug!("Center {} selected ({})", id, center.city);
    Ok(CenterCard::new(center, CENTER_ADVICE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_directory() {
        let dir = city_directory();
        assert_eq!(dir.cities.len(), 8);
        assert_eq!(dir.cities[0].city, "Bogotá");
        assert_eq!(dir.cities[0].center_id, 1);
        assert_eq!(dir.cities[7].city, "Riohacha");
    }

    #[test]
    fn test_center_card() {
        let card = center_card(3).unwrap();
        assert_eq!(card.city, "Cali");
        assert_eq!(card.name, "Corporación Viviendo");
        assert_eq!(card.advice, CENTER_ADVICE);
    }

    #[test]
    fn test_unknown_center() {
        assert_eq!(center_card(999), Err(ReportError::UnknownCenter(999)));
    }
}
