use crate::report::{CenterCard, Checklist, CityDirectory, EvaluationReport};

/// Markdown formatter for reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format evaluation results as markdown
    pub fn format_evaluation(report: &EvaluationReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Resultados de tu Evaluación\n\n");

        md.push_str("## Síntomas seleccionados\n\n");
        for symptom in &report.selected_symptoms {
            md.push_str(&format!("- {}. {}\n", symptom.id, symptom.label));
        }
        md.push('\n');

        md.push_str("## Posibles ETS detectadas\n\n");
        for condition in &report.conditions {
            md.push_str(&format!("- {}\n", condition.name));
        }
        md.push('\n');

        md.push_str("## Información detallada\n\n");
        for condition in &report.conditions {
            md.push_str(&format!("**{}:** {}\n\n", condition.name, condition.description));
        }

        md.push_str(&format!("> ⚠️ **Recomendación:** {}\n", report.recommendation));
        md
    }

    pub fn format_alert(message: &str) -> String {
        format!("> ⚠️ {}\n", message)
    }

    /// Format center details as markdown
    pub fn format_center(card: &CenterCard) -> String {
        let mut md = String::with_capacity(512);

        md.push_str(&format!("# {}\n\n", card.city));
        md.push_str(&format!("- **Centro:** {}\n", card.name));
        md.push_str(&format!("- **Dirección:** {}\n", card.address));
        md.push_str(&format!("- **Teléfono:** {}\n", card.phone));
        md.push_str(&format!("- **Servicios:** {}\n\n", card.services));
        md.push_str(&format!("📞 {}\n", card.advice));
        md
    }

    pub fn format_checklist(checklist: &Checklist) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("# {}\n\n", checklist.title));
        md.push_str(&format!("{}\n\n", checklist.prompt));
        for symptom in &checklist.symptoms {
            md.push_str(&format!("- [ ] {}. {}\n", symptom.id, symptom.label));
        }
        md
    }

    /// Cities as a table keyed by center id (the id to pass to `center`)
    pub fn format_city_directory(directory: &CityDirectory) -> String {
        let mut md = String::with_capacity(512);

        md.push_str(&format!("# {}\n\n", directory.title));
        md.push_str(&format!("{}\n\n", directory.prompt));
        md.push_str("| Id | Ciudad |\n|---|---|\n");
        for entry in &directory.cities {
            md.push_str(&format!("| {} | {} |\n", entry.center_id, entry.city));
        }
        md
    }
}
