use crate::report::{CenterCard, Checklist, CityDirectory, EvaluationReport};

/// HTML fragment formatter.
///
/// Produces fragments meant to be injected into the widget containers, so
/// there is no document wrapper. Class names match the widget stylesheet.
///
/// Field values are written without escaping: they are assumed to be trusted
/// catalog text from the static tables, which contain no markup characters.
/// Any new data source (user input, files) must be escaped before it reaches
/// this formatter.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Evaluation results (`resultados-cuestionario` contents)
    pub fn format_evaluation(report: &EvaluationReport) -> String {
        let mut html = String::with_capacity(2048);

        html.push_str("<div class=\"resultado-container\">\n");
        html.push_str("<h4>Resultados de tu Evaluación</h4>\n");

        // Selected symptoms
        html.push_str("<div class=\"sintomas-seleccionados\">\n");
        html.push_str("<h5>Síntomas seleccionados:</h5>\n<ul>\n");
        for symptom in &report.selected_symptoms {
            html.push_str(&format!("<li>{}. {}</li>\n", symptom.id, symptom.label));
        }
        html.push_str("</ul>\n</div>\n");

        // Suggested conditions
        html.push_str("<div class=\"ets-detectadas\">\n");
        html.push_str("<h5>Posibles ETS detectadas:</h5>\n<ul>\n");
        for condition in &report.conditions {
            html.push_str(&format!("<li>{}</li>\n", condition.name));
        }
        html.push_str("</ul>\n</div>\n");

        // Descriptions
        html.push_str("<div class=\"ets-descripciones\">\n");
        html.push_str("<h5>Información detallada:</h5>\n");
        for condition in &report.conditions {
            html.push_str("<div class=\"ets-info\">\n");
            html.push_str(&format!("<strong>{}:</strong>\n", condition.name));
            html.push_str(&format!("<p>{}</p>\n", condition.description));
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");

        html.push_str("<div class=\"recomendacion\">\n");
        html.push_str(&format!(
            "<p><strong>⚠️ Recomendación:</strong> {}</p>\n",
            report.recommendation
        ));
        html.push_str("</div>\n");

        html.push_str("</div>\n");
        html
    }

    /// Alert shown instead of results (e.g. nothing selected)
    pub fn format_alert(message: &str) -> String {
        format!(
            "<div class=\"resultado-alerta\"><p>⚠️ {}</p></div>\n",
            message
        )
    }

    /// Center details (`info-centro` contents)
    pub fn format_center(card: &CenterCard) -> String {
        let mut html = String::with_capacity(1024);

        html.push_str("<div class=\"centro-info\">\n");
        html.push_str(&format!("<h4>{}</h4>\n", card.city));
        html.push_str("<div class=\"centro-detalles\">\n");
        html.push_str(&format!("<p><strong>Centro:</strong> {}</p>\n", card.name));
        html.push_str(&format!("<p><strong>Dirección:</strong> {}</p>\n", card.address));
        html.push_str(&format!("<p><strong>Teléfono:</strong> {}</p>\n", card.phone));
        html.push_str(&format!("<p><strong>Servicios:</strong> {}</p>\n", card.services));
        html.push_str("</div>\n");
        html.push_str("<div class=\"centro-recomendacion\">\n");
        html.push_str(&format!("<p>📞 {}</p>\n", card.advice));
        html.push_str("</div>\n");
        html.push_str("</div>\n");
        html
    }

    /// Symptom checklist (`cuestionario-interactivo` contents).
    ///
    /// Buttons carry no handlers; the host page wires events.
    pub fn format_checklist(checklist: &Checklist) -> String {
        let mut html = String::with_capacity(2048);

        html.push_str("<div class=\"cuestionario-container\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", checklist.title));
        html.push_str(&format!("<p>{}</p>\n", checklist.prompt));
        html.push_str("<div class=\"sintomas-checkbox\">\n");
        for symptom in &checklist.symptoms {
            html.push_str("<label class=\"sintoma-label\">\n");
            html.push_str(&format!(
                "<input type=\"checkbox\" value=\"{}\" class=\"sintoma-check\">\n",
                symptom.id
            ));
            html.push_str(&format!("<span>{}. {}</span>\n", symptom.id, symptom.label));
            html.push_str("</label>\n");
        }
        html.push_str("</div>\n");
        html.push_str("<div class=\"cuestionario-botones\">\n");
        html.push_str("<button class=\"btn-evaluar\">Evaluar Síntomas</button>\n");
        html.push_str("<button class=\"btn-limpiar\">Limpiar</button>\n");
        html.push_str("</div>\n");
        html.push_str("<div id=\"resultados-cuestionario\" class=\"resultados-ocultos\"></div>\n");
        html.push_str("</div>\n");
        html
    }

    /// City buttons (`localizador-centros` contents)
    pub fn format_city_directory(directory: &CityDirectory) -> String {
        let mut html = String::with_capacity(1024);

        html.push_str("<div class=\"localizador-container\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", directory.title));
        html.push_str(&format!("<p>{}</p>\n", directory.prompt));
        html.push_str("<div class=\"ciudades-grid\">\n");
        for entry in &directory.cities {
            html.push_str(&format!(
                "<button class=\"btn-ciudad\" data-center-id=\"{}\">{}</button>\n",
                entry.center_id, entry.city
            ));
        }
        html.push_str("</div>\n");
        html.push_str("<div id=\"info-centro\" class=\"info-centro-oculta\"></div>\n");
        html.push_str("</div>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{centers, symptoms, Condition};
    use crate::report::{center_card, checklist, city_directory, evaluate, NO_SELECTION_MESSAGE};

    /// Catalog text is written unescaped, so it must stay free of markup
    #[test]
    fn test_catalog_text_needs_no_escaping() {
        let mut texts: Vec<&str> = Vec::new();
        texts.extend(symptoms().iter().map(|s| s.label));
        for c in centers() {
            texts.extend([c.city, c.name, c.address, c.phone, c.services]);
        }
        for c in Condition::ALL {
            texts.extend([c.name(), c.description()]);
        }

        for text in texts {
            assert!(
                !text.contains(['<', '>', '&', '"']),
                "catalog text needs escaping: {}",
                text
            );
        }
    }

    #[test]
    fn test_format_evaluation() {
        let report = evaluate(&[1]).unwrap();
        let html = HtmlFormatter::format_evaluation(&report);

        assert!(html.starts_with("<div class=\"resultado-container\">"));
        assert!(html.contains("<li>1. Ardor al orinar</li>"));
        assert!(html.contains("<li>Clamidia</li>"));
        assert!(html.contains("<li>Gonorrea</li>"));
        assert!(html.contains("<strong>VPH (Virus del Papiloma Humano):</strong>"));
        assert!(html.contains("<div class=\"recomendacion\">"));
        assert_eq!(html.matches("<div class=\"ets-info\">").count(), 3);
    }

    #[test]
    fn test_format_alert() {
        let html = HtmlFormatter::format_alert(NO_SELECTION_MESSAGE);
        assert!(html.contains("resultado-alerta"));
        assert!(html.contains("selecciona al menos un síntoma"));
    }

    #[test]
    fn test_format_center() {
        let card = center_card(1).unwrap();
        let html = HtmlFormatter::format_center(&card);

        assert!(html.contains("<h4>Bogotá</h4>"));
        assert!(html.contains("<p><strong>Centro:</strong> AHF Colombia</p>"));
        assert!(html.contains("<p><strong>Teléfono:</strong> +57 310 804 8187</p>"));
        assert!(html.contains("📞"));
    }

    #[test]
    fn test_format_checklist() {
        let html = HtmlFormatter::format_checklist(&checklist());
        assert_eq!(html.matches("class=\"sintoma-check\"").count(), 12);
        assert!(html.contains("value=\"12\""));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_format_city_directory() {
        let html = HtmlFormatter::format_city_directory(&city_directory());
        assert_eq!(html.matches("class=\"btn-ciudad\"").count(), 8);
        assert!(html.contains("data-center-id=\"5\">Cúcuta</button>"));
    }
}
