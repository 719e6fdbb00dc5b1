use serde::Serialize;

/// JSON formatter for any report view model
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format as pretty-printed JSON
    pub fn format<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(value)
    }

    /// Format as compact JSON (no whitespace)
    pub fn format_compact<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(value)
    }

    /// `{"alert": message}`
    pub fn format_alert(message: &str) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&serde_json::json!({ "alert": message }))
    }
}
