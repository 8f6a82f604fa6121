use crate::domain::{LogEntry, Payload};
use chrono::SecondsFormat;
use serde_json::json;

/// Render an entry as one line, text or JSON depending on config.
pub fn render(entry: &LogEntry, json: bool) -> String {
    if json {
        render_json(entry)
    } else {
        render_text(entry)
    }
}

/// Human-readable line: timestamp, level, context, message, and a compact
/// JSON rendition of the data when present. No data section at all when the
/// entry carries none.
pub fn render_text(entry: &LogEntry) -> String {
    let timestamp = entry
        .timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    match &entry.data {
        Some(data) => format!(
            "{timestamp} [{}] {}: {} {}",
            entry.level,
            entry.context,
            entry.message,
            render_data(data)
        ),
        None => format!(
            "{timestamp} [{}] {}: {}",
            entry.level, entry.context, entry.message
        ),
    }
}

/// One line of valid JSON. Serialization of the supported payload shapes
/// cannot fail, but the fallback keeps this path panic-free regardless.
pub fn render_json(entry: &LogEntry) -> String {
    match serde_json::to_string(entry) {
        Ok(line) => line,
        Err(_) => json!({
            "timestamp": entry.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            "level": entry.level.as_str(),
            "context": entry.context,
            "message": entry.message,
        })
        .to_string(),
    }
}

fn render_data(data: &Payload) -> String {
    match serde_json::to_string(data) {
        Ok(rendered) => rendered,
        Err(_) => "{}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LogLevel, Payload};
    use serde_json::{Value, json};

    fn entry(data: Option<Payload>) -> LogEntry {
        LogEntry::new(LogLevel::Info, "app:sync", "pulled changes", data)
    }

    #[test]
    fn test_text_line_contains_all_elements() {
        let line = render_text(&entry(Some(Payload::Plain(json!({"files": 4})))));
        assert!(line.contains("INFO"));
        assert!(line.contains("app:sync"));
        assert!(line.contains("pulled changes"));
        assert!(line.contains("\"files\":4"));
    }

    #[test]
    fn test_text_line_without_data_has_no_placeholder() {
        let line = render_text(&entry(None));
        assert!(line.contains("pulled changes"));
        assert!(!line.contains("undefined"));
        assert!(!line.contains("null"));
        assert!(!line.ends_with(' '));
    }

    #[test]
    fn test_text_line_renders_empty_data_braces() {
        let line = render_text(&entry(Some(Payload::empty())));
        assert!(line.ends_with("{}"));
    }

    #[test]
    fn test_json_line_parses_with_expected_keys() {
        let line = render_json(&entry(Some(Payload::Plain(json!({"files": 4})))));
        let value: Value = serde_json::from_str(&line).unwrap();
        assert!(!value["timestamp"].as_str().unwrap().is_empty());
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["context"], "app:sync");
        assert_eq!(value["message"], "pulled changes");
        assert_eq!(value["data"]["files"], 4);
    }

    #[test]
    fn test_json_line_omits_data_key_when_absent() {
        let line = render_json(&entry(None));
        let value: Value = serde_json::from_str(&line).unwrap();
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_render_dispatches_on_mode() {
        let e = entry(None);
        assert!(serde_json::from_str::<Value>(&render(&e, true)).is_ok());
        assert!(serde_json::from_str::<Value>(&render(&e, false)).is_err());
    }
}
