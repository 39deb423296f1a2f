//! Single-line JSON event logging.
//!
//! Every line carries `ts`, `level` and `event`, followed by the caller's
//! fields. In the browser the line goes to the console, natively to stdout.

use std::cmp::Ordering;

use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn debug(&self, event: &str, fields: Value) {
        self.log(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: Value) {
        self.log(LogLevel::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: Value) {
        self.log(LogLevel::Warn, event, fields);
    }

    pub fn log(&self, level: LogLevel, event: &str, fields: Value) {
        if let Some(line) = self.render(level, event, fields, now_unix_millis()) {
            emit(&line);
        }
    }

    /// Builds the JSON line, or `None` when `level` is filtered out.
    pub fn render(&self, level: LogLevel, event: &str, fields: Value, ts: u64) -> Option<String> {
        if level < self.min_level {
            return None;
        }

        let mut payload = Map::new();
        payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
        payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));

        if let Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(Value::Object(payload).to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filtered_levels_render_nothing() {
        let logger = Logger::new(LogLevel::Info);

        assert!(logger.render(LogLevel::Debug, "noise", json!({}), 1).is_none());
        assert!(logger.render(LogLevel::Warn, "loud", json!({}), 1).is_some());
    }

    #[test]
    fn rendered_line_merges_fields_after_envelope() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .render(LogLevel::Info, "panel_selected", json!({ "panel": "tools" }), 42)
            .expect("info passes a debug threshold");
        let parsed: Value = serde_json::from_str(&line).expect("line is JSON");

        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "panel_selected");
        assert_eq!(parsed["panel"], "tools");
    }

    #[test]
    fn level_parsing_accepts_aliases() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Info && LogLevel::Info < LogLevel::Warn);
    }
}
