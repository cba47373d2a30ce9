//! Structured logging with component context.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// JSON format (for log scraping).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Component that emitted the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}]", self.level);

        if let Some(component) = &self.component {
            s.push_str(&format!(" {}:", component));
        }

        s.push_str(&format!(" {}", self.message));

        if !self.fields.is_empty() {
            let mut fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            s.push_str(" | ");
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Structured logger with component context.
///
/// Entries below the minimum level are dropped; the rest are rendered in
/// the configured format and written to the console.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    component: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    /// Create a new logger.
    pub fn new() -> Self {
        Self {
            component: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, HashMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, HashMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, HashMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, HashMap::new());
    }

    /// Start an info-level entry with fields.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start a warn-level entry with fields.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start an error-level entry with fields.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    fn log(&self, level: LogLevel, message: &str, fields: HashMap<String, serde_json::Value>) {
        if let Some(line) = self.render(level, message, fields) {
            write_console(level, &line);
        }
    }

    /// Render an entry to its output line, or None if filtered out.
    fn render(
        &self,
        level: LogLevel,
        message: &str,
        fields: HashMap<String, serde_json::Value>,
    ) -> Option<String> {
        if level < self.min_level {
            return None;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            component: self.component.clone(),
            fields,
        };

        Some(match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        })
    }
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for log entries with additional fields.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: HashMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

/// Write one rendered line to the console sink.
fn write_console(level: LogLevel, line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let message = wasm_bindgen::JsValue::from_str(line);
        match level {
            LogLevel::Error => web_sys::console::error_1(&message),
            LogLevel::Warn => web_sys::console::warn_1(&message),
            _ => web_sys::console::log_1(&message),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = level;
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_entries_below_min_level_are_dropped() {
        let logger = StructuredLogger::new().with_min_level(LogLevel::Warn);
        assert!(logger.render(LogLevel::Info, "hidden", HashMap::new()).is_none());
        assert!(logger.render(LogLevel::Warn, "shown", HashMap::new()).is_some());
        assert!(logger.render(LogLevel::Error, "shown", HashMap::new()).is_some());
    }

    #[test]
    fn test_human_format() {
        let logger = StructuredLogger::new()
            .with_component("home")
            .with_format(LogFormat::Human);

        let mut fields = HashMap::new();
        fields.insert("products".to_string(), serde_json::json!(12));

        let line = logger
            .render(LogLevel::Info, "catalog loaded", fields)
            .unwrap();
        assert_eq!(line, "[INFO] home: catalog loaded | products=12");
    }

    #[test]
    fn test_json_format() {
        let logger = StructuredLogger::new().with_component("home");

        let mut fields = HashMap::new();
        fields.insert("error".to_string(), serde_json::json!("timed out"));

        let line = logger
            .render(LogLevel::Error, "catalog fetch failed", fields)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "error");
        assert_eq!(value["message"], "catalog fetch failed");
        assert_eq!(value["component"], "home");
        assert_eq!(value["error"], "timed out");
    }

    #[test]
    fn test_builder_collects_fields() {
        // emit() goes to stderr here; the rendering itself is covered above.
        let logger = StructuredLogger::new().with_min_level(LogLevel::Error);
        logger
            .error_builder("catalog fetch failed")
            .field("error", "HTTP 500")
            .field_i64("attempt", 1)
            .emit();
    }
}
