//! Diagnostics sink — where the engine reports problems it absorbed.
//!
//! Derivation never fails: a bad seed becomes black, a bad background
//! becomes an opaque-black fallback string. The only visible trace is a
//! message sent to the sink the caller passed in. The default sink drops
//! everything, so the engine has no side effects unless asked for them.

use log::Level;

/// Receives warnings, errors, and info messages with a structured payload.
pub trait DiagnosticSink {
    /// Record one message. `fields` are `key = value` pairs.
    fn emit(&self, level: Level, message: &str, fields: &[(&str, &str)]);

    fn info(&self, message: &str, fields: &[(&str, &str)]) {
        self.emit(Level::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[(&str, &str)]) {
        self.emit(Level::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[(&str, &str)]) {
        self.emit(Level::Error, message, fields);
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&self, _level: Level, _message: &str, _fields: &[(&str, &str)]) {}
}

/// Forwards messages to the `log` facade under the `tonal` target.
///
/// Fields are appended as `key=value` pairs, so `env_logger` output reads
/// like `invalid seed color; seed="#zz" error=invalid hex digit 'z'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, level: Level, message: &str, fields: &[(&str, &str)]) {
        if fields.is_empty() {
            log::log!(target: "tonal", level, "{message}");
        } else {
            log::log!(target: "tonal", level, "{message}; {}", render_fields(fields));
        }
    }
}

/// Render `key=value` pairs separated by spaces. Values containing
/// whitespace or `#` are quoted.
#[must_use]
pub fn render_fields(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            if value.is_empty() || value.contains(char::is_whitespace) || value.contains('#') {
                format!("{key}={value:?}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Test sink that keeps every message in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub(crate) messages: std::cell::RefCell<Vec<(Level, String)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub(crate) fn count(&self, level: Level) -> usize {
        self.messages.borrow().iter().filter(|(l, _)| *l == level).count()
    }
}

#[cfg(test)]
impl DiagnosticSink for RecordingSink {
    fn emit(&self, level: Level, message: &str, fields: &[(&str, &str)]) {
        let line = if fields.is_empty() {
            message.to_string()
        } else {
            format!("{message}; {}", render_fields(fields))
        };
        self.messages.borrow_mut().push((level, line));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
