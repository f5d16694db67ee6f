use serde::Serialize;

/// Severity label substituted when the caller omits one.
pub const DEFAULT_LEVEL: &str = "info";

/// A single log event as it is sent to the dev logging endpoint.
///
/// Field order matters: the serialized body is
/// `{"message": .., "source": .., "level": ..}` and the endpoint's wire
/// name for severity is `level`, not `severity`. The record is a value
/// type built per emission, serialized once, and dropped.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogRecord {
    pub message: String,
    pub source: String,
    pub level: String,
}

impl LogRecord {
    /// Build a record from optional inputs, applying the default-on-empty
    /// policy uniformly to all three fields.
    ///
    /// **Parameters**
    /// - `source`: origin identifier of the event; `None` or `""` becomes `""`.
    /// - `severity`: level label; `None` or `""` becomes [`DEFAULT_LEVEL`].
    /// - `message`: human-readable body; `None` or `""` becomes `""`.
    ///
    /// The same substitution applies to both missing and empty values so
    /// the three historical call shapes (all arguments, partial, none)
    /// cannot drift apart.
    pub fn new(source: Option<&str>, severity: Option<&str>, message: Option<&str>) -> Self {
        LogRecord {
            message: non_empty_or(message, ""),
            source: non_empty_or(source, ""),
            level: non_empty_or(severity, DEFAULT_LEVEL),
        }
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        LogRecord::new(None, None, None)
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
