//! Severity encoding shared with the rule engine.
//!
//! Rules emit severities as small integers. The three recognized values are
//! exported as constants; anything else (other numbers, strings, null, a
//! missing field) decodes to `Severity::Unknown` holding the raw value, so
//! it survives a serialize round-trip.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

pub const IGNORE_SEVERITY: i64 = 0;
pub const WARNING_SEVERITY: i64 = 1;
pub const ERROR_SEVERITY: i64 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Json", into = "Json")]
/// Classification of a single message.
pub enum Severity {
    Ignore,
    Warning,
    Error,
    /// A value outside the shared contract. Recorded, never counted.
    Unknown(Json),
}

impl Severity {
    /// Short lowercase label used by printers.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ignore => "ignore",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Unknown(_) => "note",
        }
    }
}

impl Default for Severity {
    /// A message without a severity field.
    fn default() -> Self {
        Severity::Unknown(Json::Null)
    }
}

impl From<Json> for Severity {
    fn from(value: Json) -> Self {
        // Numeric equality only: `2.0` matches, `"2"` does not.
        let known = value.as_f64().and_then(|n| {
            [IGNORE_SEVERITY, WARNING_SEVERITY, ERROR_SEVERITY]
                .into_iter()
                .find(|&k| k as f64 == n)
        });
        match known {
            Some(IGNORE_SEVERITY) => Severity::Ignore,
            Some(WARNING_SEVERITY) => Severity::Warning,
            Some(ERROR_SEVERITY) => Severity::Error,
            _ => Severity::Unknown(value),
        }
    }
}

impl From<i64> for Severity {
    fn from(value: i64) -> Self {
        Severity::from(Json::from(value))
    }
}

impl From<Severity> for Json {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Ignore => Json::from(IGNORE_SEVERITY),
            Severity::Warning => Json::from(WARNING_SEVERITY),
            Severity::Error => Json::from(ERROR_SEVERITY),
            Severity::Unknown(raw) => raw,
        }
    }
}
