//! Shared data models for rule messages and aggregated lint results.

pub mod severity;

pub use severity::{Severity, ERROR_SEVERITY, IGNORE_SEVERITY, WARNING_SEVERITY};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single diagnostic occurrence reported by one rule.
pub struct Message {
    #[serde(default)]
    pub rule: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    /// Offending snippet or rule payload; opaque here.
    #[serde(default, skip_serializing_if = "Json::is_null")]
    pub source: Json,
    #[serde(
        default,
        deserialize_with = "deserialize_truthy",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_fixable: bool,
    /// Rule-specific fields (`endLine`, `fix`, ...) carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Json>,
}

impl Message {
    /// Create a message with no location, source, or file key.
    pub fn new(rule: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            severity,
            file_path: None,
            module_id: None,
            message: message.into(),
            line: None,
            column: None,
            source: Json::Null,
            is_fixable: false,
            extra: Map::new(),
        }
    }

    pub fn in_file(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn in_module(mut self, id: impl Into<String>) -> Self {
        self.module_id = Some(id.into());
        self
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn fixable(mut self, is_fixable: bool) -> Self {
        self.is_fixable = is_fixable;
        self
    }

    /// Key this message is grouped under: a non-empty `filePath`, falling
    /// back to a non-empty `moduleId`.
    pub fn grouping_key(&self) -> Option<&str> {
        fn non_empty(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|v| !v.is_empty())
        }
        non_empty(&self.file_path).or_else(|| non_empty(&self.module_id))
    }
}

/// Read a flag the way rule engines emit it: any JSON value, judged by
/// truthiness (`null`, `false`, `0`, `""` are false).
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Json::deserialize(deserializer)?;
    Ok(match value {
        Json::Null => false,
        Json::Bool(b) => b,
        Json::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Json::String(s) => !s.is_empty(),
        Json::Array(_) | Json::Object(_) => true,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Messages and tallies for one grouping key.
pub struct FileResult {
    pub file_path: String,
    pub messages: Vec<Message>,
    pub error_count: usize,
    pub warning_count: usize,
    pub fixable_error_count: usize,
    pub fixable_warning_count: usize,
}

impl FileResult {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            messages: Vec::new(),
            error_count: 0,
            warning_count: 0,
            fixable_error_count: 0,
            fixable_warning_count: 0,
        }
    }

    /// True when nothing in this file counts as an error or warning.
    pub fn is_clean(&self) -> bool {
        self.error_count == 0 && self.warning_count == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Aggregated lint output: per-file results plus grand totals.
pub struct LintResult {
    pub files: BTreeMap<String, FileResult>,
    pub error_count: usize,
    pub warning_count: usize,
    pub fixable_error_count: usize,
    pub fixable_warning_count: usize,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total recorded messages, including ignored and unknown severities.
    pub fn message_count(&self) -> usize {
        self.files.values().map(|f| f.messages.len()).sum()
    }

    /// CI gate: any error fails, and so does exceeding `max_warnings` when set.
    pub fn is_passing(&self, max_warnings: Option<usize>) -> bool {
        if self.has_errors() {
            return false;
        }
        match max_warnings {
            Some(max) => self.warning_count <= max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_json_field_names() {
        let raw = r#"{
            "rule": "no-bare-strings",
            "severity": 2,
            "filePath": "app/templates/a.hbs",
            "message": "Non-translated string used",
            "line": 3,
            "column": 5,
            "source": "Hello",
            "isFixable": true,
            "endLine": 3
        }"#;
        let msg: Message = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.severity, Severity::Error);
        assert_eq!(msg.file_path.as_deref(), Some("app/templates/a.hbs"));
        assert_eq!(msg.line, Some(3));
        assert!(msg.is_fixable);
        assert_eq!(msg.extra.get("endLine"), Some(&Json::from(3)));

        let back = serde_json::to_value(&msg).unwrap();
        assert_eq!(back["isFixable"], true);
        assert_eq!(back["endLine"], 3);
        assert!(back.get("moduleId").is_none());
    }

    #[test]
    fn test_loose_severity_and_fixable_values_decode() {
        let raw = r#"[
            {"filePath": "a.hbs", "severity": "2", "isFixable": null},
            {"filePath": "a.hbs", "severity": null, "isFixable": 1},
            {"filePath": "a.hbs", "isFixable": ""},
            {"filePath": "a.hbs", "severity": 1.0, "isFixable": "yes"}
        ]"#;
        let msgs: Vec<Message> = serde_json::from_str(raw).unwrap();
        assert_eq!(msgs[0].severity, Severity::Unknown(Json::from("2")));
        assert!(!msgs[0].is_fixable);
        assert_eq!(msgs[1].severity, Severity::Unknown(Json::Null));
        assert!(msgs[1].is_fixable);
        assert_eq!(msgs[2].severity, Severity::default());
        assert!(!msgs[2].is_fixable);
        assert_eq!(msgs[3].severity, Severity::Warning);
        assert!(msgs[3].is_fixable);
    }

    #[test]
    fn test_grouping_key_precedence() {
        let both = Message::new("r", Severity::Error, "m")
            .in_file("x")
            .in_module("y");
        assert_eq!(both.grouping_key(), Some("x"));

        let module_only = Message::new("r", Severity::Error, "m").in_module("y");
        assert_eq!(module_only.grouping_key(), Some("y"));

        let empty_path = Message::new("r", Severity::Error, "m")
            .in_file("")
            .in_module("y");
        assert_eq!(empty_path.grouping_key(), Some("y"));

        let none = Message::new("r", Severity::Error, "m").in_file("");
        assert_eq!(none.grouping_key(), None);
    }

    #[test]
    fn test_is_passing_gate() {
        let mut res = LintResult::default();
        assert!(res.is_passing(None));

        res.warning_count = 3;
        assert!(res.is_passing(None));
        assert!(res.is_passing(Some(3)));
        assert!(!res.is_passing(Some(2)));

        res.error_count = 1;
        assert!(!res.is_passing(None));
    }
}
