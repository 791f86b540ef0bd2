//! Reading rule messages from JSON files or stdin.
//!
//! Input patterns are globs resolved against the repository root; `-` means
//! stdin. Matched files are parsed in parallel but their messages are
//! concatenated in pattern order, then path order, so aggregation sees the
//! same sequence on every run.

use crate::error::LoadError;
use crate::models::Message;
use glob::glob;
use rayon::prelude::*;
use serde::de::Error as _;
use serde_json::Value as Json;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where a batch of messages comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    fn origin(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(p) => p.to_string_lossy().to_string(),
        }
    }
}

/// Expand input patterns into concrete sources. No patterns means stdin.
///
/// A glob that matches nothing is only logged, but a literal path that does
/// not exist is an error. `-` may be repeated; stdin is read once.
pub fn resolve_sources(root: &Path, patterns: &[String]) -> Result<Vec<Source>, LoadError> {
    if patterns.is_empty() {
        return Ok(vec![Source::Stdin]);
    }
    let mut sources = Vec::new();
    for pat in patterns {
        if pat == "-" {
            if !sources.contains(&Source::Stdin) {
                sources.push(Source::Stdin);
            }
            continue;
        }
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|source| LoadError::Pattern {
            pattern: pat.clone(),
            source,
        })?;
        let before = sources.len();
        for entry in entries {
            match entry {
                Ok(p) if p.is_file() => sources.push(Source::File(p)),
                Ok(_) => {}
                Err(e) => warn!(path = %e.path().display(), error = %e.error(), "skipping unreadable input"),
            }
        }
        if sources.len() == before {
            if !is_glob(pat) {
                return Err(LoadError::MissingInput(pat.clone()));
            }
            warn!(pattern = %pat, "input pattern matched no files");
        }
    }
    Ok(sources)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Load every message referenced by `patterns`, in a stable order.
pub fn load_messages(root: &Path, patterns: &[String]) -> Result<Vec<Message>, LoadError> {
    let sources = resolve_sources(root, patterns)?;
    info!(inputs = sources.len(), "loading rule messages");

    let batches: Vec<Result<Vec<Message>, LoadError>> =
        sources.par_iter().map(read_source).collect();

    let mut messages = Vec::new();
    for batch in batches {
        messages.extend(batch?);
    }
    Ok(messages)
}

fn read_source(source: &Source) -> Result<Vec<Message>, LoadError> {
    let text = match source {
        Source::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(LoadError::Stdin)?;
            buf
        }
        Source::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?,
    };
    let messages = parse_messages(&text, &source.origin())?;
    debug!(origin = %source.origin(), count = messages.len(), "parsed messages");
    Ok(messages)
}

/// Parse one JSON document holding either a bare message array or an
/// object with a `messages` array.
pub fn parse_messages(text: &str, origin: &str) -> Result<Vec<Message>, LoadError> {
    let parse_err = |source: serde_json::Error| LoadError::Parse {
        origin: origin.to_string(),
        source,
    };
    let doc: Json = serde_json::from_str(text).map_err(parse_err)?;
    let list = match doc {
        Json::Array(items) => Json::Array(items),
        Json::Object(mut obj) => match obj.remove("messages") {
            Some(inner @ Json::Array(_)) => inner,
            _ => {
                return Err(parse_err(serde_json::Error::custom(
                    "object input must have a `messages` array",
                )))
            }
        },
        _ => {
            return Err(parse_err(serde_json::Error::custom(
                "expected an array of messages",
            )))
        }
    };
    serde_json::from_value(list).map_err(parse_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use tempfile::tempdir;

    #[test]
    fn test_parse_bare_array_and_wrapped_object() {
        let bare = r#"[{"rule":"r","severity":1,"filePath":"a.hbs","message":"m"}]"#;
        let wrapped = r#"{"messages":[{"rule":"r","severity":1,"filePath":"a.hbs","message":"m"}]}"#;
        let a = parse_messages(bare, "bare").unwrap();
        let b = parse_messages(wrapped, "wrapped").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].severity, Severity::Warning);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(
            parse_messages("42", "num"),
            Err(LoadError::Parse { .. })
        ));
        assert!(matches!(
            parse_messages(r#"{"results":[]}"#, "obj"),
            Err(LoadError::Parse { .. })
        ));
        let err = parse_messages("[1]", "scalar").unwrap_err();
        assert!(err.to_string().contains("scalar"));
    }

    #[test]
    fn test_parse_keeps_messages_with_loose_severity() {
        let raw = r#"[
            {"rule":"a","severity":"2","filePath":"x.hbs","isFixable":null},
            {"rule":"b","filePath":"x.hbs"},
            {"rule":"c","severity":null,"filePath":"x.hbs"},
            {"rule":"d","severity":2.0,"filePath":"x.hbs","isFixable":true}
        ]"#;
        let msgs = parse_messages(raw, "loose").unwrap();
        assert_eq!(msgs.len(), 4);

        let res = crate::aggregate::aggregate(msgs).unwrap();
        let x = &res.files["x.hbs"];
        assert_eq!(x.messages.len(), 4);
        assert_eq!(x.error_count, 1);
        assert_eq!(x.fixable_error_count, 1);
        assert_eq!(x.warning_count, 0);
        assert!(matches!(x.messages[0].severity, Severity::Unknown(_)));
    }

    #[test]
    fn test_load_keeps_pattern_then_path_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("out")).unwrap();
        fs::write(
            root.join("out/b.json"),
            r#"[{"rule":"r","severity":2,"filePath":"x.hbs","message":"b"}]"#,
        )
        .unwrap();
        fs::write(
            root.join("out/a.json"),
            r#"[{"rule":"r","severity":2,"filePath":"x.hbs","message":"a"}]"#,
        )
        .unwrap();
        fs::write(
            root.join("first.json"),
            r#"[{"rule":"r","severity":1,"filePath":"x.hbs","message":"first"}]"#,
        )
        .unwrap();

        let patterns = vec!["first.json".to_string(), "out/*.json".to_string()];
        let msgs = load_messages(root, &patterns).unwrap();
        let texts: Vec<&str> = msgs.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["first", "a", "b"]);
    }

    #[test]
    fn test_unmatched_pattern_contributes_nothing() {
        let dir = tempdir().unwrap();
        let msgs = load_messages(dir.path(), &["missing/*.json".to_string()]).unwrap();
        assert!(msgs.is_empty());
    }

    #[test]
    fn test_missing_literal_input_fails_load() {
        let dir = tempdir().unwrap();
        let err = load_messages(dir.path(), &["out/lint.json".to_string()]).unwrap_err();
        assert!(matches!(err, LoadError::MissingInput(ref p) if p == "out/lint.json"));
    }

    #[test]
    fn test_bad_file_fails_load() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "not json").unwrap();
        let err = load_messages(dir.path(), &["bad.json".to_string()]).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let dir = tempdir().unwrap();
        let err = resolve_sources(dir.path(), &["[".to_string()]).unwrap_err();
        assert!(matches!(err, LoadError::Pattern { .. }));
    }

    #[test]
    fn test_no_patterns_means_stdin() {
        let dir = tempdir().unwrap();
        assert_eq!(resolve_sources(dir.path(), &[]).unwrap(), vec![Source::Stdin]);
        assert_eq!(
            resolve_sources(dir.path(), &["-".to_string()]).unwrap(),
            vec![Source::Stdin]
        );
    }

    #[test]
    fn test_repeated_stdin_is_read_once() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        let patterns = vec!["-".to_string(), "a.json".to_string(), "-".to_string()];
        let sources = resolve_sources(dir.path(), &patterns).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], Source::Stdin);
        assert!(matches!(sources[1], Source::File(_)));
    }
}
