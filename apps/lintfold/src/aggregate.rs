//! Result aggregation: folds a flat list of rule messages into per-file
//! results with error/warning/fixable tallies.
//!
//! Messages are grouped by `filePath`, falling back to `moduleId`. Within a
//! file, messages keep their input order regardless of how they interleave
//! with other files. Ignored messages are stored but never counted; unknown
//! severities are treated the same way and logged.

use crate::error::{AggregateError, Result};
use crate::models::{FileResult, LintResult, Message, Severity};
use tracing::{debug, warn};

/// Aggregate rule messages into a `LintResult`.
///
/// Fails without partial output when any message lacks both `filePath` and
/// `moduleId`.
pub fn aggregate<I>(messages: I) -> Result<LintResult>
where
    I: IntoIterator<Item = Message>,
{
    let mut result = LintResult::default();

    for (index, msg) in messages.into_iter().enumerate() {
        let key = match msg.grouping_key() {
            Some(k) => k.to_string(),
            None => {
                return Err(AggregateError::MissingFileKey {
                    index,
                    rule: msg.rule,
                })
            }
        };
        let severity = msg.severity.clone();
        let fixable = msg.is_fixable;

        let file = result.files.entry(key).or_insert_with_key(|k| {
            debug!(file = %k, "first message for file");
            FileResult::new(k.clone())
        });
        file.messages.push(msg);

        match severity {
            Severity::Ignore => {}
            Severity::Error => {
                file.error_count += 1;
                result.error_count += 1;
                if fixable {
                    file.fixable_error_count += 1;
                    result.fixable_error_count += 1;
                }
            }
            Severity::Warning => {
                file.warning_count += 1;
                result.warning_count += 1;
                if fixable {
                    file.fixable_warning_count += 1;
                    result.fixable_warning_count += 1;
                }
            }
            Severity::Unknown(value) => {
                warn!(
                    index,
                    file = %file.file_path,
                    severity = %value,
                    "unrecognized severity; message recorded but not counted"
                );
            }
        }
    }

    debug!(
        files = result.files.len(),
        errors = result.error_count,
        warnings = result.warning_count,
        fixable_errors = result.fixable_error_count,
        fixable_warnings = result.fixable_warning_count,
        "aggregation complete"
    );
    Ok(result)
}
