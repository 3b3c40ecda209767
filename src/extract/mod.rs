use crate::core::{LintError, Report};

/// Flattens the report into its error-severity findings, keeping file order
/// and message order.
pub fn extract_errors(report: &Report) -> Vec<LintError> {
    let mut errors = Vec::new();
    for entry in &report.files {
        let file_path = entry.file_path_or_unknown();
        for msg in entry.messages().iter().filter(|m| m.is_error()) {
            errors.push(LintError {
                file_path: file_path.clone(),
                line: msg.line.clone(),
                column: msg.column.clone(),
                message: msg.message.clone(),
                rule_id: msg.rule_id.clone(),
            });
        }
    }
    tracing::debug!(files = report.files.len(), errors = errors.len(), "extracted errors");
    errors
}

pub fn format_lines(errors: &[LintError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
