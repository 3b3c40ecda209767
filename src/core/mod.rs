mod encoding;
mod lint_error;
mod output;
mod report;

pub use encoding::Encoding;
pub use lint_error::LintError;
pub use output::OutputFormat;
pub use report::{FileEntry, Message, Report, UNKNOWN_FILE_PATH, is_error_severity, render_field};
