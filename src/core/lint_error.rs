use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::core::render_field;

/// One error-severity finding, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintError {
    pub file_path: Value,
    pub line: Option<Value>,
    pub column: Option<Value>,
    pub message: Option<Value>,
    pub rule_id: Option<Value>,
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} - {} ({})",
            render_field(Some(&self.file_path)),
            render_field(self.line.as_ref()),
            render_field(self.column.as_ref()),
            render_field(self.message.as_ref()),
            render_field(self.rule_id.as_ref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn displays_as_single_line() {
        let err = LintError {
            file_path: json!("src/a.js"),
            line: Some(json!(1)),
            column: Some(json!(2)),
            message: Some(json!("Missing semicolon")),
            rule_id: Some(json!("semi")),
        };
        assert_eq!(err.to_string(), "src/a.js:1:2 - Missing semicolon (semi)");
    }

    #[test]
    fn absent_fields_render_null() {
        let err = LintError {
            file_path: json!("a.js"),
            line: None,
            column: None,
            message: Some(json!("Parsing error")),
            rule_id: None,
        };
        assert_eq!(err.to_string(), "a.js:null:null - Parsing error (null)");
    }

    #[test]
    fn serializes_with_report_field_names() {
        let err = LintError {
            file_path: json!("a.js"),
            line: Some(json!(3)),
            column: None,
            message: None,
            rule_id: Some(json!("eqeqeq")),
        };
        let v = serde_json::to_value(&err).expect("serialize");
        assert_eq!(
            v,
            json!({"filePath": "a.js", "line": 3, "column": null, "message": null, "ruleId": "eqeqeq"})
        );
    }
}
