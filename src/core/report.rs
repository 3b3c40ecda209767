use serde::Deserialize;
use serde_json::{Map, Value};

/// Substituted for entries that carry no `filePath`.
pub const UNKNOWN_FILE_PATH: &str = "unknown";

const ERROR_SEVERITY: f64 = 2.0;

/// A parsed lint report: one entry per linted file, in input order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Report {
    pub files: Vec<FileEntry>,
}

/// One linted file. Only a JSON object is accepted; a present `null` is kept
/// apart from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct FileEntry {
    pub file_path: Option<Value>,
    pub messages: Option<Vec<Message>>,
}

impl TryFrom<Map<String, Value>> for FileEntry {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let messages = match map.remove("messages") {
            None => None,
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| match item {
                        Value::Object(m) => Ok(Message::from(m)),
                        other => Err(format!(
                            "invalid type: {} at messages[{idx}], expected a message object",
                            json_kind(&other)
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(other) => {
                return Err(format!(
                    "invalid type: {} for messages, expected an array",
                    json_kind(&other)
                ));
            }
        };

        Ok(Self {
            file_path: map.remove("filePath"),
            messages,
        })
    }
}

impl FileEntry {
    /// `filePath` as given (a present `null` included), or `"unknown"` when
    /// the key is missing.
    pub fn file_path_or_unknown(&self) -> Value {
        self.file_path
            .clone()
            .unwrap_or_else(|| Value::String(UNKNOWN_FILE_PATH.to_string()))
    }

    pub fn messages(&self) -> &[Message] {
        self.messages.as_deref().unwrap_or(&[])
    }
}

/// A single diagnostic. Every field is kept as raw JSON so it can be echoed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Message {
    pub severity: Option<Value>,
    pub line: Option<Value>,
    pub column: Option<Value>,
    pub message: Option<Value>,
    pub rule_id: Option<Value>,
}

impl From<Map<String, Value>> for Message {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            severity: map.remove("severity"),
            line: map.remove("line"),
            column: map.remove("column"),
            message: map.remove("message"),
            rule_id: map.remove("ruleId"),
        }
    }
}

impl Message {
    pub fn is_error(&self) -> bool {
        self.severity.as_ref().is_some_and(is_error_severity)
    }
}

/// Only a JSON number equal to 2 marks an error; `"2"`, `true` and friends do not.
pub fn is_error_severity(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(ERROR_SEVERITY),
        _ => false,
    }
}

/// Strings print bare, other values as compact JSON, absent values as `null`.
pub fn render_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_numeric_two_is_an_error() {
        assert!(is_error_severity(&json!(2)));
        assert!(is_error_severity(&json!(2.0)));
        assert!(!is_error_severity(&json!(1)));
        assert!(!is_error_severity(&json!("2")));
        assert!(!is_error_severity(&json!(true)));
        assert!(!is_error_severity(&Value::Null));
        assert!(!Message::default().is_error());
    }

    #[test]
    fn missing_fields_default() {
        let entry: FileEntry = serde_json::from_str(r#"{"extra": 1}"#).expect("entry");
        assert_eq!(entry.file_path_or_unknown(), json!("unknown"));
        assert!(entry.messages().is_empty());
    }

    #[test]
    fn null_file_path_is_kept() {
        let entry: FileEntry =
            serde_json::from_str(r#"{"filePath": null, "messages": []}"#).expect("entry");
        assert_eq!(entry.file_path, Some(Value::Null));
        assert_eq!(entry.file_path_or_unknown(), Value::Null);
    }

    #[test]
    fn null_messages_is_a_shape_error() {
        let err = serde_json::from_str::<FileEntry>(r#"{"filePath": "a.js", "messages": null}"#)
            .expect_err("null messages");
        assert!(
            err.to_string().contains("invalid type: null for messages"),
            "{err}"
        );
    }

    #[test]
    fn array_shaped_entry_is_rejected() {
        let err = serde_json::from_str::<Report>(r#"[["a.js", [[2, 1, 2, "m", "r"]]]]"#)
            .expect_err("array entry");
        assert!(err.to_string().contains("invalid type"), "{err}");

        assert!(serde_json::from_str::<Report>("[[]]").is_err());
    }

    #[test]
    fn array_shaped_message_is_rejected() {
        let err = serde_json::from_str::<Report>(
            r#"[{"filePath": "a.js", "messages": [[2, 1, 2, "m", "r"]]}]"#,
        )
        .expect_err("array message");
        assert!(
            err.to_string().contains("invalid type: array at messages[0]"),
            "{err}"
        );
    }

    #[test]
    fn message_keeps_present_values_and_ignores_extras() {
        let msg: Message = serde_json::from_str(
            r#"{"severity": 2, "line": null, "ruleId": "semi", "fatal": true}"#,
        )
        .expect("message");
        assert!(msg.is_error());
        assert_eq!(msg.line, Some(Value::Null));
        assert_eq!(msg.column, None);
        assert_eq!(msg.rule_id, Some(json!("semi")));
    }

    #[test]
    fn render_field_prints_values_as_is() {
        assert_eq!(render_field(Some(&json!("semi"))), "semi");
        assert_eq!(render_field(Some(&json!(12))), "12");
        assert_eq!(render_field(Some(&json!(1.5))), "1.5");
        assert_eq!(render_field(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(render_field(Some(&Value::Null)), "null");
        assert_eq!(render_field(None), "null");
    }

    #[test]
    fn report_rejects_non_array_root() {
        let err = serde_json::from_value::<Report>(json!({"filePath": "a.js"}))
            .expect_err("object root");
        assert!(err.to_string().contains("expected a sequence"), "{err}");
    }
}
