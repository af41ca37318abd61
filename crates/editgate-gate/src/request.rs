//! Edit request model
//!
//! The host sends a JSON object describing the tool call. Only
//! `tool_input.file_path` is read; every other field is ignored.
//!
//! Two failure kinds are kept apart: text that is not JSON at all
//! (`MalformedRequest`, allowed silently) and JSON of the wrong shape
//! (`InvalidRequest`, reported before allowing).

use serde_json::Value;

use editgate_utils::EditGateError;

/// One edit request as received on stdin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    /// Target path of the edit, `None` when absent or `null`
    pub file_path: Option<String>,
}

impl EditRequest {
    /// Parse a request from raw JSON text.
    pub fn from_json(input: &str) -> Result<Self, EditGateError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(&value)
    }

    /// Extract the request from an already parsed JSON document.
    ///
    /// A missing `tool_input` or a missing/`null` `file_path` yields an empty
    /// request. A document, `tool_input` or `file_path` of any other
    /// unexpected type is an `InvalidRequest`.
    pub fn from_value(value: &Value) -> Result<Self, EditGateError> {
        let Value::Object(request) = value else {
            return Err(invalid(format!(
                "expected a JSON object, got {}",
                type_name(value)
            )));
        };

        let tool_input = match request.get("tool_input") {
            None => return Ok(Self::default()),
            Some(Value::Object(tool_input)) => tool_input,
            Some(other) => {
                return Err(invalid(format!(
                    "tool_input must be an object, got {}",
                    type_name(other)
                )));
            }
        };

        let file_path = match tool_input.get("file_path") {
            None | Some(Value::Null) => None,
            Some(Value::String(path)) => Some(path.clone()),
            Some(other) => {
                return Err(invalid(format!(
                    "file_path must be a string, got {}",
                    type_name(other)
                )));
            }
        };

        Ok(Self { file_path })
    }

    /// The path to evaluate, if present and non-empty.
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref().filter(|path| !path.is_empty())
    }
}

fn invalid(reason: String) -> EditGateError {
    EditGateError::InvalidRequest(reason)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
