//! Step inputs and outputs exchanged with the host platform.
//!
//! Inputs arrive as a single JSON object on standard input and outputs leave as
//! a single JSON object on standard output.

use serde_json::{Map, Value};
use std::io::{Read, Write};

/// Named inputs supplied by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInputs {
    values: Map<String, Value>,
}

impl StepInputs {
    /// Create an empty set of inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build inputs from a JSON value.
    ///
    /// Anything other than an object yields empty inputs.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            Value::Null => Self::new(),
            other => {
                tracing::warn!(kind = json_kind(&other), "Step inputs are not an object, ignoring");
                Self::new()
            }
        }
    }

    /// Read inputs from a reader holding a JSON document.
    ///
    /// Unreadable or malformed documents are logged and treated as empty.
    pub fn from_reader<R: Read>(mut reader: R) -> Self {
        let mut raw = String::new();
        if let Err(e) = reader.read_to_string(&mut raw) {
            tracing::warn!(error = %e, "Failed to read step inputs");
            return Self::new();
        }

        if raw.trim().is_empty() {
            return Self::new();
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::warn!(error = %e, "Step inputs are not valid JSON, ignoring");
                Self::new()
            }
        }
    }

    /// Set an input.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Get an input.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Get an input only if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

/// Named outputs published once at the end of a successful run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutputs {
    values: Map<String, Value>,
}

impl StepOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an output, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all outputs as a JSON object.
    pub fn as_json(&self) -> Value {
        Value::Object(self.values.clone())
    }

    /// Write the outputs as one JSON document followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        serde_json::to_writer(&mut writer, &self.values)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

/// Read the step inputs from standard input.
pub fn get_inputs() -> StepInputs {
    StepInputs::from_reader(std::io::stdin().lock())
}

/// Publish the step outputs on standard output.
pub fn set_outputs(outputs: &StepOutputs) -> std::io::Result<()> {
    outputs.write_to(std::io::stdout().lock())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
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
    fn test_inputs_from_reader() {
        let inputs = StepInputs::from_reader(r#"{"name": "Alice", "count": 3}"#.as_bytes());

        assert_eq!(inputs.get_str("name"), Some("Alice"));
        assert_eq!(inputs.get("count"), Some(&Value::from(3)));
        assert_eq!(inputs.get_str("count"), None);
        assert!(inputs.get("missing").is_none());
    }

    #[test]
    fn test_malformed_inputs_are_empty() {
        assert_eq!(StepInputs::from_reader("".as_bytes()), StepInputs::new());
        assert_eq!(StepInputs::from_reader("   \n".as_bytes()), StepInputs::new());
        assert_eq!(StepInputs::from_reader("not json".as_bytes()), StepInputs::new());
        assert_eq!(StepInputs::from_reader("[1, 2]".as_bytes()), StepInputs::new());
        assert_eq!(StepInputs::from_reader("null".as_bytes()), StepInputs::new());
    }

    #[test]
    fn test_outputs_write_single_document() {
        let mut outputs = StepOutputs::new();
        outputs.set("message", "Hello, World!");
        outputs.set("duration", Value::Null);

        let mut buf = Vec::new();
        outputs.write_to(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, json!({"message": "Hello, World!", "duration": null}));
        assert_eq!(outputs.as_json(), parsed);
    }

    #[test]
    fn test_outputs_overwrite() {
        let mut outputs = StepOutputs::new();
        assert!(outputs.is_empty());

        outputs.set("body", "first");
        outputs.set("body", "second");

        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs.get("body"), Some(&Value::String("second".to_string())));
    }
}
