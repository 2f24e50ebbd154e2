use serde::Serialize;
use serde_json::Value;

/// Result envelope handed back to the automation platform.
///
/// `readable_output` is always the compact JSON rendering of `outputs`;
/// no formatting is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResults {
    pub readable_output: String,
    pub outputs: Value,
}

impl CommandResults {
    pub fn from_raw(outputs: Value) -> Self {
        Self {
            readable_output: outputs.to_string(),
            outputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn readable_output_is_string_form_of_outputs() {
        let results = CommandResults::from_raw(json!({"name": "m1", "active": true}));
        assert_eq!(results.readable_output, r#"{"name":"m1","active":true}"#);
        assert_eq!(results.outputs, json!({"name": "m1", "active": true}));
    }

    #[test]
    fn scalar_outputs_are_wrapped_too() {
        let results = CommandResults::from_raw(json!(null));
        assert_eq!(results.readable_output, "null");
    }
}
