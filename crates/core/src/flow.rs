//! Network-flow records exchanged with the flow store and the model service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// A flow record as submitted for prediction or returned by the store.
///
/// The field set is defined upstream, so the record is an untyped JSON
/// object. Any other JSON value (array, string, null...) is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkFlow(pub Map<String, Value>);

impl NetworkFlow {
    /// Parse a raw response body into a flow record.
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(body)?)
    }
}

impl TryFrom<Value> for NetworkFlow {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(CoreError::Validation(format!(
                "flow must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// A stored flow record: the store's document identifier plus the flow
/// fields at the same level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkFlowFull {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
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
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn from_slice_accepts_objects() {
        let flow = NetworkFlow::from_slice(br#"{"proto":"tcp","bytes":512}"#).unwrap();
        assert_eq!(flow.0["proto"], "tcp");
        assert_eq!(flow.0["bytes"], 512);
    }

    #[test]
    fn from_slice_rejects_invalid_json() {
        assert_matches!(
            NetworkFlow::from_slice(b"<html>oops</html>"),
            Err(CoreError::Malformed(_))
        );
    }

    #[test]
    fn from_slice_rejects_non_objects() {
        assert_matches!(
            NetworkFlow::from_slice(b"[1, 2, 3]"),
            Err(CoreError::Malformed(_))
        );
    }

    #[test]
    fn try_from_value_names_the_offending_kind() {
        let err = NetworkFlow::try_from(json!("tcp")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: flow must be a JSON object, got string"
        );
    }

    #[test]
    fn full_flow_keeps_id_next_to_fields() {
        let full: NetworkFlowFull =
            serde_json::from_value(json!({"id": "f1", "proto": "udp", "dst_port": 53})).unwrap();
        assert_eq!(full.id, "f1");
        assert_eq!(full.fields.len(), 2);

        let back = serde_json::to_value(&full).unwrap();
        assert_eq!(back, json!({"id": "f1", "proto": "udp", "dst_port": 53}));
    }

    #[test]
    fn full_flow_requires_id() {
        let parsed = serde_json::from_value::<NetworkFlowFull>(json!({"proto": "udp"}));
        assert!(parsed.is_err());
    }
}
