//! Response envelope types.
//!
//! Every backend response is `{success, errors, result}`; callers only ever
//! see the `result` payload, the rest feeds the error pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response wrapper emitted by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Option<Value>,
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            errors: None,
            result: Some(result),
        }
    }

    pub fn failed(errors: Value) -> Self {
        Self {
            success: false,
            errors: Some(errors),
            result: None,
        }
    }
}

/// Result payload of every delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrudStatus {
    pub status: bool,
}

/// Result payload of endpoints that enqueue background work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTicket {
    pub task_id: String,
}

/// Serialized enum member, e.g. a redirector beacon type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumItem {
    pub code: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_camel_case_result() {
        let raw = r#"{"success":true,"errors":null,"result":{"taskId":"abc-123"}}"#;
        let envelope: Envelope<TaskTicket> = serde_json::from_str(raw).unwrap();
        assert!(envelope.success);
        assert!(envelope.errors.is_none());
        assert_eq!(envelope.result.unwrap().task_id, "abc-123");
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let raw = r#"{"success":false}"#;
        let envelope: Envelope<CrudStatus> = serde_json::from_str(raw).unwrap();
        assert!(!envelope.success);
        assert!(envelope.errors.is_none());
        assert!(envelope.result.is_none());
    }

    #[test]
    fn failed_envelope_keeps_error_payload() {
        let envelope: Envelope<CrudStatus> =
            Envelope::failed(serde_json::json!([{"msg": "domain already exists"}]));
        assert!(!envelope.success);
        assert!(envelope.result.is_none());
        assert!(envelope.errors.unwrap().is_array());
    }
}
