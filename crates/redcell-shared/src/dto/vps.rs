//! VPS inventory, provisioning and provider-spec types.
//!
//! Spec codes and addresses come back in whatever shape the underlying
//! provider uses (string or number), so those fields stay `Value`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provisioned (or provisioning) server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    pub isp_id: i64,
    #[serde(default)]
    pub ip: Option<Value>,
    #[serde(default)]
    pub server_id: Option<i64>,
    pub hostname: String,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub status_name: Option<String>,
    #[serde(default)]
    pub status_msg: Option<String>,
    #[serde(default)]
    pub isp_provider_name: Option<String>,
}

/// Body of `POST vps/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsCreate {
    pub hostname: String,
    pub isp_id: i64,
    pub region_code: String,
    pub os_code: String,
    pub plan_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Operating system option offered by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsSpecOs {
    pub name: String,
    pub os_code: Value,
    #[serde(default)]
    pub region_codes: Vec<Value>,
}

/// Region option offered by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsSpecRegion {
    pub name: String,
    pub region_code: Value,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub plan_codes: Vec<Value>,
}

/// Plan option offered by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsSpecPlan {
    pub name: String,
    pub plan_code: Value,
    #[serde(default)]
    pub region_codes: Option<Vec<Value>>,
    pub bandwidth: f64,
    pub ram: i64,
    pub vcpu: i64,
    pub disk: i64,
    #[serde(default)]
    pub price_monthly: Option<f64>,
    #[serde(default)]
    pub price_hourly: Option<f64>,
    #[serde(default)]
    pub price_yearly: Option<f64>,
}

/// The full spec sheet for one ISP, fetched before provisioning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsSpecs {
    #[serde(default)]
    pub os: Vec<VpsSpecOs>,
    #[serde(default)]
    pub region: Vec<VpsSpecRegion>,
    #[serde(default)]
    pub plan: Vec<VpsSpecPlan>,
}

/// SSH key registered at a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshKey {
    pub name: String,
    pub public_key: String,
    #[serde(default)]
    pub private_key: Option<String>,
    pub isp_id: i64,
    #[serde(default)]
    pub ssh_key_id: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub fingerprint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_accepts_string_or_numeric_ip() {
        let raw = r#"{"ispId":1,"hostname":"a","ip":"10.0.0.1"}"#;
        let item: VpsItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.ip, Some(Value::String("10.0.0.1".into())));

        let raw = r#"{"ispId":1,"hostname":"b","ip":167772161}"#;
        let item: VpsItem = serde_json::from_str(raw).unwrap();
        assert!(item.ip.unwrap().is_number());
    }

    #[test]
    fn create_body_uses_camel_case() {
        let create = VpsCreate {
            hostname: "edge-01".into(),
            isp_id: 4,
            region_code: "ewr".into(),
            os_code: "387".into(),
            plan_code: "vc2-1c-1gb".into(),
            ssh_keys: Some(vec!["key-1".into()]),
            remark: None,
        };
        let raw = serde_json::to_string(&create).unwrap();
        assert!(raw.contains(r#""ispId":4"#));
        assert!(raw.contains(r#""regionCode":"ewr""#));
        assert!(raw.contains(r#""sshKeys":["key-1"]"#));
        assert!(!raw.contains("remark"));
    }

    #[test]
    fn specs_default_to_empty_groups() {
        let specs: VpsSpecs = serde_json::from_str("{}").unwrap();
        assert!(specs.os.is_empty() && specs.region.is_empty() && specs.plan.is_empty());
    }
}
