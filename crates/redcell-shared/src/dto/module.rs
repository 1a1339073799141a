//! Deployed module types: Cobalt Strike team servers and redirectors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body of `POST modules/team_servers/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamServerCreate {
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c2_profile_id: Option<i64>,
    pub vps_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub cs_download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_password: Option<String>,
}

/// Deployed team server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamServer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub c2_profile_id: Option<i64>,
    pub vps_id: i64,
    #[serde(default)]
    pub kill_date: Option<String>,
    pub hostname: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub isp_provider_name: Option<String>,
    #[serde(default)]
    pub c2_profile_name: Option<String>,
}

/// Body of `POST modules/redirectors/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectorCreate {
    pub beacon_type: String,
    pub team_server_id: i64,
    pub listener_port: u16,
    pub redirect_domain: String,
    pub vps_id: i64,
    pub domain_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Deployed redirector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redirector {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    pub beacon_type: String,
    #[serde(default)]
    pub beacon_type_name: Option<String>,
    pub team_server_id: i64,
    pub listener_port: u16,
    pub redirect_domain: String,
    pub vps_id: i64,
    pub domain_id: i64,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_server_create_omits_absent_optionals() {
        let create = TeamServerCreate {
            port: 9990,
            password: None,
            c2_profile_id: Some(2),
            vps_id: 11,
            kill_date: None,
            remark: None,
            cs_download_url: "https://files.example.com/cs.tgz".into(),
            zip_password: None,
        };
        let raw = serde_json::to_string(&create).unwrap();
        assert!(raw.contains(r#""port":9990"#));
        assert!(raw.contains(r#""csDownloadUrl""#));
        assert!(!raw.contains("password"));
        assert!(!raw.contains("killDate"));
    }

    #[test]
    fn redirector_parses_wire_shape() {
        let raw = r#"{
            "id": 5,
            "beaconType": "https",
            "beaconTypeName": "HTTPS",
            "teamServerId": 2,
            "listenerPort": 443,
            "redirectDomain": "cdn.example.com",
            "vpsId": 9,
            "domainId": 4,
            "hostname": "rdr-01",
            "ip": "203.0.113.7"
        }"#;
        let redirector: Redirector = serde_json::from_str(raw).unwrap();
        assert_eq!(redirector.beacon_type, "https");
        assert_eq!(redirector.listener_port, 443);
    }
}
