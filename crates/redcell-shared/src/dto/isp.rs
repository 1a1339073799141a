//! ISP account profiles - the provider credentials the backend drives
//! domains and VPS instances through.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Discriminator used in `config/isp/{kind}` paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IspKind {
    Domain,
    Vps,
}

impl IspKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            IspKind::Domain => "domain",
            IspKind::Vps => "vps",
        }
    }

    /// Numeric code the backend stores in the `type` column.
    pub const fn code(self) -> i64 {
        match self {
            IspKind::Domain => 1,
            IspKind::Vps => 2,
        }
    }
}

impl std::fmt::Display for IspKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IspKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "domain" => Ok(IspKind::Domain),
            "vps" => Ok(IspKind::Vps),
            other => Err(format!("unknown isp kind: {other}")),
        }
    }
}

/// One selectable provider, e.g. Namesilo or Vultr.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IspProvider {
    pub code: i64,
    pub name: String,
}

/// Providers the backend supports, grouped by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IspAvailable {
    #[serde(default)]
    pub domain: Option<Vec<IspProvider>>,
    #[serde(default)]
    pub vps: Option<Vec<IspProvider>>,
}

/// Configured ISP account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IspProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<i64>,
    #[serde(default)]
    pub provider: Option<i64>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub isp_name: Option<String>,
    #[serde(default)]
    pub isp_api_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub is_test: Option<bool>,
}

/// Body of `POST config/isp/{kind}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IspProfileCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
}

/// Body of `PUT config/isp/{id}`. The kind is immutable on the backend but
/// required in the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IspProfileUpdate {
    #[serde(rename = "type")]
    pub kind: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_path_segment() {
        assert_eq!(IspKind::Domain.as_str(), "domain");
        assert_eq!(IspKind::Vps.as_str(), "vps");
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [IspKind::Domain, IspKind::Vps] {
            assert_eq!(kind.as_str().parse::<IspKind>(), Ok(kind));
        }
        assert!("isp".parse::<IspKind>().is_err());
    }

    #[test]
    fn profile_parses_type_field() {
        let raw = r#"{
            "id": 3,
            "createdOn": "2021-01-02T03:04:05",
            "type": 1,
            "provider": 2,
            "providerName": "vultr",
            "apiKey": "k",
            "isTest": false
        }"#;
        let profile: IspProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.kind, Some(1));
        assert_eq!(profile.provider_name.as_deref(), Some("vultr"));
    }

    #[test]
    fn available_allows_partial_groups() {
        let raw = r#"{"domain": [{"code": 1, "name": "namesilo"}]}"#;
        let available: IspAvailable = serde_json::from_str(raw).unwrap();
        assert_eq!(available.domain.unwrap().len(), 1);
        assert!(available.vps.is_none());
    }
}
