//! Domain inventory, purchasing, reputation and lifecycle-task types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One DNS record attached to a managed domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub domain_id: Option<i64>,
    #[serde(default)]
    pub record_id: Option<String>,
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub ttl: Option<i64>,
    #[serde(default)]
    pub distance: Option<String>,
}

/// Managed domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    pub domain: String,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub name_server: Option<String>,
    #[serde(default)]
    pub dns_records: Option<Vec<DnsRecord>>,
    #[serde(default)]
    pub status: Option<bool>,
}

/// Body of `POST domains/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCreate {
    pub domain: String,
    pub isp_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Body of `POST domains/purchasable`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasableDomainQuery {
    pub isp_id: i64,
    pub domain: String,
}

/// One purchasability search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasableDomain {
    pub text: String,
    #[serde(default)]
    pub price: Option<f64>,
    pub purchasable: bool,
}

/// Body of `POST domains/purchase`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainPurchase {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub isp_id: i64,
    pub provider_name: String,
}

/// Body of `POST domains/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainVerify {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vt_token: Option<String>,
}

/// Reputation report for a domain, one verdict per vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReputation {
    #[serde(default)]
    pub all: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub burned_explanation: Option<String>,
    #[serde(default)]
    pub health_dns: Option<String>,
    #[serde(default)]
    pub talos: Option<String>,
    #[serde(default)]
    pub xforce: Option<String>,
    #[serde(default)]
    pub opendns: Option<String>,
    #[serde(default)]
    pub bluecoat: Option<String>,
    #[serde(default)]
    pub mxtoolbox: Option<String>,
    #[serde(default)]
    pub trendmicro: Option<String>,
    #[serde(default)]
    pub fortiguard: Option<String>,
}

/// Body of `POST domains/monitor` and `PUT domains/monitor/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMonitorCreate {
    pub domain_id: i64,
    pub name: String,
    pub interval: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Point-in-time reputation snapshot recorded by a monitor run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainHealthRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub domain_id: Option<i64>,
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub health_dns: Option<String>,
    #[serde(default)]
    pub talos: Option<String>,
    #[serde(default)]
    pub xforce: Option<String>,
    #[serde(default)]
    pub opendns: Option<String>,
    #[serde(default)]
    pub bluecoat: Option<String>,
    #[serde(default)]
    pub mxtoolbox: Option<String>,
    #[serde(default)]
    pub trendmicro: Option<String>,
    #[serde(default)]
    pub fortiguard: Option<String>,
    #[serde(default)]
    pub last_time: Option<NaiveDateTime>,
}

/// Scheduled reputation monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMonitor {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    pub domain_id: i64,
    #[serde(default)]
    pub domain_name: Option<String>,
    pub name: String,
    pub interval: i64,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub health_records: Option<Vec<DomainHealthRecord>>,
}

/// Body of `POST domains/grow`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainGrowCreate {
    pub isp_id: i64,
    pub vps_id: i64,
    pub domain_id: i64,
    pub site_template_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Reputation-grow task: parks a benign site on the domain until it ages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainGrow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    pub isp_id: i64,
    pub vps_id: i64,
    pub domain_id: i64,
    pub site_template_id: i64,
    #[serde(default)]
    pub isp_provider_name: Option<String>,
    #[serde(default)]
    pub site_template_name: Option<String>,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub vps_hostname: Option<String>,
    #[serde(default)]
    pub vps_ip: Option<String>,
    #[serde(default)]
    pub health_records: Option<Vec<DomainHealthRecord>>,
}
