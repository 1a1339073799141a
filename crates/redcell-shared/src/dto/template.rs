//! Site templates and the deployment SSH keypair.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::FilePayload;

/// Uploaded site template archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteTemplate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    pub name: String,
    #[serde(default)]
    pub zip_file_name: Option<String>,
    #[serde(default)]
    pub zip_file_size: Option<String>,
}

/// Multipart body of `POST config/template/site`: name, then the zip under
/// its original filename, then remark.
#[derive(Debug, Clone)]
pub struct SiteTemplateForm {
    pub name: String,
    pub zip_file: FilePayload,
    pub remark: Option<String>,
}

impl SiteTemplateForm {
    pub fn new(name: impl Into<String>, zip_file: FilePayload) -> Self {
        Self {
            name: name.into(),
            zip_file,
            remark: None,
        }
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }
}

/// Body of `PUT config/template/site/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteTemplateUpdate {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Keypair the backend uses when provisioning servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshConfig {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub remark: Option<String>,
    pub private_key: String,
    pub public_key: String,
}
