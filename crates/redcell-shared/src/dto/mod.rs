//! Data Transfer Objects - request/response types for every backend resource.
//!
//! All wire names are camelCase; timestamps are naive ISO-8601 as the
//! backend emits them. Fields the backend types loosely (provider-specific
//! codes, raw action results) stay `serde_json::Value`.

pub mod c2;
pub mod domain;
pub mod isp;
pub mod module;
pub mod template;
pub mod user;
pub mod vps;

pub use c2::{C2Profile, C2ProfileForm, C2ProfileUpdate};
pub use domain::{
    DnsRecord, DomainCreate, DomainGrow, DomainGrowCreate, DomainHealthRecord, DomainItem,
    DomainMonitor, DomainMonitorCreate, DomainPurchase, DomainReputation, DomainVerify,
    PurchasableDomain, PurchasableDomainQuery,
};
pub use isp::{IspAvailable, IspKind, IspProfile, IspProfileCreate, IspProfileUpdate, IspProvider};
pub use module::{Redirector, RedirectorCreate, TeamServer, TeamServerCreate};
pub use template::{SiteTemplate, SiteTemplateForm, SiteTemplateUpdate, SshConfig};
pub use user::{Credentials, Token, UserCreate, UserProfile, UserUpdate};
pub use vps::{SshKey, VpsCreate, VpsItem, VpsSpecOs, VpsSpecPlan, VpsSpecRegion, VpsSpecs};

/// File part of a multipart upload, keeping the original filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl FilePayload {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }
}
