//! Backend API ports, one trait per resource family.
//!
//! Method shapes mirror the REST contract: list endpoints take a
//! [`PageQuery`], deletes answer with a [`CrudStatus`], long-running
//! provisioning answers with a [`TaskTicket`]. Provider passthrough
//! endpoints whose payloads the backend does not normalize come back
//! as raw [`Value`]s.

use async_trait::async_trait;
use serde_json::Value;

use redcell_shared::dto::{
    C2Profile, C2ProfileForm, C2ProfileUpdate, Credentials, DomainCreate, DomainGrow,
    DomainGrowCreate, DomainItem, DomainMonitor, DomainMonitorCreate, DomainPurchase,
    DomainReputation, DomainVerify, FilePayload, IspAvailable, IspKind, IspProfile,
    IspProfileCreate, IspProfileUpdate, PurchasableDomain, PurchasableDomainQuery, Redirector,
    RedirectorCreate, SiteTemplate, SiteTemplateForm, SiteTemplateUpdate, SshConfig, SshKey,
    TeamServer, TeamServerCreate, Token, UserCreate, UserProfile, UserUpdate, VpsCreate, VpsItem,
    VpsSpecs,
};
use redcell_shared::{CrudStatus, EnumItem, Page, PageQuery, TaskTicket};

use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn log_in(&self, credentials: &Credentials) -> ApiResult<Token>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn get_me(&self) -> ApiResult<UserProfile>;
    async fn update_me(&self, update: &UserUpdate) -> ApiResult<UserProfile>;
    async fn get_users(&self) -> ApiResult<Vec<UserProfile>>;
    async fn create_user(&self, user: &UserCreate) -> ApiResult<UserProfile>;
    async fn update_user(&self, user_id: i64, update: &UserUpdate) -> ApiResult<UserProfile>;
}

/// ISP profiles, C2 profiles, site templates and the SSH key pair.
#[async_trait]
pub trait ConfigApi: Send + Sync {
    async fn get_available_isp(&self) -> ApiResult<IspAvailable>;
    async fn get_isp_profiles(&self, kind: IspKind, query: &PageQuery)
    -> ApiResult<Page<IspProfile>>;
    async fn create_isp_profile(
        &self,
        kind: IspKind,
        profile: &IspProfileCreate,
    ) -> ApiResult<IspProfile>;
    async fn update_isp_profile(
        &self,
        profile_id: i64,
        update: &IspProfileUpdate,
    ) -> ApiResult<IspProfile>;
    async fn delete_isp_profile(&self, profile_id: i64) -> ApiResult<CrudStatus>;
    async fn reload_isp_config(&self, kind: IspKind) -> ApiResult<TaskTicket>;

    async fn get_c2_profiles(&self, query: &PageQuery) -> ApiResult<Page<C2Profile>>;
    async fn get_c2_profile(&self, profile_id: i64) -> ApiResult<C2Profile>;
    async fn create_c2_profile(&self, form: &C2ProfileForm) -> ApiResult<C2Profile>;
    async fn update_c2_profile(
        &self,
        profile_id: i64,
        update: &C2ProfileUpdate,
    ) -> ApiResult<C2Profile>;
    async fn delete_c2_profile(&self, profile_id: i64) -> ApiResult<CrudStatus>;

    async fn get_site_templates(&self, query: &PageQuery) -> ApiResult<Page<SiteTemplate>>;
    async fn create_site_template(&self, form: &SiteTemplateForm) -> ApiResult<SiteTemplate>;
    async fn update_site_template(&self, update: &SiteTemplateUpdate) -> ApiResult<CrudStatus>;
    async fn upload_site_template_archive(
        &self,
        template_id: i64,
        archive: &FilePayload,
    ) -> ApiResult<bool>;
    async fn delete_site_template(&self, template_id: i64) -> ApiResult<CrudStatus>;

    async fn get_ssh_config(&self) -> ApiResult<Option<SshConfig>>;
    async fn create_ssh_config(&self) -> ApiResult<Option<SshConfig>>;
}

#[async_trait]
pub trait VpsApi: Send + Sync {
    async fn get_vps_list(&self, query: &PageQuery) -> ApiResult<Page<VpsItem>>;
    async fn create_vps(&self, profile: &VpsCreate) -> ApiResult<TaskTicket>;
    async fn get_vps_specs(&self, isp_id: i64) -> ApiResult<VpsSpecs>;
    async fn get_isp_ssh_keys(&self, isp_id: i64) -> ApiResult<Vec<SshKey>>;
    async fn destroy_vps(&self, vps_id: i64) -> ApiResult<CrudStatus>;
    async fn reboot_vps(&self, vps_id: i64) -> ApiResult<Value>;
    async fn reinstall_vps(&self, vps_id: i64) -> ApiResult<Value>;
    async fn shutdown_vps(&self, vps_id: i64) -> ApiResult<Value>;
    async fn start_vps(&self, vps_id: i64) -> ApiResult<Value>;
}

#[async_trait]
pub trait DomainApi: Send + Sync {
    async fn get_domains(&self, query: &PageQuery) -> ApiResult<Page<DomainItem>>;
    async fn create_domain(&self, domain: &DomainCreate) -> ApiResult<DomainItem>;
    async fn delete_domain(&self, domain_id: i64) -> ApiResult<CrudStatus>;
    async fn reload_dns_records(&self) -> ApiResult<TaskTicket>;
    async fn search_purchasable(
        &self,
        query: &PurchasableDomainQuery,
    ) -> ApiResult<Vec<PurchasableDomain>>;
    async fn purchase_domain(&self, purchase: &DomainPurchase) -> ApiResult<Value>;
    async fn verify_domain(&self, verify: &DomainVerify) -> ApiResult<DomainReputation>;

    async fn get_domain_monitors(&self, query: &PageQuery) -> ApiResult<Page<DomainMonitor>>;
    async fn create_domain_monitor(&self, monitor: &DomainMonitorCreate)
    -> ApiResult<DomainMonitor>;
    async fn update_domain_monitor(
        &self,
        monitor_id: i64,
        monitor: &DomainMonitorCreate,
    ) -> ApiResult<Value>;
    async fn delete_domain_monitor(&self, monitor_id: i64) -> ApiResult<CrudStatus>;

    async fn get_domain_grow_tasks(&self, query: &PageQuery) -> ApiResult<Page<DomainGrow>>;
    async fn create_domain_grow(&self, grow: &DomainGrowCreate) -> ApiResult<DomainGrow>;
    async fn delete_domain_grow(&self, grow_id: i64) -> ApiResult<CrudStatus>;
}

#[async_trait]
pub trait ModuleApi: Send + Sync {
    async fn get_team_servers(&self, query: &PageQuery) -> ApiResult<Page<TeamServer>>;
    async fn create_team_server(&self, team_server: &TeamServerCreate) -> ApiResult<TeamServer>;
    async fn delete_team_server(&self, team_server_id: i64) -> ApiResult<CrudStatus>;
    async fn get_redirectors(&self, query: &PageQuery) -> ApiResult<Page<Redirector>>;
    async fn create_redirector(&self, redirector: &RedirectorCreate) -> ApiResult<Redirector>;
    async fn delete_redirector(&self, redirector_id: i64) -> ApiResult<CrudStatus>;
    async fn get_beacon_types(&self) -> ApiResult<Vec<EnumItem>>;
}

/// Everything the store needs from the backend, in one handle.
pub trait BackendApi: AuthApi + UserApi + ConfigApi + VpsApi + DomainApi + ModuleApi {}

impl<T> BackendApi for T where T: AuthApi + UserApi + ConfigApi + VpsApi + DomainApi + ModuleApi {}
