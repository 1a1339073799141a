//! VPS endpoints. Power actions are provider passthroughs and answer
//! with whatever the provider returned.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use redcell_core::ports::{ApiResult, VpsApi};
use redcell_shared::dto::{SshKey, VpsCreate, VpsItem, VpsSpecs};
use redcell_shared::{CrudStatus, Page, PageQuery, TaskTicket};

use crate::http::ApiClient;

#[async_trait]
impl VpsApi for ApiClient {
    async fn get_vps_list(&self, query: &PageQuery) -> ApiResult<Page<VpsItem>> {
        self.execute(self.request(Method::GET, "vps/").query(query))
            .await
    }

    async fn create_vps(&self, profile: &VpsCreate) -> ApiResult<TaskTicket> {
        self.execute(self.request(Method::POST, "vps/").json(profile))
            .await
    }

    async fn get_vps_specs(&self, isp_id: i64) -> ApiResult<VpsSpecs> {
        self.execute(
            self.request(Method::GET, "vps/specs")
                .query(&[("ispId", isp_id)]),
        )
        .await
    }

    async fn get_isp_ssh_keys(&self, isp_id: i64) -> ApiResult<Vec<SshKey>> {
        self.execute(self.request(Method::GET, &format!("vps/isp/{isp_id}/ssh_keys")))
            .await
    }

    async fn destroy_vps(&self, vps_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(Method::DELETE, &format!("vps/{vps_id}")))
            .await
    }

    async fn reboot_vps(&self, vps_id: i64) -> ApiResult<Value> {
        self.execute(self.request(Method::GET, &format!("vps/{vps_id}/reboot")))
            .await
    }

    async fn reinstall_vps(&self, vps_id: i64) -> ApiResult<Value> {
        self.execute(self.request(Method::GET, &format!("vps/{vps_id}/reinstall")))
            .await
    }

    async fn shutdown_vps(&self, vps_id: i64) -> ApiResult<Value> {
        self.execute(self.request(Method::GET, &format!("vps/{vps_id}/shutdown")))
            .await
    }

    async fn start_vps(&self, vps_id: i64) -> ApiResult<Value> {
        self.execute(self.request(Method::GET, &format!("vps/{vps_id}/start")))
            .await
    }
}
