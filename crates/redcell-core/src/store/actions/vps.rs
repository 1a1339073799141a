//! VPS-module actions: inventory, provisioning and power control.

use serde_json::Value;

use redcell_shared::dto::{SshKey, VpsCreate, VpsItem, VpsSpecs};
use redcell_shared::{CrudStatus, Page, PageQuery, TaskTicket};

use crate::domain::Notification;
use crate::error::ApiError;
use crate::store::actions::Store;

impl Store {
    pub async fn get_vps_list(&self, query: &PageQuery) -> Result<Page<VpsItem>, ApiError> {
        self.api().get_vps_list(query).await
    }

    /// Provisioning is asynchronous on the backend; the ticket is the
    /// only immediate result.
    pub async fn create_vps(&self, profile: &VpsCreate) -> Result<TaskTicket, ApiError> {
        let ticket = self.api().create_vps(profile).await?;
        self.notify(Notification::success("VPS created"));
        Ok(ticket)
    }

    /// OS, region and plan catalogs for one provider profile.
    pub async fn get_vps_specs(&self, isp_id: i64) -> Result<VpsSpecs, ApiError> {
        self.api().get_vps_specs(isp_id).await
    }

    pub async fn get_isp_ssh_keys(&self, isp_id: i64) -> Result<Vec<SshKey>, ApiError> {
        self.api().get_isp_ssh_keys(isp_id).await
    }

    pub async fn destroy_vps(&self, vps_id: i64) -> Result<CrudStatus, ApiError> {
        let status = self.api().destroy_vps(vps_id).await?;
        self.notify(Notification::success("VPS destroyed"));
        Ok(status)
    }

    pub async fn reboot_vps(&self, vps_id: i64) -> Result<Value, ApiError> {
        let result = self.api().reboot_vps(vps_id).await?;
        self.notify(Notification::success("VPS rebooted"));
        Ok(result)
    }

    pub async fn reinstall_vps(&self, vps_id: i64) -> Result<Value, ApiError> {
        let result = self.api().reinstall_vps(vps_id).await?;
        self.notify(Notification::success("VPS reinstalled"));
        Ok(result)
    }

    pub async fn shutdown_vps(&self, vps_id: i64) -> Result<Value, ApiError> {
        let result = self.api().shutdown_vps(vps_id).await?;
        self.notify(Notification::success("VPS shut down"));
        Ok(result)
    }

    pub async fn start_vps(&self, vps_id: i64) -> Result<Value, ApiError> {
        let result = self.api().start_vps(vps_id).await?;
        self.notify(Notification::success("VPS started"));
        Ok(result)
    }
}
