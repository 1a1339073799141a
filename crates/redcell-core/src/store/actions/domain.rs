//! Domain-module actions: inventory, purchase, reputation checks,
//! health monitors and grow tasks.

use serde_json::Value;

use redcell_shared::dto::{
    DomainCreate, DomainGrow, DomainGrowCreate, DomainItem, DomainMonitor, DomainMonitorCreate,
    DomainPurchase, DomainReputation, DomainVerify, PurchasableDomain, PurchasableDomainQuery,
};
use redcell_shared::{CrudStatus, Page, PageQuery, TaskTicket};

use crate::domain::Notification;
use crate::error::ApiError;
use crate::store::actions::Store;

impl Store {
    pub async fn get_domains(&self, query: &PageQuery) -> Result<Page<DomainItem>, ApiError> {
        self.api().get_domains(query).await
    }

    /// Register a domain already owned at the given provider.
    pub async fn create_domain(&self, domain: &DomainCreate) -> Result<DomainItem, ApiError> {
        let created = self.api().create_domain(domain).await?;
        self.notify(Notification::success("Domain created"));
        Ok(created)
    }

    pub async fn delete_domain(&self, domain_id: i64) -> Result<CrudStatus, ApiError> {
        self.api().delete_domain(domain_id).await
    }

    pub async fn reload_dns_records(&self) -> Result<TaskTicket, ApiError> {
        let ticket = self.api().reload_dns_records().await?;
        self.notify(Notification::success("DNS records reloaded"));
        Ok(ticket)
    }

    pub async fn search_purchasable(
        &self,
        query: &PurchasableDomainQuery,
    ) -> Result<Vec<PurchasableDomain>, ApiError> {
        self.api().search_purchasable(query).await
    }

    pub async fn purchase_domain(&self, purchase: &DomainPurchase) -> Result<Value, ApiError> {
        let result = self.api().purchase_domain(purchase).await?;
        self.notify(Notification::success("Domain purchased"));
        Ok(result)
    }

    /// Reputation lookups across the blocklist vendors.
    pub async fn verify_domain(&self, verify: &DomainVerify) -> Result<DomainReputation, ApiError> {
        self.api().verify_domain(verify).await
    }

    pub async fn get_domain_monitors(
        &self,
        query: &PageQuery,
    ) -> Result<Page<DomainMonitor>, ApiError> {
        self.api().get_domain_monitors(query).await
    }

    pub async fn create_domain_monitor(
        &self,
        monitor: &DomainMonitorCreate,
    ) -> Result<DomainMonitor, ApiError> {
        let created = self.api().create_domain_monitor(monitor).await?;
        self.notify(Notification::success("Domain monitor created"));
        Ok(created)
    }

    pub async fn update_domain_monitor(
        &self,
        monitor_id: i64,
        monitor: &DomainMonitorCreate,
    ) -> Result<Value, ApiError> {
        let updated = self.api().update_domain_monitor(monitor_id, monitor).await?;
        self.notify(Notification::success("Domain monitor updated"));
        Ok(updated)
    }

    pub async fn delete_domain_monitor(&self, monitor_id: i64) -> Result<CrudStatus, ApiError> {
        self.api().delete_domain_monitor(monitor_id).await
    }

    pub async fn get_domain_grow_tasks(
        &self,
        query: &PageQuery,
    ) -> Result<Page<DomainGrow>, ApiError> {
        self.api().get_domain_grow_tasks(query).await
    }

    /// Stand up a benign site on the domain to age its reputation.
    pub async fn create_domain_grow(
        &self,
        grow: &DomainGrowCreate,
    ) -> Result<DomainGrow, ApiError> {
        let created = self.api().create_domain_grow(grow).await?;
        self.notify(Notification::success("Grow task created"));
        Ok(created)
    }

    pub async fn delete_domain_grow(&self, grow_id: i64) -> Result<CrudStatus, ApiError> {
        let status = self.api().delete_domain_grow(grow_id).await?;
        self.notify(Notification::success("Grow task removed"));
        Ok(status)
    }
}
