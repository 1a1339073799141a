//! Domain endpoints: inventory, marketplace, reputation, monitors and
//! grow tasks.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use redcell_core::ports::{ApiResult, DomainApi};
use redcell_shared::dto::{
    DomainCreate, DomainGrow, DomainGrowCreate, DomainItem, DomainMonitor, DomainMonitorCreate,
    DomainPurchase, DomainReputation, DomainVerify, PurchasableDomain, PurchasableDomainQuery,
};
use redcell_shared::{CrudStatus, Page, PageQuery, TaskTicket};

use crate::http::ApiClient;

#[async_trait]
impl DomainApi for ApiClient {
    async fn get_domains(&self, query: &PageQuery) -> ApiResult<Page<DomainItem>> {
        self.execute(self.request(Method::GET, "domains/").query(query))
            .await
    }

    async fn create_domain(&self, domain: &DomainCreate) -> ApiResult<DomainItem> {
        self.execute(self.request(Method::POST, "domains/").json(domain))
            .await
    }

    async fn delete_domain(&self, domain_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(Method::DELETE, &format!("domains/{domain_id}")))
            .await
    }

    /// Kick off a DNS re-sync for every registered domain.
    async fn reload_dns_records(&self) -> ApiResult<TaskTicket> {
        self.execute(self.request(Method::GET, "domains/reload"))
            .await
    }

    async fn search_purchasable(
        &self,
        query: &PurchasableDomainQuery,
    ) -> ApiResult<Vec<PurchasableDomain>> {
        self.execute(self.request(Method::POST, "domains/purchasable").json(query))
            .await
    }

    async fn purchase_domain(&self, purchase: &DomainPurchase) -> ApiResult<Value> {
        self.execute(self.request(Method::POST, "domains/purchase").json(purchase))
            .await
    }

    async fn verify_domain(&self, verify: &DomainVerify) -> ApiResult<DomainReputation> {
        self.execute(self.request(Method::POST, "domains/verify").json(verify))
            .await
    }

    async fn get_domain_monitors(&self, query: &PageQuery) -> ApiResult<Page<DomainMonitor>> {
        self.execute(self.request(Method::GET, "domains/monitor").query(query))
            .await
    }

    async fn create_domain_monitor(
        &self,
        monitor: &DomainMonitorCreate,
    ) -> ApiResult<DomainMonitor> {
        self.execute(self.request(Method::POST, "domains/monitor").json(monitor))
            .await
    }

    async fn update_domain_monitor(
        &self,
        monitor_id: i64,
        monitor: &DomainMonitorCreate,
    ) -> ApiResult<Value> {
        self.execute(
            self.request(Method::PUT, &format!("domains/monitor/{monitor_id}"))
                .json(monitor),
        )
        .await
    }

    async fn delete_domain_monitor(&self, monitor_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(Method::DELETE, &format!("domains/monitor/{monitor_id}")))
            .await
    }

    async fn get_domain_grow_tasks(&self, query: &PageQuery) -> ApiResult<Page<DomainGrow>> {
        self.execute(self.request(Method::GET, "domains/grow").query(query))
            .await
    }

    async fn create_domain_grow(&self, grow: &DomainGrowCreate) -> ApiResult<DomainGrow> {
        self.execute(self.request(Method::POST, "domains/grow").json(grow))
            .await
    }

    async fn delete_domain_grow(&self, grow_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(Method::DELETE, &format!("domains/grow/{grow_id}")))
            .await
    }
}
