//! Module endpoints: team servers and redirectors.

use async_trait::async_trait;
use reqwest::Method;

use redcell_core::ports::{ApiResult, ModuleApi};
use redcell_shared::dto::{Redirector, RedirectorCreate, TeamServer, TeamServerCreate};
use redcell_shared::{CrudStatus, EnumItem, Page, PageQuery};

use crate::http::ApiClient;

#[async_trait]
impl ModuleApi for ApiClient {
    async fn get_team_servers(&self, query: &PageQuery) -> ApiResult<Page<TeamServer>> {
        self.execute(self.request(Method::GET, "modules/team_servers/").query(query))
            .await
    }

    async fn create_team_server(&self, team_server: &TeamServerCreate) -> ApiResult<TeamServer> {
        self.execute(
            self.request(Method::POST, "modules/team_servers/")
                .json(team_server),
        )
        .await
    }

    async fn delete_team_server(&self, team_server_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(
            Method::DELETE,
            &format!("modules/team_servers/{team_server_id}"),
        ))
        .await
    }

    async fn get_redirectors(&self, query: &PageQuery) -> ApiResult<Page<Redirector>> {
        self.execute(self.request(Method::GET, "modules/redirectors/").query(query))
            .await
    }

    async fn create_redirector(&self, redirector: &RedirectorCreate) -> ApiResult<Redirector> {
        self.execute(
            self.request(Method::POST, "modules/redirectors/")
                .json(redirector),
        )
        .await
    }

    async fn delete_redirector(&self, redirector_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(
            Method::DELETE,
            &format!("modules/redirectors/{redirector_id}"),
        ))
        .await
    }

    async fn get_beacon_types(&self) -> ApiResult<Vec<EnumItem>> {
        self.execute(self.request(Method::GET, "modules/beacon_types"))
            .await
    }
}
