//! Module actions: team servers and redirectors.

use redcell_shared::dto::{Redirector, RedirectorCreate, TeamServer, TeamServerCreate};
use redcell_shared::{CrudStatus, EnumItem, Page, PageQuery};

use crate::domain::Notification;
use crate::error::ApiError;
use crate::store::actions::Store;

impl Store {
    pub async fn get_team_servers(&self, query: &PageQuery) -> Result<Page<TeamServer>, ApiError> {
        self.api().get_team_servers(query).await
    }

    pub async fn create_team_server(
        &self,
        team_server: &TeamServerCreate,
    ) -> Result<TeamServer, ApiError> {
        let created = self.api().create_team_server(team_server).await?;
        self.notify(Notification::success("Team server created"));
        Ok(created)
    }

    pub async fn delete_team_server(&self, team_server_id: i64) -> Result<CrudStatus, ApiError> {
        let status = self.api().delete_team_server(team_server_id).await?;
        self.notify(Notification::success("Team server destroyed"));
        Ok(status)
    }

    pub async fn get_redirectors(&self, query: &PageQuery) -> Result<Page<Redirector>, ApiError> {
        self.api().get_redirectors(query).await
    }

    pub async fn create_redirector(
        &self,
        redirector: &RedirectorCreate,
    ) -> Result<Redirector, ApiError> {
        let created = self.api().create_redirector(redirector).await?;
        self.notify(Notification::success("Redirector created"));
        Ok(created)
    }

    pub async fn delete_redirector(&self, redirector_id: i64) -> Result<CrudStatus, ApiError> {
        let status = self.api().delete_redirector(redirector_id).await?;
        self.notify(Notification::success("Redirector destroyed"));
        Ok(status)
    }

    /// Beacon flavors a redirector can forward, from the backend enum.
    pub async fn get_beacon_types(&self) -> Result<Vec<EnumItem>, ApiError> {
        self.api().get_beacon_types().await
    }
}
