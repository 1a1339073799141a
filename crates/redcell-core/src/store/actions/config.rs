//! Config-module actions: ISP profiles, C2 profiles, site templates
//! and the operator SSH key pair.

use redcell_shared::dto::{
    C2Profile, C2ProfileForm, C2ProfileUpdate, FilePayload, IspAvailable, IspKind, IspProfile,
    IspProfileCreate, IspProfileUpdate, SiteTemplate, SiteTemplateForm, SiteTemplateUpdate,
    SshConfig,
};
use redcell_shared::{CrudStatus, Page, PageQuery, TaskTicket};

use crate::domain::Notification;
use crate::error::ApiError;
use crate::store::actions::Store;
use crate::store::{getters, mutations};

impl Store {
    /// Providers selectable per module. Fetched once, then served from
    /// the cache for the life of the process.
    pub async fn get_available_isp(&self) -> Result<IspAvailable, ApiError> {
        if let Some(cached) = self.state().read(|state| getters::available_isp(&state.main)) {
            return Ok(cached);
        }
        let available = self.api().get_available_isp().await?;
        self.state()
            .commit(|state| mutations::set_available_isp(&mut state.main, available.clone()));
        Ok(available)
    }

    pub async fn get_domain_isp_list(&self) -> Result<Vec<IspProfile>, ApiError> {
        let page = self
            .api()
            .get_isp_profiles(IspKind::Domain, &PageQuery::all())
            .await?;
        self.state()
            .commit(|state| mutations::set_domain_isp_list(&mut state.main, page.items.clone()));
        Ok(page.items)
    }

    pub async fn get_vps_isp_list(&self) -> Result<Vec<IspProfile>, ApiError> {
        let page = self
            .api()
            .get_isp_profiles(IspKind::Vps, &PageQuery::all())
            .await?;
        self.state()
            .commit(|state| mutations::set_vps_isp_list(&mut state.main, page.items.clone()));
        Ok(page.items)
    }

    pub async fn get_isp_profiles(
        &self,
        kind: IspKind,
        query: &PageQuery,
    ) -> Result<Page<IspProfile>, ApiError> {
        self.api().get_isp_profiles(kind, query).await
    }

    /// Create an ISP profile. The caller gets the error back and the
    /// notification queue records it either way.
    pub async fn create_isp_profile(
        &self,
        kind: IspKind,
        profile: &IspProfileCreate,
    ) -> Result<IspProfile, ApiError> {
        match self.api().create_isp_profile(kind, profile).await {
            Ok(created) => {
                self.notify(Notification::success("ISP profile created"));
                Ok(created)
            }
            Err(err) => {
                self.notify(Notification::error("Failed to create ISP profile"));
                self.check_api_error(&err).await;
                Err(err)
            }
        }
    }

    pub async fn update_isp_profile(
        &self,
        profile_id: i64,
        update: &IspProfileUpdate,
    ) -> Result<IspProfile, ApiError> {
        self.api().update_isp_profile(profile_id, update).await
    }

    pub async fn delete_isp_profile(&self, profile_id: i64) -> Result<CrudStatus, ApiError> {
        self.api().delete_isp_profile(profile_id).await
    }

    /// Re-read provider credentials on the backend side.
    pub async fn reload_isp_config(&self, kind: IspKind) -> Result<TaskTicket, ApiError> {
        let ticket = self.api().reload_isp_config(kind).await?;
        self.notify(Notification::success("ISP config reloaded"));
        Ok(ticket)
    }

    pub async fn get_c2_profiles(&self, query: &PageQuery) -> Result<Page<C2Profile>, ApiError> {
        self.api().get_c2_profiles(query).await
    }

    pub async fn get_c2_profile(&self, profile_id: i64) -> Result<C2Profile, ApiError> {
        self.api().get_c2_profile(profile_id).await
    }

    pub async fn create_c2_profile(&self, form: &C2ProfileForm) -> Result<C2Profile, ApiError> {
        let created = self.api().create_c2_profile(form).await?;
        self.notify(Notification::success("C2 profile created"));
        Ok(created)
    }

    pub async fn update_c2_profile(
        &self,
        profile_id: i64,
        update: &C2ProfileUpdate,
    ) -> Result<C2Profile, ApiError> {
        self.api().update_c2_profile(profile_id, update).await
    }

    pub async fn delete_c2_profile(&self, profile_id: i64) -> Result<CrudStatus, ApiError> {
        self.api().delete_c2_profile(profile_id).await
    }

    pub async fn get_site_templates(
        &self,
        query: &PageQuery,
    ) -> Result<Page<SiteTemplate>, ApiError> {
        self.api().get_site_templates(query).await
    }

    pub async fn create_site_template(
        &self,
        form: &SiteTemplateForm,
    ) -> Result<SiteTemplate, ApiError> {
        let created = self.api().create_site_template(form).await?;
        self.notify(Notification::success("Site template created"));
        Ok(created)
    }

    pub async fn update_site_template(
        &self,
        update: &SiteTemplateUpdate,
    ) -> Result<CrudStatus, ApiError> {
        self.api().update_site_template(update).await
    }

    /// Replace the archive behind an existing template.
    pub async fn upload_site_template_archive(
        &self,
        template_id: i64,
        archive: &FilePayload,
    ) -> Result<bool, ApiError> {
        self.api()
            .upload_site_template_archive(template_id, archive)
            .await
    }

    pub async fn delete_site_template(&self, template_id: i64) -> Result<CrudStatus, ApiError> {
        self.api().delete_site_template(template_id).await
    }

    /// Key pair pushed to provisioned hosts. `None` until generated.
    pub async fn get_ssh_config(&self) -> Result<Option<SshConfig>, ApiError> {
        self.api().get_ssh_config().await
    }

    pub async fn create_ssh_config(&self) -> Result<Option<SshConfig>, ApiError> {
        self.api().create_ssh_config().await
    }
}
