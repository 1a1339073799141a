//! Config endpoints: ISP profiles, C2 profiles, site templates and the
//! SSH key pair.

use async_trait::async_trait;
use reqwest::Method;

use redcell_core::ports::{ApiResult, ConfigApi};
use redcell_shared::dto::{
    C2Profile, C2ProfileForm, C2ProfileUpdate, FilePayload, IspAvailable, IspKind, IspProfile,
    IspProfileCreate, IspProfileUpdate, SiteTemplate, SiteTemplateForm, SiteTemplateUpdate,
    SshConfig,
};
use redcell_shared::{CrudStatus, Page, PageQuery, TaskTicket};

use crate::form::FormSpec;
use crate::http::ApiClient;

impl ApiClient {
    fn c2_form(form: &C2ProfileForm) -> FormSpec {
        FormSpec::new()
            .text("name", &form.name)
            .maybe_file("profile", form.profile.as_ref())
            .maybe_text("remark", form.remark.as_deref())
    }

    fn site_template_form(form: &SiteTemplateForm) -> FormSpec {
        FormSpec::new()
            .text("name", &form.name)
            .file("zipFile", &form.zip_file)
            .maybe_text("remark", form.remark.as_deref())
    }
}

#[async_trait]
impl ConfigApi for ApiClient {
    async fn get_available_isp(&self) -> ApiResult<IspAvailable> {
        self.execute(self.request(Method::GET, "config/isp/available"))
            .await
    }

    async fn get_isp_profiles(
        &self,
        kind: IspKind,
        query: &PageQuery,
    ) -> ApiResult<Page<IspProfile>> {
        self.execute(
            self.request(Method::GET, &format!("config/isp/{kind}"))
                .query(query),
        )
        .await
    }

    async fn create_isp_profile(
        &self,
        kind: IspKind,
        profile: &IspProfileCreate,
    ) -> ApiResult<IspProfile> {
        self.execute(
            self.request(Method::POST, &format!("config/isp/{kind}"))
                .json(profile),
        )
        .await
    }

    async fn update_isp_profile(
        &self,
        profile_id: i64,
        update: &IspProfileUpdate,
    ) -> ApiResult<IspProfile> {
        self.execute(
            self.request(Method::PUT, &format!("config/isp/{profile_id}"))
                .json(update),
        )
        .await
    }

    async fn delete_isp_profile(&self, profile_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(Method::DELETE, &format!("config/isp/{profile_id}")))
            .await
    }

    async fn reload_isp_config(&self, kind: IspKind) -> ApiResult<TaskTicket> {
        self.execute(self.request(Method::GET, &format!("config/isp/{kind}/reload")))
            .await
    }

    async fn get_c2_profiles(&self, query: &PageQuery) -> ApiResult<Page<C2Profile>> {
        self.execute(self.request(Method::GET, "config/c2").query(query))
            .await
    }

    async fn get_c2_profile(&self, profile_id: i64) -> ApiResult<C2Profile> {
        self.execute(self.request(Method::GET, &format!("config/c2/{profile_id}")))
            .await
    }

    async fn create_c2_profile(&self, form: &C2ProfileForm) -> ApiResult<C2Profile> {
        self.execute(
            self.request(Method::POST, "config/c2")
                .multipart(Self::c2_form(form).into_multipart()),
        )
        .await
    }

    async fn update_c2_profile(
        &self,
        profile_id: i64,
        update: &C2ProfileUpdate,
    ) -> ApiResult<C2Profile> {
        self.execute(
            self.request(Method::PUT, &format!("config/c2/{profile_id}"))
                .json(update),
        )
        .await
    }

    async fn delete_c2_profile(&self, profile_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(Method::DELETE, &format!("config/c2/{profile_id}")))
            .await
    }

    async fn get_site_templates(&self, query: &PageQuery) -> ApiResult<Page<SiteTemplate>> {
        self.execute(self.request(Method::GET, "config/template/site").query(query))
            .await
    }

    async fn create_site_template(&self, form: &SiteTemplateForm) -> ApiResult<SiteTemplate> {
        self.execute(
            self.request(Method::POST, "config/template/site")
                .multipart(Self::site_template_form(form).into_multipart()),
        )
        .await
    }

    async fn update_site_template(&self, update: &SiteTemplateUpdate) -> ApiResult<CrudStatus> {
        self.execute(
            self.request(Method::PUT, &format!("config/template/site/{}", update.id))
                .json(update),
        )
        .await
    }

    /// Replace the archive behind a template. Same path as the metadata
    /// update; the multipart body selects the file handler.
    async fn upload_site_template_archive(
        &self,
        template_id: i64,
        archive: &FilePayload,
    ) -> ApiResult<bool> {
        let form = FormSpec::new().file("zipFile", archive);
        self.execute(
            self.request(Method::PUT, &format!("config/template/site/{template_id}"))
                .multipart(form.into_multipart()),
        )
        .await
    }

    async fn delete_site_template(&self, template_id: i64) -> ApiResult<CrudStatus> {
        self.execute(self.request(
            Method::DELETE,
            &format!("config/template/site/{template_id}"),
        ))
        .await
    }

    async fn get_ssh_config(&self) -> ApiResult<Option<SshConfig>> {
        self.execute_optional(self.request(Method::GET, "config/ssh"))
            .await
    }

    async fn create_ssh_config(&self) -> ApiResult<Option<SshConfig>> {
        self.execute_optional(self.request(Method::POST, "config/ssh"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c2_form_keeps_the_wire_order() {
        let form = C2ProfileForm::new("stealth")
            .with_profile(FilePayload::new("c2.profile", vec![1, 2, 3]))
            .with_remark("ops");
        assert_eq!(
            ApiClient::c2_form(&form).part_names(),
            vec!["name", "profile", "remark"]
        );

        let bare = C2ProfileForm::new("bare");
        assert_eq!(ApiClient::c2_form(&bare).part_names(), vec!["name"]);
    }

    #[test]
    fn site_template_form_always_carries_the_archive() {
        let form = SiteTemplateForm::new("landing", FilePayload::new("landing.zip", vec![0x50]));
        assert_eq!(
            ApiClient::site_template_form(&form).part_names(),
            vec!["name", "zipFile"]
        );
    }
}
