//! Store behavior tests against a scripted backend.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

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

use crate::domain::Notification;
use crate::error::ApiError;
use crate::ports::{
    ApiResult, AuthApi, ConfigApi, DomainApi, ModuleApi, Navigator, TokenStore, TokenStoreError,
    UserApi, VpsApi,
};
use crate::routes::{Route, RouteState};
use crate::store::{StateHandle, Store, getters, mutations};

/// Backend fake. Responses are queued per method name; every call is
/// recorded. An unscripted call fails as a transport error so a test
/// can never silently hit the network it does not expect.
#[derive(Default)]
struct ScriptedApi {
    responses: Mutex<HashMap<&'static str, VecDeque<Result<Value, u16>>>>,
    calls: Mutex<Vec<&'static str>>,
}

impl ScriptedApi {
    fn on(&self, method: &'static str, result: Value) {
        self.responses
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(Ok(result));
    }

    fn fail(&self, method: &'static str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(Err(status));
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn take<T: DeserializeOwned>(&self, method: &'static str) -> ApiResult<T> {
        self.calls.lock().unwrap().push(method);
        let next = self
            .responses
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(|queue| queue.pop_front());
        match next {
            Some(Ok(value)) => {
                serde_json::from_value(value).map_err(|err| ApiError::decode(err.to_string()))
            }
            Some(Err(status)) => Err(ApiError::Api {
                status,
                errors: json!([{"msg": "scripted failure"}]),
            }),
            None => Err(ApiError::transport(format!("unscripted call: {method}"))),
        }
    }
}

#[async_trait]
impl AuthApi for ScriptedApi {
    async fn log_in(&self, _credentials: &Credentials) -> ApiResult<Token> {
        self.take("log_in")
    }
}

#[async_trait]
impl UserApi for ScriptedApi {
    async fn get_me(&self) -> ApiResult<UserProfile> {
        self.take("get_me")
    }
    async fn update_me(&self, _update: &UserUpdate) -> ApiResult<UserProfile> {
        self.take("update_me")
    }
    async fn get_users(&self) -> ApiResult<Vec<UserProfile>> {
        self.take("get_users")
    }
    async fn create_user(&self, _user: &UserCreate) -> ApiResult<UserProfile> {
        self.take("create_user")
    }
    async fn update_user(&self, _user_id: i64, _update: &UserUpdate) -> ApiResult<UserProfile> {
        self.take("update_user")
    }
}

#[async_trait]
impl ConfigApi for ScriptedApi {
    async fn get_available_isp(&self) -> ApiResult<IspAvailable> {
        self.take("get_available_isp")
    }
    async fn get_isp_profiles(
        &self,
        _kind: IspKind,
        _query: &PageQuery,
    ) -> ApiResult<Page<IspProfile>> {
        self.take("get_isp_profiles")
    }
    async fn create_isp_profile(
        &self,
        _kind: IspKind,
        _profile: &IspProfileCreate,
    ) -> ApiResult<IspProfile> {
        self.take("create_isp_profile")
    }
    async fn update_isp_profile(
        &self,
        _profile_id: i64,
        _update: &IspProfileUpdate,
    ) -> ApiResult<IspProfile> {
        self.take("update_isp_profile")
    }
    async fn delete_isp_profile(&self, _profile_id: i64) -> ApiResult<CrudStatus> {
        self.take("delete_isp_profile")
    }
    async fn reload_isp_config(&self, _kind: IspKind) -> ApiResult<TaskTicket> {
        self.take("reload_isp_config")
    }
    async fn get_c2_profiles(&self, _query: &PageQuery) -> ApiResult<Page<C2Profile>> {
        self.take("get_c2_profiles")
    }
    async fn get_c2_profile(&self, _profile_id: i64) -> ApiResult<C2Profile> {
        self.take("get_c2_profile")
    }
    async fn create_c2_profile(&self, _form: &C2ProfileForm) -> ApiResult<C2Profile> {
        self.take("create_c2_profile")
    }
    async fn update_c2_profile(
        &self,
        _profile_id: i64,
        _update: &C2ProfileUpdate,
    ) -> ApiResult<C2Profile> {
        self.take("update_c2_profile")
    }
    async fn delete_c2_profile(&self, _profile_id: i64) -> ApiResult<CrudStatus> {
        self.take("delete_c2_profile")
    }
    async fn get_site_templates(&self, _query: &PageQuery) -> ApiResult<Page<SiteTemplate>> {
        self.take("get_site_templates")
    }
    async fn create_site_template(&self, _form: &SiteTemplateForm) -> ApiResult<SiteTemplate> {
        self.take("create_site_template")
    }
    async fn update_site_template(&self, _update: &SiteTemplateUpdate) -> ApiResult<CrudStatus> {
        self.take("update_site_template")
    }
    async fn upload_site_template_archive(
        &self,
        _template_id: i64,
        _archive: &FilePayload,
    ) -> ApiResult<bool> {
        self.take("upload_site_template_archive")
    }
    async fn delete_site_template(&self, _template_id: i64) -> ApiResult<CrudStatus> {
        self.take("delete_site_template")
    }
    async fn get_ssh_config(&self) -> ApiResult<Option<SshConfig>> {
        self.take("get_ssh_config")
    }
    async fn create_ssh_config(&self) -> ApiResult<Option<SshConfig>> {
        self.take("create_ssh_config")
    }
}

#[async_trait]
impl VpsApi for ScriptedApi {
    async fn get_vps_list(&self, _query: &PageQuery) -> ApiResult<Page<VpsItem>> {
        self.take("get_vps_list")
    }
    async fn create_vps(&self, _profile: &VpsCreate) -> ApiResult<TaskTicket> {
        self.take("create_vps")
    }
    async fn get_vps_specs(&self, _isp_id: i64) -> ApiResult<VpsSpecs> {
        self.take("get_vps_specs")
    }
    async fn get_isp_ssh_keys(&self, _isp_id: i64) -> ApiResult<Vec<SshKey>> {
        self.take("get_isp_ssh_keys")
    }
    async fn destroy_vps(&self, _vps_id: i64) -> ApiResult<CrudStatus> {
        self.take("destroy_vps")
    }
    async fn reboot_vps(&self, _vps_id: i64) -> ApiResult<Value> {
        self.take("reboot_vps")
    }
    async fn reinstall_vps(&self, _vps_id: i64) -> ApiResult<Value> {
        self.take("reinstall_vps")
    }
    async fn shutdown_vps(&self, _vps_id: i64) -> ApiResult<Value> {
        self.take("shutdown_vps")
    }
    async fn start_vps(&self, _vps_id: i64) -> ApiResult<Value> {
        self.take("start_vps")
    }
}

#[async_trait]
impl DomainApi for ScriptedApi {
    async fn get_domains(&self, _query: &PageQuery) -> ApiResult<Page<DomainItem>> {
        self.take("get_domains")
    }
    async fn create_domain(&self, _domain: &DomainCreate) -> ApiResult<DomainItem> {
        self.take("create_domain")
    }
    async fn delete_domain(&self, _domain_id: i64) -> ApiResult<CrudStatus> {
        self.take("delete_domain")
    }
    async fn reload_dns_records(&self) -> ApiResult<TaskTicket> {
        self.take("reload_dns_records")
    }
    async fn search_purchasable(
        &self,
        _query: &PurchasableDomainQuery,
    ) -> ApiResult<Vec<PurchasableDomain>> {
        self.take("search_purchasable")
    }
    async fn purchase_domain(&self, _purchase: &DomainPurchase) -> ApiResult<Value> {
        self.take("purchase_domain")
    }
    async fn verify_domain(&self, _verify: &DomainVerify) -> ApiResult<DomainReputation> {
        self.take("verify_domain")
    }
    async fn get_domain_monitors(&self, _query: &PageQuery) -> ApiResult<Page<DomainMonitor>> {
        self.take("get_domain_monitors")
    }
    async fn create_domain_monitor(
        &self,
        _monitor: &DomainMonitorCreate,
    ) -> ApiResult<DomainMonitor> {
        self.take("create_domain_monitor")
    }
    async fn update_domain_monitor(
        &self,
        _monitor_id: i64,
        _monitor: &DomainMonitorCreate,
    ) -> ApiResult<Value> {
        self.take("update_domain_monitor")
    }
    async fn delete_domain_monitor(&self, _monitor_id: i64) -> ApiResult<CrudStatus> {
        self.take("delete_domain_monitor")
    }
    async fn get_domain_grow_tasks(&self, _query: &PageQuery) -> ApiResult<Page<DomainGrow>> {
        self.take("get_domain_grow_tasks")
    }
    async fn create_domain_grow(&self, _grow: &DomainGrowCreate) -> ApiResult<DomainGrow> {
        self.take("create_domain_grow")
    }
    async fn delete_domain_grow(&self, _grow_id: i64) -> ApiResult<CrudStatus> {
        self.take("delete_domain_grow")
    }
}

#[async_trait]
impl ModuleApi for ScriptedApi {
    async fn get_team_servers(&self, _query: &PageQuery) -> ApiResult<Page<TeamServer>> {
        self.take("get_team_servers")
    }
    async fn create_team_server(&self, _team_server: &TeamServerCreate) -> ApiResult<TeamServer> {
        self.take("create_team_server")
    }
    async fn delete_team_server(&self, _team_server_id: i64) -> ApiResult<CrudStatus> {
        self.take("delete_team_server")
    }
    async fn get_redirectors(&self, _query: &PageQuery) -> ApiResult<Page<Redirector>> {
        self.take("get_redirectors")
    }
    async fn create_redirector(&self, _redirector: &RedirectorCreate) -> ApiResult<Redirector> {
        self.take("create_redirector")
    }
    async fn delete_redirector(&self, _redirector_id: i64) -> ApiResult<CrudStatus> {
        self.take("delete_redirector")
    }
    async fn get_beacon_types(&self) -> ApiResult<Vec<EnumItem>> {
        self.take("get_beacon_types")
    }
}

#[derive(Default)]
struct FakeTokenStore {
    token: Mutex<Option<String>>,
}

impl FakeTokenStore {
    fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    fn stored(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenStore for FakeTokenStore {
    async fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.stored())
    }

    async fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

struct Harness {
    store: Store,
    api: Arc<ScriptedApi>,
    tokens: Arc<FakeTokenStore>,
    nav: Arc<RouteState>,
}

fn harness() -> Harness {
    harness_with(FakeTokenStore::default(), Route::Login)
}

fn harness_with(tokens: FakeTokenStore, at: Route) -> Harness {
    let api = Arc::new(ScriptedApi::default());
    let tokens = Arc::new(tokens);
    let nav = Arc::new(RouteState::starting_at(at));
    let store = Store::new(
        StateHandle::new(),
        api.clone(),
        tokens.clone(),
        nav.clone(),
    );
    Harness {
        store,
        api,
        tokens,
        nav,
    }
}

fn token_json(access: &str) -> Value {
    json!({"accessToken": access, "tokenType": "bearer", "expiresIn": 86400})
}

fn profile_json(id: i64, email: &str, superuser: bool) -> Value {
    json!({"id": id, "email": email, "isActive": true, "isSuperuser": superuser})
}

fn notification_contents(store: &Store) -> Vec<String> {
    store.state().read(|state| {
        state
            .main
            .notifications
            .iter()
            .map(|n| n.content.clone())
            .collect()
    })
}

#[tokio::test]
async fn login_commits_session_and_routes_home() {
    let h = harness();
    h.api.on("log_in", token_json("tok-1"));
    h.api.on("get_me", profile_json(1, "operator@example.com", false));

    h.store.log_in("operator", "hunter2").await.unwrap();

    h.store.state().read(|state| {
        assert_eq!(state.main.token, "tok-1");
        assert_eq!(state.main.token_scheme, "bearer");
        assert_eq!(state.main.logged_in, Some(true));
        assert!(!state.main.login_error);
        assert!(state.main.user_profile.is_some());
    });
    assert_eq!(h.tokens.stored().as_deref(), Some("tok-1"));
    assert_eq!(h.nav.current(), Route::Domain);
    assert_eq!(notification_contents(&h.store), vec!["Logged in"]);
}

#[tokio::test]
async fn login_failure_sets_error_and_logs_out() {
    let h = harness();
    h.api.fail("log_in", 400);

    let err = h.store.log_in("operator", "wrong").await.unwrap_err();
    assert_eq!(err.status(), Some(400));

    h.store.state().read(|state| {
        assert!(state.main.login_error);
        assert_eq!(state.main.logged_in, Some(false));
        assert!(state.main.token.is_empty());
    });
    assert_eq!(h.tokens.stored(), None);
}

#[tokio::test]
async fn empty_access_token_fails_closed() {
    let h = harness();
    h.api.on("log_in", token_json(""));

    let err = h.store.log_in("operator", "hunter2").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    h.store.state().read(|state| {
        assert!(state.main.login_error);
        assert_eq!(state.main.logged_in, Some(false));
    });
    assert_eq!(h.tokens.stored(), None);
    assert_eq!(h.api.calls(), vec!["log_in"]);
}

#[tokio::test]
async fn profile_fetch_failure_fails_closed() {
    let h = harness();
    h.api.on("log_in", token_json("tok-1"));
    h.api.fail("get_me", 500);

    assert!(h.store.log_in("operator", "hunter2").await.is_err());

    // the token was persisted mid-flight, then rolled back
    assert_eq!(h.tokens.stored(), None);
    h.store.state().read(|state| {
        assert!(state.main.login_error);
        assert_eq!(state.main.logged_in, Some(false));
        assert!(state.main.token.is_empty());
    });
}

#[tokio::test]
async fn bootstrap_skips_backend_when_already_logged_in() {
    let h = harness();
    h.store
        .state()
        .commit(|state| mutations::set_logged_in(&mut state.main, true));

    h.store.check_logged_in().await;

    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn bootstrap_recovers_persisted_token() {
    let h = harness_with(FakeTokenStore::with_token("stored-tok"), Route::Login);
    h.api.on("get_me", profile_json(1, "operator@example.com", true));

    h.store.check_logged_in().await;

    h.store.state().read(|state| {
        assert_eq!(state.main.token, "stored-tok");
        assert_eq!(state.main.logged_in, Some(true));
        assert!(getters::has_admin_access(&state.main));
    });
}

#[tokio::test]
async fn bootstrap_removes_rejected_token() {
    let h = harness_with(FakeTokenStore::with_token("expired-tok"), Route::Login);
    h.api.fail("get_me", 401);

    h.store.check_logged_in().await;

    assert_eq!(h.tokens.stored(), None);
    h.store.state().read(|state| {
        assert_eq!(state.main.logged_in, Some(false));
        assert!(state.main.token.is_empty());
    });
}

#[tokio::test]
async fn bootstrap_without_any_token_resolves_logged_out() {
    let h = harness();

    h.store.check_logged_in().await;

    assert!(h.api.calls().is_empty());
    h.store
        .state()
        .read(|state| assert_eq!(state.main.logged_in, Some(false)));
}

#[tokio::test]
async fn only_unauthorized_errors_force_logout() {
    let h = harness_with(FakeTokenStore::with_token("tok"), Route::Domain);
    h.store.state().commit(|state| {
        mutations::set_token(&mut state.main, "tok".to_string());
        mutations::set_logged_in(&mut state.main, true);
    });

    let server_error = ApiError::Api {
        status: 500,
        errors: json!("boom"),
    };
    h.store.check_api_error(&server_error).await;
    h.store
        .state()
        .read(|state| assert_eq!(state.main.logged_in, Some(true)));
    assert_eq!(h.nav.current(), Route::Domain);

    let unauthorized = ApiError::Api {
        status: 401,
        errors: json!("expired"),
    };
    h.store.check_api_error(&unauthorized).await;
    h.store
        .state()
        .read(|state| assert_eq!(state.main.logged_in, Some(false)));
    assert_eq!(h.nav.current(), Route::Login);
    assert_eq!(h.tokens.stored(), None);
}

#[tokio::test]
async fn deep_link_survives_login() {
    let h = harness_with(FakeTokenStore::default(), Route::Vps);
    h.api.on("log_in", token_json("tok-1"));
    h.api.on("get_me", profile_json(1, "operator@example.com", false));

    h.store.log_in("operator", "hunter2").await.unwrap();

    assert_eq!(h.nav.current(), Route::Vps);
    assert!(h.nav.visited().is_empty());
}

#[tokio::test]
async fn user_log_out_routes_to_login_and_says_goodbye() {
    let h = harness_with(FakeTokenStore::with_token("tok"), Route::Config);
    h.store.state().commit(|state| {
        mutations::set_token(&mut state.main, "tok".to_string());
        mutations::set_logged_in(&mut state.main, true);
    });

    h.store.user_log_out().await;

    assert_eq!(h.nav.current(), Route::Login);
    assert_eq!(h.tokens.stored(), None);
    assert_eq!(notification_contents(&h.store), vec!["Logged out"]);
}

#[tokio::test]
async fn available_isp_is_fetched_once() {
    let h = harness();
    h.api.on(
        "get_available_isp",
        json!({
            "domain": [{"code": 1, "name": "namesilo"}],
            "vps": [{"code": 2, "name": "vultr"}]
        }),
    );

    let first = h.store.get_available_isp().await.unwrap();
    let second = h.store.get_available_isp().await.unwrap();

    assert_eq!(first.domain.as_ref().map(Vec::len), Some(1));
    assert_eq!(second.vps.as_ref().map(Vec::len), Some(1));
    assert_eq!(h.api.calls(), vec!["get_available_isp"]);
}

#[tokio::test]
async fn isp_list_fetch_updates_the_module_cache() {
    let h = harness();
    h.api.on(
        "get_isp_profiles",
        json!({
            "page": 1,
            "prevNum": null,
            "hasPrev": false,
            "hasNext": false,
            "total": 1,
            "items": [{"id": 7, "provider": 1, "providerName": "namesilo", "type": 0}]
        }),
    );

    let items = h.store.get_domain_isp_list().await.unwrap();
    assert_eq!(items.len(), 1);

    h.store.state().read(|state| {
        assert_eq!(state.main.domain_isp_list.len(), 1);
        assert_eq!(state.main.domain_isp_list[0].id, Some(7));
        assert!(state.main.vps_isp_list.is_empty());
    });
}

#[tokio::test]
async fn isp_create_failure_notifies_and_returns_the_error() {
    let h = harness();
    h.api.fail("create_isp_profile", 422);

    let profile = IspProfileCreate {
        provider: Some(1),
        api_key: Some("key".to_string()),
        remark: None,
        is_test: Some(false),
    };
    let err = h
        .store
        .create_isp_profile(IspKind::Domain, &profile)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(
        notification_contents(&h.store),
        vec!["Failed to create ISP profile"]
    );
}

#[tokio::test(start_paused = true)]
async fn profile_update_swaps_progress_for_success() {
    let h = harness();
    h.api
        .on("update_me", profile_json(1, "renamed@example.com", false));

    let update = UserUpdate {
        email: Some("renamed@example.com".to_string()),
        ..UserUpdate::default()
    };
    h.store.update_user_profile(&update).await.unwrap();

    assert_eq!(
        notification_contents(&h.store),
        vec!["Profile successfully updated"]
    );
    h.store.state().read(|state| {
        let profile = state.main.user_profile.as_ref().unwrap();
        assert_eq!(profile.email.as_deref(), Some("renamed@example.com"));
    });
}

#[tokio::test(start_paused = true)]
async fn notification_removal_is_by_id_and_order_preserving() {
    let h = harness();
    let first = Notification::new("first");
    let second = Notification::new("second");
    let third = Notification::new("third");
    for n in [first.clone(), second.clone(), third.clone()] {
        h.store.notify(n);
    }

    assert!(
        h.store
            .remove_notification(second.id, Duration::from_secs(3))
            .await
    );
    assert_eq!(notification_contents(&h.store), vec!["first", "third"]);

    // a second removal of the same id finds nothing
    assert!(
        !h.store
            .remove_notification(second.id, Duration::from_secs(3))
            .await
    );
}

#[tokio::test]
async fn admin_actions_upsert_the_user_list() {
    let h = harness();
    h.api.on(
        "get_users",
        json!([
            {"id": 1, "email": "one@example.com", "isActive": true, "isSuperuser": false},
            {"id": 2, "email": "two@example.com", "isActive": true, "isSuperuser": true}
        ]),
    );
    h.api
        .on("update_user", profile_json(1, "renamed@example.com", false));
    h.api
        .on("create_user", profile_json(3, "three@example.com", false));

    h.store.get_users().await.unwrap();
    h.store
        .update_user(1, &UserUpdate::default())
        .await
        .unwrap();
    let created = h
        .store
        .create_user(&UserCreate {
            username: None,
            email: "three@example.com".to_string(),
            password: "secret".to_string(),
            is_active: Some(true),
            is_superuser: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(3));

    h.store.state().read(|state| {
        assert_eq!(state.admin.users.len(), 3);
        let renamed = getters::admin_one_user(&state.admin, 1).unwrap();
        assert_eq!(renamed.email.as_deref(), Some("renamed@example.com"));
    });
    let contents = notification_contents(&h.store);
    assert_eq!(
        contents,
        vec!["User successfully updated", "User successfully created"]
    );
}
