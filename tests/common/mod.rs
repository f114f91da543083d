//! Shared test support: an in-memory database with store adapters, and a
//! `TestApp` that drives the full router through `tower::ServiceExt`.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use coreadmin_api::router::build_router;
use coreadmin_api::state::AppState;
use coreadmin_auth::authorize::AuthorizationEngine;
use coreadmin_auth::jwt::{JwtDecoder, JwtEncoder};
use coreadmin_auth::password::PasswordHasher;
use coreadmin_auth::throttle::LoginThrottle;
use coreadmin_core::config::auth::AuthConfig;
use coreadmin_core::config::{AppConfig, DatabaseConfig};
use coreadmin_core::error::AppError;
use coreadmin_core::result::AppResult;
use coreadmin_core::types::{
    FormId, LevelId, MenuTreeId, PageRequest, PageResponse, PrivilegeId, UserId,
};
use coreadmin_entity::form::{Form, FormRecord, PathApi};
use coreadmin_entity::level::{FormGrant, Level, LevelDetail, LevelRecord};
use coreadmin_entity::menu::{MenuTree, MenuTreeRecord};
use coreadmin_entity::privilege::{LevelPrivilege, PrivilegeRecord};
use coreadmin_entity::store::{FormStore, LevelStore, MenuTreeStore, PrivilegeStore, UserStore};
use coreadmin_entity::user::{User, UserRecord};
use coreadmin_service::form::FormService;
use coreadmin_service::level::LevelService;
use coreadmin_service::menu::MenuTreeService;
use coreadmin_service::privilege::PrivilegeService;
use coreadmin_service::user::UserService;

/// Backing state shared by every in-memory store adapter, so cross-entity
/// reads (the level deep read) and cascades behave like the real schema.
#[derive(Default)]
pub struct MemoryDb {
    pub users: Vec<User>,
    pub levels: Vec<Level>,
    pub forms: Vec<Form>,
    pub privileges: Vec<LevelPrivilege>,
    pub menus: Vec<MenuTree>,
    next_id: i64,
}

impl MemoryDb {
    fn alloc_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Cloneable handle over the shared in-memory database.
#[derive(Clone, Default)]
pub struct SharedDb(Arc<Mutex<MemoryDb>>);

impl SharedDb {
    pub fn lock(&self) -> std::sync::MutexGuard<'_, MemoryDb> {
        self.0.lock().unwrap()
    }
}

fn page_slice<T: Clone>(rows: &[T], page: &PageRequest) -> Vec<T> {
    rows.iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .cloned()
        .collect()
}

// ── Store adapters ───────────────────────────────────────────

pub struct MemoryUserStore(pub SharedDb);

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, record: &UserRecord) -> AppResult<User> {
        let mut db = self.0.lock();
        let id = db.alloc_id();
        let user = User {
            id: UserId(id),
            username: record.username.clone(),
            email: record.email.clone(),
            full_name: record.full_name.clone(),
            password_hash: record.password_hash.clone(),
            picture: record.picture.clone(),
            level_id: record.level_id,
            failed_logins: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        db.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, record: &UserRecord) -> AppResult<User> {
        let mut db = self.0.lock();
        let user = db
            .users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.username = record.username.clone();
        user.email = record.email.clone();
        user.full_name = record.full_name.clone();
        user.password_hash = record.password_hash.clone();
        user.picture = record.picture.clone();
        user.level_id = record.level_id;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.deleted_at.is_none())
            .cloned())
    }

    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let db = self.0.lock();
        let live: Vec<User> = db
            .users
            .iter()
            .filter(|u| u.deleted_at.is_none())
            .cloned()
            .collect();
        Ok(PageResponse::new(page_slice(&live, page), live.len() as u64))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let mut db = self.0.lock();
        match db
            .users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
        {
            Some(user) => {
                user.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_failed_login(&self, id: UserId) -> AppResult<i32> {
        let mut db = self.0.lock();
        let user = db
            .users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.failed_logins += 1;
        Ok(user.failed_logins)
    }

    async fn clear_failed_logins(&self, id: UserId) -> AppResult<()> {
        if let Some(user) = self
            .0
            .lock()
            .users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
        {
            user.failed_logins = 0;
        }
        Ok(())
    }
}

pub struct MemoryLevelStore(pub SharedDb);

impl MemoryLevelStore {
    fn grants_for(db: &MemoryDb, level_id: LevelId) -> Vec<FormGrant> {
        db.privileges
            .iter()
            .filter(|p| p.level_id == level_id && p.deleted_at.is_none())
            .filter_map(|p| {
                db.forms
                    .iter()
                    .find(|f| f.id == p.form_id && f.deleted_at.is_none())
                    .map(|form| FormGrant {
                        privilege_id: p.id,
                        form: form.clone(),
                        read: p.read,
                        write: p.write,
                    })
            })
            .collect()
    }
}

#[async_trait]
impl LevelStore for MemoryLevelStore {
    async fn create(&self, record: &LevelRecord) -> AppResult<Level> {
        let mut db = self.0.lock();
        let id = db.alloc_id();
        let level = Level {
            id: LevelId(id),
            name: record.name.clone(),
            description: record.description.clone(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        db.levels.push(level.clone());
        Ok(level)
    }

    async fn update(&self, id: LevelId, record: &LevelRecord) -> AppResult<Level> {
        let mut db = self.0.lock();
        let level = db
            .levels
            .iter_mut()
            .find(|l| l.id == id && l.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found(format!("Level {id} not found")))?;
        level.name = record.name.clone();
        level.description = record.description.clone();
        level.updated_at = Utc::now();
        Ok(level.clone())
    }

    async fn find_detail(&self, id: LevelId) -> AppResult<Option<LevelDetail>> {
        let db = self.0.lock();
        let Some(level) = db
            .levels
            .iter()
            .find(|l| l.id == id && l.deleted_at.is_none())
            .cloned()
        else {
            return Ok(None);
        };
        let privileges = Self::grants_for(&db, level.id);
        Ok(Some(LevelDetail { level, privileges }))
    }

    async fn list(&self) -> AppResult<Vec<Level>> {
        Ok(self
            .0
            .lock()
            .levels
            .iter()
            .filter(|l| l.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn paginate_detail(&self, page: &PageRequest) -> AppResult<PageResponse<LevelDetail>> {
        let db = self.0.lock();
        let live: Vec<Level> = db
            .levels
            .iter()
            .filter(|l| l.deleted_at.is_none())
            .cloned()
            .collect();
        let items = page_slice(&live, page)
            .into_iter()
            .map(|level| {
                let privileges = Self::grants_for(&db, level.id);
                LevelDetail { level, privileges }
            })
            .collect();
        Ok(PageResponse::new(items, live.len() as u64))
    }

    async fn delete(&self, id: LevelId) -> AppResult<bool> {
        let mut db = self.0.lock();
        for privilege in db
            .privileges
            .iter_mut()
            .filter(|p| p.level_id == id && p.deleted_at.is_none())
        {
            privilege.deleted_at = Some(Utc::now());
        }
        match db
            .levels
            .iter_mut()
            .find(|l| l.id == id && l.deleted_at.is_none())
        {
            Some(level) => {
                level.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct MemoryFormStore(pub SharedDb);

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn create(&self, record: &FormRecord) -> AppResult<Form> {
        let mut db = self.0.lock();
        let id = db.alloc_id();
        let form = Form {
            id: FormId(id),
            title: record.title.clone(),
            icon: record.icon.clone(),
            link: record.link.clone(),
            color: record.color.clone(),
            order_index: record.order_index,
            setting: record.setting,
            public_to_intranet: record.public_to_intranet,
            menu_tree_id: record.menu_tree_id,
            path_api: record.path_api.clone(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        db.forms.push(form.clone());
        Ok(form)
    }

    async fn update(&self, id: FormId, record: &FormRecord) -> AppResult<Form> {
        let mut db = self.0.lock();
        let form = db
            .forms
            .iter_mut()
            .find(|f| f.id == id && f.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found(format!("Form {id} not found")))?;
        form.title = record.title.clone();
        form.icon = record.icon.clone();
        form.link = record.link.clone();
        form.color = record.color.clone();
        form.order_index = record.order_index;
        form.setting = record.setting;
        form.public_to_intranet = record.public_to_intranet;
        form.menu_tree_id = record.menu_tree_id;
        form.path_api = record.path_api.clone();
        form.updated_at = Utc::now();
        Ok(form.clone())
    }

    async fn list(&self) -> AppResult<Vec<Form>> {
        Ok(self
            .0
            .lock()
            .forms
            .iter()
            .filter(|f| f.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<Form>> {
        let db = self.0.lock();
        let live: Vec<Form> = db
            .forms
            .iter()
            .filter(|f| f.deleted_at.is_none())
            .cloned()
            .collect();
        Ok(PageResponse::new(page_slice(&live, page), live.len() as u64))
    }

    async fn delete(&self, id: FormId) -> AppResult<bool> {
        let mut db = self.0.lock();
        match db
            .forms
            .iter_mut()
            .find(|f| f.id == id && f.deleted_at.is_none())
        {
            Some(form) => {
                form.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct MemoryPrivilegeStore(pub SharedDb);

#[async_trait]
impl PrivilegeStore for MemoryPrivilegeStore {
    async fn upsert(&self, record: &PrivilegeRecord) -> AppResult<LevelPrivilege> {
        let mut db = self.0.lock();
        if let Some(existing) = db.privileges.iter_mut().find(|p| {
            p.level_id == record.level_id && p.form_id == record.form_id && p.deleted_at.is_none()
        }) {
            existing.read = record.read;
            existing.write = record.write;
            existing.updated_at = Utc::now();
            return Ok(existing.clone());
        }

        let id = db.alloc_id();
        let privilege = LevelPrivilege {
            id: PrivilegeId(id),
            level_id: record.level_id,
            form_id: record.form_id,
            read: record.read,
            write: record.write,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        db.privileges.push(privilege.clone());
        Ok(privilege)
    }

    async fn list(&self) -> AppResult<Vec<LevelPrivilege>> {
        Ok(self
            .0
            .lock()
            .privileges
            .iter()
            .filter(|p| p.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn delete(&self, id: PrivilegeId) -> AppResult<bool> {
        let mut db = self.0.lock();
        match db
            .privileges
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
        {
            Some(privilege) => {
                privilege.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct MemoryMenuStore(pub SharedDb);

#[async_trait]
impl MenuTreeStore for MemoryMenuStore {
    async fn create(&self, record: &MenuTreeRecord) -> AppResult<MenuTree> {
        let mut db = self.0.lock();
        let id = db.alloc_id();
        let menu = MenuTree {
            id: MenuTreeId(id),
            title: record.title.clone(),
            icon: record.icon.clone(),
            color: record.color.clone(),
            order_index: record.order_index,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        db.menus.push(menu.clone());
        Ok(menu)
    }

    async fn update(&self, id: MenuTreeId, record: &MenuTreeRecord) -> AppResult<MenuTree> {
        let mut db = self.0.lock();
        let menu = db
            .menus
            .iter_mut()
            .find(|m| m.id == id && m.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found(format!("Menu {id} not found")))?;
        menu.title = record.title.clone();
        menu.icon = record.icon.clone();
        menu.color = record.color.clone();
        menu.order_index = record.order_index;
        menu.updated_at = Utc::now();
        Ok(menu.clone())
    }

    async fn list(&self) -> AppResult<Vec<MenuTree>> {
        Ok(self
            .0
            .lock()
            .menus
            .iter()
            .filter(|m| m.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<MenuTree>> {
        let db = self.0.lock();
        let live: Vec<MenuTree> = db
            .menus
            .iter()
            .filter(|m| m.deleted_at.is_none())
            .cloned()
            .collect();
        Ok(PageResponse::new(page_slice(&live, page), live.len() as u64))
    }

    async fn delete(&self, id: MenuTreeId) -> AppResult<bool> {
        let mut db = self.0.lock();
        match db
            .menus
            .iter_mut()
            .find(|m| m.id == id && m.deleted_at.is_none())
        {
            Some(menu) => {
                menu.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── Test application ─────────────────────────────────────────

/// Full application over in-memory stores.
pub struct TestApp {
    pub router: Router,
    pub db: SharedDb,
    pub config: AppConfig,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Build the router over a fresh in-memory database.
    pub fn new() -> Self {
        let auth = AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            ..AuthConfig::default()
        };
        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url: "postgres://unused".to_string(),
                max_connections: 1,
                min_connections: 1,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            auth: auth.clone(),
            notification: Default::default(),
            logging: Default::default(),
        };

        let db = SharedDb::default();
        let hasher = PasswordHasher::new();
        let encoder = JwtEncoder::new(&auth);

        let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore(db.clone()));
        let level_store: Arc<dyn LevelStore> = Arc::new(MemoryLevelStore(db.clone()));
        let form_store: Arc<dyn FormStore> = Arc::new(MemoryFormStore(db.clone()));
        let privilege_store: Arc<dyn PrivilegeStore> = Arc::new(MemoryPrivilegeStore(db.clone()));
        let menu_store: Arc<dyn MenuTreeStore> = Arc::new(MemoryMenuStore(db.clone()));

        let jwt_encoder = Arc::new(JwtEncoder::new(&auth));
        let state = AppState {
            config: Arc::new(config.clone()),
            jwt_decoder: Arc::new(JwtDecoder::new(&auth)),
            authorizer: Arc::new(AuthorizationEngine::new(
                Arc::clone(&level_store),
                config.server.api_prefix.clone(),
            )),
            login_throttle: Arc::new(LoginThrottle::new(
                auth.max_failed_attempts,
                auth.lockout_duration_minutes,
            )),
            user_service: Arc::new(UserService::new(
                Arc::clone(&user_store),
                hasher.clone(),
                Arc::clone(&jwt_encoder),
            )),
            level_service: Arc::new(LevelService::new(Arc::clone(&level_store))),
            form_service: Arc::new(FormService::new(Arc::clone(&form_store))),
            privilege_service: Arc::new(PrivilegeService::new(Arc::clone(&privilege_store))),
            menu_service: Arc::new(MenuTreeService::new(Arc::clone(&menu_store))),
        };

        Self {
            router: build_router(state),
            db,
            config,
            hasher,
            encoder,
        }
    }

    // ── Seed helpers ─────────────────────────────────────────

    pub fn add_level(&self, name: &str) -> LevelId {
        let mut db = self.db.lock();
        let id = db.alloc_id();
        db.levels.push(Level {
            id: LevelId(id),
            name: name.to_string(),
            description: format!("{name} level"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        });
        LevelId(id)
    }

    pub fn add_form(&self, path_api: &str) -> FormId {
        let mut db = self.db.lock();
        let id = db.alloc_id();
        db.forms.push(Form {
            id: FormId(id),
            title: format!("Form {path_api}"),
            icon: "mdi-test".to_string(),
            link: path_api.to_string(),
            color: String::new(),
            order_index: id as i32,
            setting: true,
            public_to_intranet: false,
            menu_tree_id: None,
            path_api: PathApi::from(path_api),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        });
        FormId(id)
    }

    pub fn add_privilege(
        &self,
        level_id: LevelId,
        form_id: FormId,
        read: bool,
        write: bool,
    ) -> PrivilegeId {
        let mut db = self.db.lock();
        let id = db.alloc_id();
        db.privileges.push(LevelPrivilege {
            id: PrivilegeId(id),
            level_id,
            form_id,
            read,
            write,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        });
        PrivilegeId(id)
    }

    /// Add a user with a real Argon2id hash so login works.
    pub fn add_user(&self, email: &str, password: &str, level_id: LevelId) -> UserId {
        let hash = self.hasher.hash_password(password).expect("hash password");
        self.add_user_with_hash(email, &hash, level_id)
    }

    /// Add a user row directly (cheap, no hashing; login will not work).
    pub fn add_user_row(&self, email: &str, level_id: LevelId) -> UserId {
        self.add_user_with_hash(email, "$argon2id$unset", level_id)
    }

    fn add_user_with_hash(&self, email: &str, hash: &str, level_id: LevelId) -> UserId {
        let mut db = self.db.lock();
        let id = db.alloc_id();
        db.users.push(User {
            id: UserId(id),
            username: email.split('@').next().unwrap_or(email).to_string(),
            email: email.to_string(),
            full_name: format!("User {id}"),
            password_hash: hash.to_string(),
            picture: None,
            level_id,
            failed_logins: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        });
        UserId(id)
    }

    /// Seed an administrator level with read+write on every admin form,
    /// plus a logged-in-able admin user. Returns the level id.
    pub fn seed_admin(&self, email: &str, password: &str) -> LevelId {
        let level_id = self.add_level("Administrador");
        for path_api in [
            "user|users",
            "level|levels",
            "form|forms",
            "level-privilege|level-privileges",
            "expanses-menu|expanses-menus",
        ] {
            let form_id = self.add_form(path_api);
            self.add_privilege(level_id, form_id, true, true);
        }
        self.add_user(email, password, level_id);
        level_id
    }

    /// Sign a token directly, bypassing login (e.g. for unknown levels).
    pub fn issue_token(&self, user_id: UserId, email: &str, level_id: LevelId) -> String {
        self.encoder
            .issue(user_id, email, level_id)
            .expect("issue token")
    }

    // ── Request helpers ──────────────────────────────────────

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
