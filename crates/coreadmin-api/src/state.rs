//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use coreadmin_auth::authorize::AuthorizationEngine;
use coreadmin_auth::jwt::JwtDecoder;
use coreadmin_auth::throttle::LoginThrottle;
use coreadmin_core::config::AppConfig;
use coreadmin_service::form::FormService;
use coreadmin_service::level::LevelService;
use coreadmin_service::menu::MenuTreeService;
use coreadmin_service::privilege::PrivilegeService;
use coreadmin_service::user::UserService;

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks; the state
/// is assembled once in `main` and injected explicitly, never held in a
/// global.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// Bearer token validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Per-request authorization decisions.
    pub authorizer: Arc<AuthorizationEngine>,
    /// Failed-login lockout guard for the login route.
    pub login_throttle: Arc<LoginThrottle>,

    /// User management and login.
    pub user_service: Arc<UserService>,
    /// Level management.
    pub level_service: Arc<LevelService>,
    /// Form management.
    pub form_service: Arc<FormService>,
    /// Privilege edge management.
    pub privilege_service: Arc<PrivilegeService>,
    /// Menu tree management.
    pub menu_service: Arc<MenuTreeService>,
}
