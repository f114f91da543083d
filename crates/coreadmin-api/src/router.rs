//! Route definitions for the intranet HTTP API.
//!
//! Everything is mounted under the fixed `/api/v1` prefix. The login route
//! and the landing page form the public group; every other route sits in
//! the protected group behind the bearer check and the authorization
//! engine.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(handlers::health::landing))
        .route(
            "/login",
            post(handlers::auth::login).layer(axum_middleware::from_fn_with_state(
                state.clone(),
                middleware::login_guard::login_guard,
            )),
        );

    let protected = Router::new()
        .merge(user_routes())
        .merge(form_routes())
        .merge(level_routes())
        .merge(privilege_routes())
        .merge(menu_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authorize::authorize,
        ));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// User CRUD plus the current-user read.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user",
            get(handlers::user::current_user).post(handlers::user::create_or_update),
        )
        .route("/user/delete", post(handlers::user::delete))
        .route("/users/{page}", get(handlers::user::paginate))
}

/// Form CRUD.
fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/form", post(handlers::form::create_or_update))
        .route("/form/delete", post(handlers::form::delete))
        .route("/forms", get(handlers::form::list))
        .route("/forms/{page}", get(handlers::form::paginate))
}

/// Level CRUD.
fn level_routes() -> Router<AppState> {
    Router::new()
        .route("/level", post(handlers::level::create_or_update))
        .route("/level/delete", post(handlers::level::delete))
        .route("/levels", get(handlers::level::list))
        .route("/levels/{page}", get(handlers::level::paginate))
}

/// Privilege edge CRUD.
fn privilege_routes() -> Router<AppState> {
    Router::new()
        .route("/level-privilege", post(handlers::privilege::upsert))
        .route("/level-privilege/delete", post(handlers::privilege::delete))
        .route("/level-privileges", get(handlers::privilege::list))
}

/// Expandable menu CRUD.
fn menu_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/expanses-menus",
            get(handlers::menu::list).post(handlers::menu::create_or_update),
        )
        .route("/expanses-menus/delete", post(handlers::menu::delete))
        .route("/expanses-menus/{page}", get(handlers::menu::paginate))
}
