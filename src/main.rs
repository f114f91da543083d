//! Coreadmin server: intranet administration backend.
//!
//! Entry point that wires configuration, database, auth components,
//! services, and the HTTP router together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use coreadmin_api::router::build_router;
use coreadmin_api::state::AppState;
use coreadmin_auth::authorize::AuthorizationEngine;
use coreadmin_auth::jwt::{JwtDecoder, JwtEncoder};
use coreadmin_auth::password::PasswordHasher;
use coreadmin_auth::throttle::LoginThrottle;
use coreadmin_core::config::AppConfig;
use coreadmin_core::error::AppError;
use coreadmin_core::traits::Notifier;
use coreadmin_database::repositories::{
    FormRepository, LevelRepository, MenuTreeRepository, PrivilegeRepository, UserRepository,
};
use coreadmin_entity::store::{FormStore, LevelStore, MenuTreeStore, PrivilegeStore, UserStore};
use coreadmin_service::form::FormService;
use coreadmin_service::level::LevelService;
use coreadmin_service::menu::MenuTreeService;
use coreadmin_service::notification::{MailRelayNotifier, NotificationService, WebhookNotifier};
use coreadmin_service::privilege::PrivilegeService;
use coreadmin_service::user::UserService;

#[tokio::main]
async fn main() {
    let env = std::env::var("COREADMIN_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting coreadmin v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations
    let pool = coreadmin_database::connection::create_pool(&config.database).await?;
    coreadmin_database::migration::run_migrations(&pool).await?;

    // Auth components
    let hasher = PasswordHasher::new();
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let login_throttle = Arc::new(LoginThrottle::new(
        config.auth.max_failed_attempts,
        config.auth.lockout_duration_minutes,
    ));

    // First-startup seed data
    let admin_password_hash = hasher.hash_password(&config.auth.admin_password)?;
    coreadmin_database::seed::seed(&pool, &config.auth.admin_email, &admin_password_hash).await?;

    // Repositories behind their store interfaces
    let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.clone()));
    let level_store: Arc<dyn LevelStore> = Arc::new(LevelRepository::new(pool.clone()));
    let form_store: Arc<dyn FormStore> = Arc::new(FormRepository::new(pool.clone()));
    let privilege_store: Arc<dyn PrivilegeStore> = Arc::new(PrivilegeRepository::new(pool.clone()));
    let menu_store: Arc<dyn MenuTreeStore> = Arc::new(MenuTreeRepository::new(pool.clone()));

    // Authorization engine over the level deep read
    let authorizer = Arc::new(AuthorizationEngine::new(
        Arc::clone(&level_store),
        config.server.api_prefix.clone(),
    ));

    // Services
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_store),
        hasher,
        Arc::clone(&jwt_encoder),
    ));
    let level_service = Arc::new(LevelService::new(Arc::clone(&level_store)));
    let form_service = Arc::new(FormService::new(Arc::clone(&form_store)));
    let privilege_service = Arc::new(PrivilegeService::new(Arc::clone(&privilege_store)));
    let menu_service = Arc::new(MenuTreeService::new(Arc::clone(&menu_store)));

    // Notifiers: registered when configured, skipped otherwise
    let mut notifications = NotificationService::new();
    if let Some(url) = &config.notification.chat_webhook_url {
        notifications.register(
            "chat",
            Arc::new(WebhookNotifier::new(url.clone())) as Arc<dyn Notifier>,
        );
    }
    if let Some(url) = &config.notification.mail_relay_url {
        notifications.register(
            "mail",
            Arc::new(MailRelayNotifier::new(
                url.clone(),
                config.notification.mail_relay_token.clone(),
                config.notification.mail_from.clone(),
            )) as Arc<dyn Notifier>,
        );
    }
    let notifications = Arc::new(notifications);

    // Fire-and-forget startup notification
    {
        let notifications = Arc::clone(&notifications);
        tokio::spawn(async move {
            if let Err(e) = notifications
                .send(&["chat"], "The API has been started successfully!")
                .await
            {
                tracing::warn!("Failed to send startup notification: {e}");
            }
        });
    }

    let state = AppState {
        config: Arc::new(config.clone()),
        jwt_decoder,
        authorizer,
        login_throttle,
        user_service,
        level_service,
        form_service,
        privilege_service,
        menu_service,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("coreadmin server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("coreadmin server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
