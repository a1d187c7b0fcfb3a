//! Boost CRM API server.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use boost_crm::adapters::{
    api_router, ApiServices, JsonFileSettingsStore, PostgresCounterpartRepository,
    PostgresCustomerReader, PostgresCustomerRepository, PostgresMeetingRepository,
    PostgresNextActionRepository, SlackWebhookConfig, SlackWebhookNotifier,
};
use boost_crm::config::{AppConfig, ServerConfig, SlackConfig};
use boost_crm::domain::settings::{CrmSettings, SlackWebhookUrl};
use boost_crm::ports::SettingsStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let pool = config.database.connect().await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Migrations applied");
    }

    let settings_store = Arc::new(JsonFileSettingsStore::new(&config.slack.settings_path));
    let settings = initial_settings(settings_store.as_ref(), &config.slack).await?;
    info!(slack_configured = settings.is_slack_configured(), "Settings loaded");

    let notifier = SlackWebhookNotifier::new(SlackWebhookConfig {
        timeout: config.slack.timeout(),
    })?;

    let services = ApiServices {
        reader: Arc::new(PostgresCustomerReader::new(pool.clone())),
        customers: Arc::new(PostgresCustomerRepository::new(pool.clone())),
        meetings: Arc::new(PostgresMeetingRepository::new(pool.clone())),
        counterparts: Arc::new(PostgresCounterpartRepository::new(pool.clone())),
        next_actions: Arc::new(PostgresNextActionRepository::new(pool)),
        notifier: Arc::new(notifier),
        settings_store,
        settings: Arc::new(RwLock::new(settings)),
    };

    let app = api_router(services)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Boost CRM listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(fmt::layer().json().with_ansi(false)).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Settings from the file; the configured webhook fills in when none was saved.
async fn initial_settings(
    store: &dyn SettingsStore,
    slack: &SlackConfig,
) -> Result<CrmSettings, BoxError> {
    let mut settings = store.load().await?;
    if settings.slack_webhook_url.is_none() {
        if let Some(url) = &slack.webhook_url {
            settings.slack_webhook_url = SlackWebhookUrl::parse(url.expose_secret())?;
        }
    }
    Ok(settings)
}

fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, BoxError> {
    let origins = server.allowed_origins()?;
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        warn!("No CORS origins configured, allowing any origin");
        return Ok(layer.allow_origin(Any));
    }
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
