//! Account service entry point.

use std::sync::Arc;

use account_app::api::routes::create_router;
use account_app::infrastructure::{
    AppConfig, AppDependencies, InMemoryStore, LogFormat, PostgresStore, RepositoryError,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Configuration comes first so the log format can be chosen.
    let config_result = AppConfig::from_env();
    let log_format = config_result
        .as_ref()
        .map_or(LogFormat::Pretty, |config| config.log_format);
    init_tracing(log_format);

    tracing::info!("Starting account service...");

    let config = match config_result {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: host={}, port={}",
                config.app_host,
                config.app_port
            );
            config
        }
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let bind_address = config.bind_address();
    let dependencies = match build_dependencies(config).await {
        Ok(dependencies) => dependencies,
        Err(e) => {
            tracing::error!("Failed to initialize storage: {e}");
            std::process::exit(1);
        }
    };

    let app = create_router(dependencies).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_address)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Account service started on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Account service stopped");
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,account_app=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn build_dependencies(
    config: AppConfig,
) -> Result<AppDependencies, RepositoryError> {
    let Some(database) = config.database.clone() else {
        tracing::info!("DATABASE_URL not set, using seeded in-memory store");
        let store = Arc::new(InMemoryStore::seeded()?);
        return Ok(AppDependencies::in_memory(config, store));
    };

    let store = PostgresStore::connect(&database).await?;
    if database.run_migrations {
        store.run_migrations().await?;
        tracing::info!("Database migrations applied");
    }
    tracing::info!(
        max_connections = database.max_connections,
        "Connected to PostgreSQL"
    );
    Ok(AppDependencies::postgres(config, store))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
