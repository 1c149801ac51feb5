use admin::{handler::AppRouter, state::AppState};
use anyhow::{Context, Result};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger},
};
use tracing::{error, info, warn};

const SERVICE_NAME: &str = "admin-service";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = match config.otel_endpoint.as_deref() {
        Some(endpoint) => Some(
            Telemetry::init(SERVICE_NAME, endpoint).context("Failed to initialize telemetry")?,
        ),
        None => None,
    };

    init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        SERVICE_NAME,
        config.dev_mode,
        config.enable_file_log,
    );

    if telemetry.is_none() {
        warn!("⚠️ OTEL_ENDPOINT not set, traces and OTLP logs are disabled");
    }

    info!("🚀 Starting Admin Service initialization...");

    let db_pool =
        ConnectionManager::new_pool(&config.database_url, config.db_min_conn, config.db_max_conn)
            .await
            .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        info!("✅ Database migrations applied");
    }

    let state = AppState::new(db_pool);

    info!("✅ Application setup completed successfully.");

    let result = AppRouter::serve(config.port, state).await;

    if let Some(telemetry) = telemetry
        && let Err(e) = telemetry.shutdown().await
    {
        error!("Failed to shutdown telemetry: {e}");
    }

    info!("✅ Admin Service shutdown complete.");

    result
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
