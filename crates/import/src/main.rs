use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use laberinto_import::config::ImportConfig;
use laberinto_import::driver;
use laberinto_import::error::ImportResult;
use laberinto_import::reader::ExportReader;
use laberinto_import::store::PgStore;
use laberinto_import::summary::RunSummary;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "laberinto_import=info,laberinto_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Import failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ImportResult<RunSummary> {
    // --- Configuration ---
    let config = ImportConfig::from_env()?;
    let reader = ExportReader::open(&config.export_dir)?;
    tracing::info!(export_dir = %config.export_dir.display(), "Loaded import configuration");

    // --- Database ---
    let pool = laberinto_db::create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!("Database connection pool created");

    laberinto_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    laberinto_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // --- Import ---
    let store = PgStore::new(pool.clone());
    let result = driver::run(&store, &reader).await;

    pool.close().await;
    result
}
