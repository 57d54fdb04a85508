use address_service::{ api, Config, Result };
use migration::{ Migrator, MigratorTrait };
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "address_service=debug,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| address_service::AppError::Config(e.to_string()))?;

    // Initialize database connection
    let db = sea_orm::Database
        ::connect(&config.database_url).await
        .map_err(address_service::AppError::Database)?;

    tracing::info!("Database connected successfully");

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("Migrations completed successfully");
    }

    let app = api::router(api::AppState::from_connection(db));

    // Start server
    let addr = config.bind_address();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener
        ::bind(&addr).await
        .map_err(|e| address_service::AppError::Internal(e.to_string()))?;

    axum::serve(listener, app).await.map_err(|e| address_service::AppError::Internal(e.to_string()))?;

    Ok(())
}
