use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devshelf_api::config::Config;
use devshelf_api::middleware::AdminIdentity;
use devshelf_api::repositories::{self, ResourceRepository, MIGRATOR};
use devshelf_api::routes::GRAPHQL_PATH;
use devshelf_api::{build_cors_layer, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devshelf_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!(
        environment = %config.environment(),
        "Starting Devshelf API server on port {}",
        config.port
    );

    tracing::info!("Connecting to database...");
    let pool = repositories::connect(config.database()).await?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Migrations completed successfully");

    let store = ResourceRepository::new(pool.clone()).into_shared();

    let admin = AdminIdentity::new(config.admin_email.clone());
    if admin.is_configured() {
        tracing::info!("Admin identity configured, mutations enabled for the admin header");
    }

    let app = build_router(store, admin, build_cors_layer(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL Playground available at http://{}:{}{}",
        addr.ip(),
        addr.port(),
        GRAPHQL_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
