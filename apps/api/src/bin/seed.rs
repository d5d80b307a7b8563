//! One-shot loader that replaces all resources with the sample set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devshelf_api::repositories::{self, ResourceRepository, MIGRATOR};
use devshelf_api::seed;
use devshelf_shared_config::CommonConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devshelf_api=info,devshelf_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = CommonConfig::from_env()?;

    tracing::info!("Seeding database...");
    let pool = repositories::connect(&config.database).await?;
    MIGRATOR.run(&pool).await?;

    let result = seed::seed(&ResourceRepository::new(pool.clone())).await;
    pool.close().await;

    match result {
        Ok(count) => {
            tracing::info!(count, "Database seeded successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Error seeding database");
            Err(e.into())
        }
    }
}
