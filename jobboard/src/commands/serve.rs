use jobboard_config::Config;
use jobboard_di::Provide;
use jobboard_persistence_contracts::Database;
use tracing::info;

use crate::{
    database,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let applied = database.run_migrations(None).await?;
    for name in &applied {
        info!("Applied {name}");
    }
    if applied.is_empty() {
        info!("No migrations pending");
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, database);
    let server: RestServer = provider.provide();
    server.serve().await
}
