use std::{sync::Arc, time::Duration};

use advisor::{Advisor, OpenAiClient};
use migration::{Migrator, MigratorTrait};
use server::ServerState;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "taxledger={level},server={level},engine={level},advisor={level}",
            level = settings.app.level
        ))
        .init();

    let db = parse_database(&settings.server.database_url).await?;
    let engine = engine::Engine::builder().database(db).build().await?;
    let advisor = build_advisor(&settings.advice)?;

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::run_with_listener(ServerState::new(engine, advisor), listener).await?;

    Ok(())
}

async fn parse_database(
    url: &str,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    tracing::info!("database ready");
    Ok(database)
}

fn build_advisor(config: &settings::Advice) -> Result<Advisor, reqwest::Error> {
    let Some(api_key) = config.api_key.as_deref().filter(|key| !key.is_empty()) else {
        tracing::warn!("no advice API key configured, advice requests will fail");
        return Ok(Advisor::unconfigured());
    };

    let mut client = reqwest::Client::builder();
    if let Some(secs) = config.timeout_secs {
        client = client.timeout(Duration::from_secs(secs));
    }
    let client = OpenAiClient::new(client.build()?, &config.base_url, api_key, &config.model);
    tracing::info!("advice enabled with model {}", client.model());

    Ok(Advisor::new(Arc::new(client)).max_prompt_entries(config.max_prompt_entries))
}
