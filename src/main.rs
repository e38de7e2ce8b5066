use appserver::bootstrap;
use appserver::config::app::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::init_base().await;

    let config = AppConfig::from_env()?;

    // Issued before the bind but never awaited, the server starts
    // whether or not the database ever connects.
    let _db = bootstrap::database::connect(&config);

    bootstrap::init_server(&config).await
}
