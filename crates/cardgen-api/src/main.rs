use cardgen_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize the application (telemetry, services, routes)
    let (state, router) = cardgen_api::setup::initialize_app(config.clone())?;

    // Start the server
    cardgen_api::setup::server::start_server(&config, router).await?;

    // Stop the preview sweeper after the listener has drained
    state.sweeper.shutdown().await;

    Ok(())
}
