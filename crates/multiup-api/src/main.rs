use multiup_api::{setup, telemetry};
use multiup_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init_tracing();

    let config = Config::from_env()?;
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    setup::server::start_server(&config, router).await?;

    Ok(())
}
