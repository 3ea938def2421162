use healthinsight::api::{start_api_server, ApiContext};
use healthinsight::config::{self, AppConfig};

#[tokio::main]
async fn main() {
    healthinsight::init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env();
    if !config.model_enabled() {
        tracing::warn!(
            "{} not set: /analyze is disabled, /predict serves keyword estimates only",
            config::ENV_API_KEY
        );
    }

    let bind_addr = config.bind_addr;
    let server = match start_api_server(ApiContext::new(config), bind_addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.session.server_addr, "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {e}");
    }

    server.stop().await;
}
