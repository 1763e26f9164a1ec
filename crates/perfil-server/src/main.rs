use perfil_server::config::ServerConfig;
use perfil_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(&config);
    if !state.relay.is_enabled() {
        tracing::warn!("PERFIL_RELAY_URL not set, results will not be relayed");
    }

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(addr = %bind_addr, "listening");
    axum::serve(listener, perfil_server::app(state)).await?;

    Ok(())
}
