use perfil_relay::client::Relay;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            relay: Relay::new(&config.relay),
        }
    }
}
