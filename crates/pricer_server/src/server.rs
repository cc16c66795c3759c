//! Server startup and binding

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::{self, AppState};
use infra_store::KvStore;
use pricer_pricing::CachedPricer;

/// Server instance that can be started
pub struct Server {
    config: Arc<ServerConfig>,
    router: Router,
}

impl Server {
    /// Create a new server over the given store backend.
    ///
    /// The store handle is injected here, once, by the binary; handlers only
    /// ever see it through the pricer in [`AppState`].
    pub fn new(
        config: ServerConfig,
        store: Arc<dyn KvStore>,
        store_backend: &'static str,
    ) -> Self {
        let config = Arc::new(config);
        let pricer = Arc::new(CachedPricer::new(store).with_ttl(config.cache_ttl()));
        let state = AppState::new(config.clone(), pricer, store_backend);
        let router = routes::build_router(state);

        Self { config, router }
    }

    /// Get the socket address the server will bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.config.socket_addr().parse()
    }

    /// Run the server
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = self
            .socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let listener = TcpListener::bind(addr).await?;

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific listener
    ///
    /// Useful for tests binding to port 0 for a random available port.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_store::MemoryStore;

    fn test_server(config: ServerConfig) -> Server {
        Server::new(config, Arc::new(MemoryStore::new()), "memory")
    }

    #[test]
    fn test_server_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Default::default()
        };

        let server = test_server(config);
        assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_host_fails_to_parse() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };

        assert!(test_server(config).socket_addr().is_err());
    }
}
