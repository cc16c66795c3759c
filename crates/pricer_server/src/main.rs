//! Closedform Pricing Server
//!
//! REST API for forward and European option pricing with a Redis-backed
//! quote cache.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infra_store::{KvStore, MemoryStore, RedisStore};
use pricer_server::config::{build_config, CliArgs as ConfigCliArgs, ServerConfig};
use pricer_server::server::Server;

/// Closedform Pricing Server - REST API for closed-form pricing
#[derive(Parser, Debug)]
#[command(name = "pricer_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "PRICING_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PRICING_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PRICING_LOG_LEVEL")]
    log_level: Option<String>,

    /// Redis URL for the quote cache
    #[arg(long, env = "REDIS_URL")]
    redis_url: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            redis_url: args.redis_url,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to Redis, falling back to the in-process store when unreachable.
///
/// The cache is fail-open end to end: a pricing service that cannot reach
/// its cache still prices, it just recomputes more often.
async fn connect_store(config: &ServerConfig) -> (Arc<dyn KvStore>, &'static str) {
    match RedisStore::connect(&config.redis_url).await {
        Ok(store) => {
            tracing::info!(url = %config.redis_url, "quote cache connected");
            (Arc::new(store), "redis")
        }
        Err(error) => {
            tracing::warn!(
                url = %config.redis_url,
                %error,
                "redis unreachable, falling back to in-memory quote cache"
            );
            (Arc::new(MemoryStore::new()), "memory")
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Closedform Pricing Server v{}", pricer_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        cache_ttl_secs = %config.cache_ttl_secs,
        "Server configuration loaded"
    );

    let (store, store_backend) = connect_store(&config).await;

    let server = Server::new(config, store, store_backend);
    server.run().await?;

    Ok(())
}
