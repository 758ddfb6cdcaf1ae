//! Todo Cache - todo CRUD service with a read-through cache
//!
//! Wires the SQLite repository, the cache store and the caching service
//! together and serves them over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_cache::api::{create_router, AppState};
use todo_cache::cache::{CacheStore, MemoryCache};
use todo_cache::repository::{seed_todos, SqliteTodoRepository};
use todo_cache::service::{CacheTtls, TodoService};
use todo_cache::{spawn_cleanup_task, Config};

/// Main entry point for the todo service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the database, create the table and seed sample data
/// 4. Connect the cache store (Redis, or in-memory with a purge task)
/// 5. Build the caching service and the Axum router
/// 6. Serve until SIGINT/SIGTERM, then shut down gracefully
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting todo service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, database={}, item_ttl={}s, list_ttl={}s",
        config.server_port, config.database_url, config.item_ttl, config.list_ttl
    );

    let repository = SqliteTodoRepository::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    if config.seed_database {
        seed_todos(&repository)
            .await
            .context("failed to seed database")?;
    }

    let (cache, cleanup_handle) = build_cache(&config).await?;

    let service = TodoService::with_ttls(
        Arc::new(repository),
        cache,
        CacheTtls {
            item: config.item_ttl,
            list: config.list_ttl,
        },
    );
    let app = create_router(AppState::new(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Picks the cache store. The in-memory store comes with its purge task.
async fn build_cache(
    config: &Config,
) -> anyhow::Result<(Arc<dyn CacheStore>, Option<JoinHandle<()>>)> {
    if let Some(store) = connect_redis(config).await? {
        return Ok((store, None));
    }

    let cache = MemoryCache::new();
    let handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);
    info!("Using in-memory cache store");
    Ok((Arc::new(cache), Some(handle)))
}

#[cfg(feature = "redis")]
async fn connect_redis(config: &Config) -> anyhow::Result<Option<Arc<dyn CacheStore>>> {
    let Some(url) = &config.redis_url else {
        return Ok(None);
    };

    let store = todo_cache::cache::RedisCacheStore::connect(url)
        .await
        .with_context(|| format!("failed to connect to Redis at {url}"))?;
    info!(url = %url, "Using Redis cache store");
    Ok(Some(Arc::new(store)))
}

#[cfg(not(feature = "redis"))]
async fn connect_redis(config: &Config) -> anyhow::Result<Option<Arc<dyn CacheStore>>> {
    if config.redis_url.is_some() {
        warn!("REDIS_URL is set but the binary was built without the `redis` feature");
    }
    Ok(None)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
