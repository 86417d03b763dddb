use std::sync::Arc;
use std::time::Duration;

use lru_time_cache::LruCache;
use tokio::sync::Mutex;

use homedash_docker::DockerApi;

use crate::config::ServerConfig;
use crate::handlers::system::SystemStats;

/// How long a computed system-stats snapshot stays fresh.
const STATS_CACHE_TTL: Duration = Duration::from_secs(5);

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: homedash_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Docker Engine API client.
    pub docker: Arc<DockerApi>,
    /// Short-TTL read cache for the system-stats endpoint.
    pub stats_cache: Arc<Mutex<LruCache<&'static str, SystemStats>>>,
}

impl AppState {
    /// Assemble the state from a connected pool and loaded configuration.
    pub fn new(pool: homedash_db::DbPool, config: ServerConfig) -> Self {
        let docker = Arc::new(DockerApi::new(config.docker_host.clone()));
        Self {
            pool,
            config: Arc::new(config),
            docker,
            stats_cache: Arc::new(Mutex::new(LruCache::with_expiry_duration(STATS_CACHE_TTL))),
        }
    }
}
