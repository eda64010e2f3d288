pub mod config;
pub mod rest;
pub mod storage;
pub mod tasks;

use std::sync::Arc;

use config::ServerConfig;
use storage::Storage;
use tasks::TaskService;

/// Shared application state passed to every request handler.
///
/// Constructed once in `run_server` and handed to the router as axum state —
/// there is no other global mutable state in the process.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub storage: Arc<Storage>,
    pub tasks: Arc<TaskService>,
    pub started_at: std::time::Instant,
}
