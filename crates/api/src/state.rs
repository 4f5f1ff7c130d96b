use std::sync::Arc;

use pvz_core::memory::MemoryStore;
use pvz_core::store::UserDirectory;
use pvz_core::workflow::WorkflowService;
use pvz_db::{DbPool, PgStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Reception workflow engine.
    pub workflow: WorkflowService,
    /// Account lookup for the authentication flow.
    pub users: Arc<dyn UserDirectory>,
    /// Database pool, absent when running on the in-memory store.
    pub pool: Option<DbPool>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by PostgreSQL.
    pub fn postgres(pool: DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        Self {
            workflow: WorkflowService::from_store(Arc::clone(&store)),
            users: store,
            pool: Some(pool),
            config: Arc::new(config),
        }
    }

    /// State backed by a fresh in-process store. Nothing survives a restart.
    pub fn in_memory(config: ServerConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            workflow: WorkflowService::from_store(Arc::clone(&store)),
            users: store,
            pool: None,
            config: Arc::new(config),
        }
    }
}
