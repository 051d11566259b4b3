mod handlers;
mod router;

pub use router::build_api_router;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::lifecycle::LifecycleComponent;
use crate::store::Storage;

/// HTTP interface for the commerce core: the scheduled-job trigger
/// endpoints plus the admin read surface over jobs and their logs.
pub struct ApiServer {
    storage: Arc<Storage>,
    config: Arc<Config>,
}

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Storage>,
    pub config: Arc<Config>,
}

impl ApiServer {
    pub fn new(storage: Arc<Storage>, config: Arc<Config>) -> Self {
        Self { storage, config }
    }
}

#[async_trait]
impl LifecycleComponent for ApiServer {
    async fn on_init(&mut self) -> Result<()> {
        info!("API Server Interface initializing...");
        Ok(())
    }

    async fn on_start(&mut self) -> Result<()> {
        let storage = self.storage.clone();
        let config = self.config.clone();

        tokio::spawn(async move {
            let addr = format!("{}:{}", config.api_host, config.api_port);
            let state = AppState { storage, config };
            let app = build_api_router(state);

            if let Ok(listener) = tokio::net::TcpListener::bind(&addr).await {
                info!("API Server running at http://{addr}");
                if let Err(e) = axum::serve(listener, app).await {
                    tracing::error!("API Server crashed: {}", e);
                }
            }
        });
        Ok(())
    }

    async fn on_shutdown(&mut self) -> Result<()> {
        info!("API Server Interface shutting down...");
        Ok(())
    }
}
