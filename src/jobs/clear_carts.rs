use anyhow::Result;
use async_trait::async_trait;

use super::JobOperation;
use crate::store::Storage;

/// Reap persisted cart rows that have gone stale.
pub struct ClearExpiredCarts {
    pub ttl_minutes: i64,
}

#[async_trait]
impl JobOperation for ClearExpiredCarts {
    fn job_name(&self) -> &'static str {
        "clear-cart"
    }

    async fn execute(&self, storage: &Storage) -> Result<serde_json::Value> {
        let cleared = storage.clear_carts_older_than(self.ttl_minutes).await?;
        Ok(serde_json::json!({ "cleared": cleared }))
    }
}
