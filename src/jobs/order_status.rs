use anyhow::Result;
use async_trait::async_trait;

use super::JobOperation;
use crate::store::Storage;

/// Advance every open order one step along placed -> shipped -> delivered.
pub struct AdvanceOrderStatuses;

#[async_trait]
impl JobOperation for AdvanceOrderStatuses {
    fn job_name(&self) -> &'static str {
        "update-order-status"
    }

    async fn execute(&self, storage: &Storage) -> Result<serde_json::Value> {
        let updated = storage.advance_order_statuses().await?;
        Ok(serde_json::json!({ "updated": updated }))
    }
}
