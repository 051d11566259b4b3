use anyhow::Result;
use async_trait::async_trait;

use super::JobOperation;
use crate::store::Storage;

/// Seed a batch of demo orders in status `placed`.
pub struct PlaceSeededOrders {
    pub count: u32,
}

#[async_trait]
impl JobOperation for PlaceSeededOrders {
    fn job_name(&self) -> &'static str {
        "place-orders"
    }

    async fn execute(&self, storage: &Storage) -> Result<serde_json::Value> {
        let placed = storage.seed_demo_orders(self.count).await?;
        Ok(serde_json::json!({ "placed": placed }))
    }
}
