use anyhow::Result;
use rusqlite::params;

use super::Storage;
use super::types::OrderRecord;

impl Storage {
    /// Persist one cart row for a session. The scheduled clear job reaps
    /// these once they go stale.
    pub async fn add_cart_row(&self, session_id: &str, pv_id: i64, quantity: u32) -> Result<()> {
        let db = self.db.lock().await;
        db.execute(
            "INSERT INTO carts (session_id, pv_id, quantity) VALUES (?1, ?2, ?3)",
            params![session_id, pv_id, quantity],
        )?;
        Ok(())
    }

    /// Delete cart rows whose last touch is older than `ttl_minutes`.
    /// Returns the number of rows removed.
    pub async fn clear_carts_older_than(&self, ttl_minutes: i64) -> Result<usize> {
        let modifier = format!("-{ttl_minutes} minutes");
        let db = self.db.lock().await;
        let cleared = db.execute(
            "DELETE FROM carts WHERE updated_at < datetime('now', ?1)",
            params![modifier],
        )?;
        Ok(cleared)
    }

    pub async fn count_cart_rows(&self) -> Result<i64> {
        let db = self.db.lock().await;
        let count = db.query_row("SELECT COUNT(*) FROM carts", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Insert `count` demo orders in status `placed`.
    pub async fn seed_demo_orders(&self, count: u32) -> Result<usize> {
        let db = self.db.lock().await;
        for n in 0..count {
            let id = uuid::Uuid::new_v4().to_string();
            let total = 499.0 + f64::from(n) * 50.0;
            db.execute(
                "INSERT INTO orders (id, status, total) VALUES (?1, 'placed', ?2)",
                params![id, total],
            )?;
        }
        Ok(count as usize)
    }

    /// Advance every order one step along placed -> shipped -> delivered.
    /// Shipped orders are promoted before placed ones so a single pass never
    /// moves an order two steps. Returns the number of rows touched.
    pub async fn advance_order_statuses(&self) -> Result<usize> {
        let db = self.db.lock().await;
        let delivered = db.execute(
            "UPDATE orders SET status = 'delivered', updated_at = CURRENT_TIMESTAMP
                WHERE status = 'shipped'",
            [],
        )?;
        let shipped = db.execute(
            "UPDATE orders SET status = 'shipped', updated_at = CURRENT_TIMESTAMP
                WHERE status = 'placed'",
            [],
        )?;
        Ok(delivered + shipped)
    }

    pub async fn count_orders_by_status(&self, status: &str) -> Result<i64> {
        let db = self.db.lock().await;
        let count = db.query_row(
            "SELECT COUNT(*) FROM orders WHERE status = ?1",
            params![status],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub async fn get_all_orders(&self) -> Result<Vec<OrderRecord>> {
        let db = self.db.lock().await;
        let mut stmt = db.prepare(
            "SELECT id, status, total, created_at, updated_at FROM orders ORDER BY created_at",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(OrderRecord {
                id: row.get(0)?,
                status: row.get(1)?,
                total: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}
