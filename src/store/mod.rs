mod commerce;
mod jobs;
pub mod types;

use anyhow::Result;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

/// SQLite-backed persistence for the commerce core: seeded cron job
/// reference rows, their append-only execution logs, and the cart/order
/// tables the scheduled operations act on.
pub struct Storage {
    db: Arc<Mutex<Connection>>,
    data_dir: PathBuf,
}

/// Seeded job ids; stable because handlers and the scheduler key log rows
/// against them.
pub const CLEAR_CART_JOB_ID: i64 = 1;
pub const PLACE_ORDERS_JOB_ID: i64 = 2;
pub const UPDATE_ORDER_STATUS_JOB_ID: i64 = 3;

impl Storage {
    pub async fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).await?;
        }

        let db_path = data_dir.join("pottikadai.db");
        let db = Connection::open(&db_path)?;

        // Needed for the job -> log cascade.
        db.execute_batch("PRAGMA foreign_keys = ON;")?;

        db.execute(
            "CREATE TABLE IF NOT EXISTS cron_jobs (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL,
                description TEXT,
                schedule_text TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        db.execute(
            "CREATE TABLE IF NOT EXISTS cron_job_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                job_id INTEGER NOT NULL REFERENCES cron_jobs(id) ON DELETE CASCADE,
                status TEXT NOT NULL,
                response_text TEXT,
                duration_ms INTEGER,
                trigger_type TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        db.execute(
            "CREATE INDEX IF NOT EXISTS idx_cron_job_logs_job_id_id
                ON cron_job_logs(job_id, id)",
            [],
        )?;

        db.execute(
            "CREATE TABLE IF NOT EXISTS carts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id TEXT NOT NULL,
                pv_id INTEGER NOT NULL,
                quantity INTEGER NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        db.execute(
            "CREATE TABLE IF NOT EXISTS orders (
                id TEXT PRIMARY KEY,
                status TEXT NOT NULL,
                total REAL NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        let storage = Self {
            db: Arc::new(Mutex::new(db)),
            data_dir,
        };
        storage.seed_cron_jobs().await?;
        Ok(storage)
    }

    pub fn get_db(&self) -> Arc<Mutex<Connection>> {
        self.db.clone()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Insert the three reference job rows if they are missing. Safe to run
    /// on every boot; existing rows are left untouched.
    async fn seed_cron_jobs(&self) -> Result<()> {
        let db = self.db.lock().await;
        let seeds: [(i64, &str, &str, &str, &str); 3] = [
            (
                CLEAR_CART_JOB_ID,
                "clear-cart",
                "/api/jobs/clear-cart",
                "Remove persisted cart rows older than the cart TTL",
                "Daily at midnight",
            ),
            (
                PLACE_ORDERS_JOB_ID,
                "place-orders",
                "/api/jobs/place-orders",
                "Seed a batch of demo orders",
                "Every 6 hours",
            ),
            (
                UPDATE_ORDER_STATUS_JOB_ID,
                "update-order-status",
                "/api/jobs/update-order-status",
                "Advance placed/shipped orders one step",
                "Hourly at :30",
            ),
        ];
        for (id, name, url, description, schedule_text) in seeds {
            db.execute(
                "INSERT OR IGNORE INTO cron_jobs (id, name, url, description, schedule_text)
                    VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, name, url, description, schedule_text],
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
