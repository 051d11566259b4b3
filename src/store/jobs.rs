use anyhow::Result;
use rusqlite::params;

use super::Storage;
use super::types::{CronJobLogRecord, CronJobRecord, JobStatus};

impl Storage {
    pub async fn get_all_cron_jobs(&self) -> Result<Vec<CronJobRecord>> {
        let db = self.db.lock().await;
        let mut stmt = db.prepare(
            "SELECT id, name, url, description, schedule_text FROM cron_jobs ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(CronJobRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                url: row.get(2)?,
                description: row.get(3)?,
                schedule_text: row.get(4)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    pub async fn get_cron_job(&self, id: i64) -> Result<Option<CronJobRecord>> {
        let db = self.db.lock().await;
        let mut stmt = db.prepare(
            "SELECT id, name, url, description, schedule_text FROM cron_jobs WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], |row| {
            Ok(CronJobRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                url: row.get(2)?,
                description: row.get(3)?,
                schedule_text: row.get(4)?,
            })
        })?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Append one execution record. This is the only write path for
    /// `cron_job_logs`; rows are never updated or deleted here (they go away
    /// only via the FK cascade when a job row is deleted).
    pub async fn append_cron_job_log(
        &self,
        job_id: i64,
        status: JobStatus,
        response_text: &str,
        duration_ms: i64,
        trigger_type: &str,
    ) -> Result<()> {
        let db = self.db.lock().await;
        db.execute(
            "INSERT INTO cron_job_logs (job_id, status, response_text, duration_ms, trigger_type)
                VALUES (?1, ?2, ?3, ?4, ?5)",
            params![job_id, status.as_str(), response_text, duration_ms, trigger_type],
        )?;
        Ok(())
    }

    /// Recent log rows for one job, newest first.
    pub async fn get_cron_job_logs(
        &self,
        job_id: i64,
        limit: u32,
    ) -> Result<Vec<CronJobLogRecord>> {
        let db = self.db.lock().await;
        let mut stmt = db.prepare(
            "SELECT id, job_id, status, response_text, duration_ms, trigger_type, created_at
                FROM cron_job_logs WHERE job_id = ?1 ORDER BY id DESC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![job_id, limit], |row| {
            Ok(CronJobLogRecord {
                id: row.get(0)?,
                job_id: row.get(1)?,
                status: row.get(2)?,
                response_text: row.get(3)?,
                duration_ms: row.get(4)?,
                trigger_type: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}
