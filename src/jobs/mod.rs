//! Scheduled job execution.
//!
//! Every invocation follows the same protocol: resolve the trigger type,
//! mark the start, run exactly one domain operation (no retry, no timeout),
//! then append one log row recording the terminal state and the elapsed
//! time. Nothing serializes concurrent invocations of the same job; two
//! overlapping triggers each append their own log row.

mod clear_carts;
mod order_status;
mod place_orders;
pub mod schedule;

pub use clear_carts::ClearExpiredCarts;
pub use order_status::AdvanceOrderStatuses;
pub use place_orders::PlaceSeededOrders;

use anyhow::Result;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{error, info};

use crate::store::Storage;
use crate::store::types::JobStatus;

/// Trigger type recorded when the caller did not supply one.
pub const TRIGGER_AUTO: &str = "auto";

/// Fallback log text for errors that stringify to nothing.
const UNKNOWN_ERROR: &str = "Unknown error";

/// One scheduled domain operation. Implementations run to completion or
/// fault; the runner adds no timeout around them.
#[async_trait]
pub trait JobOperation: Send + Sync {
    fn job_name(&self) -> &'static str;

    async fn execute(&self, storage: &Storage) -> Result<serde_json::Value>;
}

/// Terminal state of one logged run, as seen by the HTTP handler.
#[derive(Debug)]
pub struct JobRun {
    pub status: JobStatus,
    pub response: serde_json::Value,
    pub duration_ms: i64,
}

/// Run one operation and append its log row.
///
/// Both domain outcomes come back as `Ok(JobRun)` with the row already
/// written. `Err` here means the log write itself failed; that error is not
/// wrapped in a further fallback and the caller surfaces it as a plain
/// internal error, separate from the domain failure payload.
pub async fn run_logged_job(
    storage: &Storage,
    job_id: i64,
    operation: &dyn JobOperation,
    trigger_type: &str,
) -> Result<JobRun> {
    let start = Instant::now();

    match operation.execute(storage).await {
        Ok(result) => {
            let duration_ms = start.elapsed().as_millis() as i64;
            storage
                .append_cron_job_log(
                    job_id,
                    JobStatus::Success,
                    &result.to_string(),
                    duration_ms,
                    trigger_type,
                )
                .await?;
            info!(
                "cron job '{}' succeeded in {}ms (trigger: {})",
                operation.job_name(),
                duration_ms,
                trigger_type
            );
            Ok(JobRun {
                status: JobStatus::Success,
                response: result,
                duration_ms,
            })
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as i64;
            let mut message = e.to_string();
            if message.is_empty() {
                message = UNKNOWN_ERROR.to_string();
            }
            storage
                .append_cron_job_log(
                    job_id,
                    JobStatus::Error,
                    &message,
                    duration_ms,
                    trigger_type,
                )
                .await?;
            error!(
                "cron job '{}' failed after {}ms: {}",
                operation.job_name(),
                duration_ms,
                message
            );
            Ok(JobRun {
                status: JobStatus::Error,
                response: serde_json::Value::Null,
                duration_ms,
            })
        }
    }
}
