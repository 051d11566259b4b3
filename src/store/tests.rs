use super::types::JobStatus;
use super::{CLEAR_CART_JOB_ID, PLACE_ORDERS_JOB_ID, Storage, UPDATE_ORDER_STATUS_JOB_ID};

async fn scratch_storage() -> (tempfile::TempDir, Storage) {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(dir.path()).await.expect("storage");
    (dir, storage)
}

#[tokio::test]
async fn seeds_the_three_reference_jobs() {
    let (_dir, storage) = scratch_storage().await;
    let jobs = storage.get_all_cron_jobs().await.expect("jobs");
    let names: Vec<&str> = jobs.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, ["clear-cart", "place-orders", "update-order-status"]);
    assert_eq!(jobs[0].id, CLEAR_CART_JOB_ID);
    assert_eq!(jobs[1].id, PLACE_ORDERS_JOB_ID);
    assert_eq!(jobs[2].id, UPDATE_ORDER_STATUS_JOB_ID);
}

#[tokio::test]
async fn reopening_the_database_does_not_duplicate_seeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let _first = Storage::new(dir.path()).await.expect("storage");
    }
    let second = Storage::new(dir.path()).await.expect("storage");
    let jobs = second.get_all_cron_jobs().await.expect("jobs");
    assert_eq!(jobs.len(), 3);
}

#[tokio::test]
async fn log_rows_append_newest_first() {
    let (_dir, storage) = scratch_storage().await;
    storage
        .append_cron_job_log(CLEAR_CART_JOB_ID, JobStatus::Success, "{\"cleared\":0}", 12, "auto")
        .await
        .expect("append");
    storage
        .append_cron_job_log(CLEAR_CART_JOB_ID, JobStatus::Error, "db down", 3, "manual")
        .await
        .expect("append");

    let logs = storage
        .get_cron_job_logs(CLEAR_CART_JOB_ID, 10)
        .await
        .expect("logs");
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].status, "error");
    assert_eq!(logs[0].response_text.as_deref(), Some("db down"));
    assert_eq!(logs[0].trigger_type.as_deref(), Some("manual"));
    assert_eq!(logs[1].status, "success");
    assert_eq!(logs[1].duration_ms, Some(12));
    assert!(!logs[0].created_at.is_empty());
}

#[tokio::test]
async fn logs_are_scoped_to_their_job() {
    let (_dir, storage) = scratch_storage().await;
    storage
        .append_cron_job_log(CLEAR_CART_JOB_ID, JobStatus::Success, "a", 1, "auto")
        .await
        .expect("append");
    storage
        .append_cron_job_log(UPDATE_ORDER_STATUS_JOB_ID, JobStatus::Success, "b", 1, "auto")
        .await
        .expect("append");

    let logs = storage
        .get_cron_job_logs(UPDATE_ORDER_STATUS_JOB_ID, 10)
        .await
        .expect("logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].response_text.as_deref(), Some("b"));
}

#[tokio::test]
async fn deleting_a_job_cascades_to_its_logs() {
    let (_dir, storage) = scratch_storage().await;
    storage
        .append_cron_job_log(CLEAR_CART_JOB_ID, JobStatus::Success, "a", 1, "auto")
        .await
        .expect("append");

    {
        let db = storage.get_db();
        let db = db.lock().await;
        db.execute("DELETE FROM cron_jobs WHERE id = ?1", [CLEAR_CART_JOB_ID])
            .expect("delete job");
    }

    let logs = storage
        .get_cron_job_logs(CLEAR_CART_JOB_ID, 10)
        .await
        .expect("logs");
    assert!(logs.is_empty());
}

#[tokio::test]
async fn clear_carts_only_reaps_stale_rows() {
    let (_dir, storage) = scratch_storage().await;
    storage.add_cart_row("sess-a", 1, 2).await.expect("insert");
    storage.add_cart_row("sess-b", 2, 1).await.expect("insert");

    // Backdate one row past the TTL.
    {
        let db = storage.get_db();
        let db = db.lock().await;
        db.execute(
            "UPDATE carts SET updated_at = datetime('now', '-2 hours') WHERE session_id = 'sess-a'",
            [],
        )
        .expect("backdate");
    }

    let cleared = storage.clear_carts_older_than(60).await.expect("clear");
    assert_eq!(cleared, 1);
    assert_eq!(storage.count_cart_rows().await.expect("count"), 1);

    // Nothing left past the TTL; a second run is a no-op.
    let cleared = storage.clear_carts_older_than(60).await.expect("clear");
    assert_eq!(cleared, 0);
}

#[tokio::test]
async fn order_statuses_advance_one_step_and_stop_at_delivered() {
    let (_dir, storage) = scratch_storage().await;
    storage.seed_demo_orders(3).await.expect("seed");
    assert_eq!(storage.count_orders_by_status("placed").await.expect("count"), 3);

    let touched = storage.advance_order_statuses().await.expect("advance");
    assert_eq!(touched, 3);
    assert_eq!(storage.count_orders_by_status("shipped").await.expect("count"), 3);

    let touched = storage.advance_order_statuses().await.expect("advance");
    assert_eq!(touched, 3);
    assert_eq!(storage.count_orders_by_status("delivered").await.expect("count"), 3);

    let touched = storage.advance_order_statuses().await.expect("advance");
    assert_eq!(touched, 0);
}
