use anyhow::Result;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::error;

use super::{
    AdvanceOrderStatuses, ClearExpiredCarts, JobOperation, PlaceSeededOrders, TRIGGER_AUTO,
    run_logged_job,
};
use crate::config::Config;
use crate::store::{CLEAR_CART_JOB_ID, Storage, UPDATE_ORDER_STATUS_JOB_ID};

/// Register the three scheduled jobs on the runtime scheduler. Each fires
/// the same logged protocol the HTTP endpoints use, with trigger type
/// `auto`. place-orders stays unlogged on this path too, matching its
/// endpoint.
pub async fn register_scheduled_jobs(
    scheduler: &JobScheduler,
    storage: Arc<Storage>,
    config: Arc<Config>,
) -> Result<()> {
    let clear_storage = storage.clone();
    let ttl_minutes = config.cart_ttl_minutes;
    let clear_job = Job::new_async(config.schedules.clear_cart.as_str(), move |_uuid, mut _l| {
        let storage = clear_storage.clone();
        Box::pin(async move {
            let op = ClearExpiredCarts { ttl_minutes };
            if let Err(e) = run_logged_job(&storage, CLEAR_CART_JOB_ID, &op, TRIGGER_AUTO).await {
                error!("clear-cart: failed to persist job log: {e:#}");
            }
        })
    })?;
    scheduler.add(clear_job).await?;

    let orders_storage = storage.clone();
    let seed_count = config.seed_order_count;
    let orders_job = Job::new_async(
        config.schedules.place_orders.as_str(),
        move |_uuid, mut _l| {
            let storage = orders_storage.clone();
            Box::pin(async move {
                let op = PlaceSeededOrders { count: seed_count };
                match op.execute(&storage).await {
                    Ok(result) => tracing::info!("place-orders: {result}"),
                    Err(e) => error!("place-orders failed: {e:#}"),
                }
            })
        },
    )?;
    scheduler.add(orders_job).await?;

    let status_storage = storage.clone();
    let status_job = Job::new_async(
        config.schedules.update_order_status.as_str(),
        move |_uuid, mut _l| {
            let storage = status_storage.clone();
            Box::pin(async move {
                if let Err(e) = run_logged_job(
                    &storage,
                    UPDATE_ORDER_STATUS_JOB_ID,
                    &AdvanceOrderStatuses,
                    TRIGGER_AUTO,
                )
                .await
                {
                    error!("update-order-status: failed to persist job log: {e:#}");
                }
            })
        },
    )?;
    scheduler.add(status_job).await?;

    Ok(())
}
