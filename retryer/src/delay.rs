//! Delay between retry attempts

use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// Suspend the current task for the given wait
pub async fn delay(wait: Duration) {
    debug!("Delaying next attempt for {:?}", wait);
    sleep(wait).await;
}
