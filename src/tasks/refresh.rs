//! Display refresh background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::{state::AppState, utils::format_duration};

/// Background task that polls the timer every `tick` and publishes the
/// formatted clock text whenever it changes. Never mutates the timer.
pub async fn refresh_task(state: Arc<AppState>, tick: Duration) {
    info!("Starting display refresh task ({}ms tick)", tick.as_millis());

    let mut interval = interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        match state.elapsed() {
            Ok(elapsed) => {
                let text = format_duration(elapsed);
                if state.publish(text) {
                    debug!("Refresh published new clock text");
                }
            }
            Err(e) => {
                error!("Failed to read timer: {}", e);
            }
        }
    }
}
