//! Wall-clock driver for `Countdown`.
//!
//! The countdown value itself lives in `quiz_core`; this module only decides
//! when `tick` is called. Cancelling the future (dropping it, or aborting the
//! task that polls it) stops the ticks.

use std::time::Duration;

use quiz_core::TickOutcome;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Calls `step` once per `period`, starting one period from now, until it
/// reports something other than `Running`. Returns that final outcome.
pub async fn drive_ticks<F>(period: Duration, mut step: F) -> TickOutcome
where
    F: FnMut() -> TickOutcome,
{
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let outcome = step();
        if !matches!(outcome, TickOutcome::Running { .. }) {
            return outcome;
        }
    }
}
