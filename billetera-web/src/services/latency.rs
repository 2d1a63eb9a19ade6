//! Simulated network latency.
//!
//! The prototype has no network; the two async flows (unlock, swap) await
//! this fixed delay instead. Keeping the timer here, outside the view
//! model, is what lets the state transitions stay synchronous under test.

use gloo_timers::future::TimeoutFuture;

pub async fn simulate(ms: u32) {
    TimeoutFuture::new(ms).await;
}
