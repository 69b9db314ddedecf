//! Backoff controller: paces attempts and respects the wait's context.

use std::time::Duration;

use rand::Rng;
use tokio::time;

use crate::lifecycle::context::Context;

/// Delays to sleep before each retry. Ends when no more retries are allowed.
pub type Schedule = Box<dyn Iterator<Item = Duration> + Send>;

/// A pluggable strategy deciding attempt spacing and, optionally, attempt limits.
pub trait BackoffPolicy: Send + Sync {
    /// Fresh delay schedule for one wait.
    fn schedule(&self) -> Schedule;

    /// Start a controller bound to `ctx`.
    ///
    /// The returned controller owns everything it needs, so it can be moved
    /// into a task that outlives the borrow of the policy.
    fn start(&self, ctx: &Context) -> Backoff {
        Backoff::new(ctx.clone(), self.schedule())
    }
}

/// Answers "may I attempt again?" for one wait.
pub struct Backoff {
    ctx: Context,
    schedule: Schedule,
    attempts: u32,
}

impl Backoff {
    pub fn new(ctx: Context, schedule: Schedule) -> Self {
        Self {
            ctx,
            schedule,
            attempts: 0,
        }
    }

    /// Wait for the next scheduled slot.
    ///
    /// The first call returns immediately. Later calls sleep the next delay
    /// first. Returns `false` when the schedule is exhausted or the context
    /// stops, including mid-sleep.
    pub async fn proceed(&mut self) -> bool {
        if self.ctx.is_done() {
            return false;
        }

        if self.attempts > 0 {
            let Some(delay) = self.schedule.next() else {
                return false;
            };
            if delay.is_zero() {
                // Other tasks on the runtime must get a turn between attempts.
                tokio::task::yield_now().await;
            } else {
                tokio::select! {
                    _ = time::sleep(delay) => {}
                    _ = self.ctx.done() => return false,
                }
            }
            if self.ctx.is_done() {
                return false;
            }
        }

        self.attempts += 1;
        true
    }

    /// Attempts permitted so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Calculate exponential backoff delay with optional jitter.
///
/// `retry` is 1-based. The delay is `base * multiplier^(retry - 1)` capped at
/// `max`; jitter adds up to 10% of the capped delay.
pub fn calculate_backoff(
    retry: u32,
    base: Duration,
    multiplier: f64,
    max: Duration,
    jitter: bool,
) -> Duration {
    if retry == 0 {
        return Duration::ZERO;
    }

    let exponent = i32::try_from(retry - 1).unwrap_or(i32::MAX);
    let scaled = base.as_nanos() as f64 * multiplier.powi(exponent);
    let capped = if scaled.is_finite() && scaled < max.as_nanos() as f64 {
        Duration::from_nanos(scaled.round() as u64)
    } else {
        max
    };

    let jitter_range = capped.as_nanos() / 10;
    if !jitter || jitter_range == 0 {
        return capped;
    }
    let jitter_nanos = rand::thread_rng().gen_range(0..jitter_range);
    capped + Duration::from_nanos(u64::try_from(jitter_nanos).unwrap_or(u64::MAX))
}
