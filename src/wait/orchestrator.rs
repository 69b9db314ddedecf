//! The poll loop and the race against the caller's context.

use tokio::sync::oneshot;

use crate::lifecycle::context::{Context, ContextError};
use crate::report::SafeReporter;
use crate::resilience::backoff::Backoff;
use crate::wait::probe::{AttemptOutcome, Probe};
use crate::wait::request::{CancelMode, WaitRequest};

/// Block until `req.url` answers `200 OK` or `ctx` stops.
///
/// Probes run on a spawned task, paced by `req.backoff`. Returns `Ok(())` as
/// soon as one probe reports ready, or the context's cause as soon as it
/// fires. An attempt already in flight is not interrupted; with
/// [`CancelMode::Abandon`] it finishes in the background and the task then
/// stops at its next context check.
///
/// If the policy stops permitting attempts before either happens, the call
/// keeps waiting for the context.
pub async fn wait(ctx: &Context, req: WaitRequest<'_>) -> Result<(), ContextError> {
    let reporter = SafeReporter::new(req.reporter);
    let probe = Probe::new(req.client, req.url, reporter);
    let backoff = req.backoff.start(ctx);

    tracing::debug!(url = %probe.url(), "Waiting for target to become ready");

    let (ready_tx, ready_rx) = oneshot::channel();
    let task = tokio::spawn(poll_until_ready(ctx.clone(), backoff, probe, ready_tx));

    let outcome = tokio::select! {
        biased;

        ready = ready_rx => match ready {
            Ok(attempts) => {
                tracing::info!(attempts, "Target is ready");
                Ok(())
            }
            Err(_) => {
                tracing::warn!("Backoff policy stopped before the target became ready, waiting for cancellation");
                Err(ctx.stopped().await)
            }
        },
        cause = ctx.stopped() => Err(cause),
    };

    if let Err(cause) = &outcome {
        tracing::info!(cause = %cause, "Stopped waiting for target");
        if req.cancel_mode == CancelMode::Abort {
            task.abort();
        }
    }

    outcome
}

/// Background half: one probe per permitted attempt until ready.
///
/// `ready` is consumed by its single send, so success is signalled at most once.
async fn poll_until_ready(
    ctx: Context,
    mut backoff: Backoff,
    probe: Probe,
    ready: oneshot::Sender<u32>,
) {
    while backoff.proceed().await {
        if let Some(cause) = ctx.err() {
            tracing::debug!(cause = %cause, "Context stopped, ending poll loop");
            return;
        }

        match probe.attempt().await {
            AttemptOutcome::Ready => {
                let _ = ready.send(backoff.attempts());
                return;
            }
            AttemptOutcome::NotReady(_) | AttemptOutcome::TransportFailure => {
                tracing::trace!(attempt = backoff.attempts(), "Target not ready yet");
            }
        }
    }

    tracing::debug!(attempts = backoff.attempts(), "Poll loop finished without readiness");
}
