//! OS signal handling.
//!
//! # Responsibilities
//! - Listen for SIGINT (and SIGTERM on unix)
//! - Translate the first signal into a context cancellation
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The listener exits on its own once the context is done

use tokio::task::JoinHandle;

use crate::lifecycle::context::Context;

/// Cancel `ctx` when the process is interrupted.
pub fn cancel_on_signal(ctx: &Context) -> JoinHandle<()> {
    let ctx = ctx.clone();
    tokio::spawn(async move {
        tokio::select! {
            signal = interrupted() => {
                tracing::info!(signal, "Received signal, cancelling wait");
                ctx.cancel();
            }
            _ = ctx.done() => {}
        }
    })
}

#[cfg(unix)]
async fn interrupted() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install SIGTERM handler");
            return ctrl_c().await;
        }
    };

    tokio::select! {
        name = ctrl_c() => name,
        _ = terminate.recv() => "SIGTERM",
    }
}

#[cfg(not(unix))]
async fn interrupted() -> &'static str {
    ctrl_c().await
}

async fn ctrl_c() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    "SIGINT"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_listener_exits_with_context() {
        let ctx = Context::with_timeout(Duration::from_millis(10));
        let listener = cancel_on_signal(&ctx);

        tokio::time::timeout(Duration::from_secs(1), listener)
            .await
            .expect("listener should stop with the context")
            .unwrap();
        assert!(ctx.is_done());
    }
}
