//! Bounded graceful shutdown

use std::{future::IntoFuture, io, time::Duration};

use tokio::sync::oneshot;
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain {
    /// Every connection closed on its own
    Completed,
    /// The grace period ran out with connections still open
    TimedOut,
}

/// Run `server` until it stops, allowing at most `grace` once shutdown starts
///
/// `shutdown_started` fires when the server's graceful-shutdown signal has
/// resolved. Connections still open after `grace` are dropped.
///
/// # Errors
///
/// Returns the server's I/O error if it fails before or while draining.
pub async fn serve_with_grace<S>(
    server: S,
    shutdown_started: oneshot::Receiver<()>,
    grace: Duration,
) -> io::Result<Drain>
where
    S: IntoFuture<Output = io::Result<()>>,
{
    let server = server.into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map(|()| Drain::Completed),
        _ = shutdown_started => {},
    }

    info!("Waiting up to {:?} for connections to close...", grace);

    match tokio::time::timeout(grace, server).await {
        Ok(result) => result.map(|()| Drain::Completed),
        Err(_) => {
            warn!(grace_secs = grace.as_secs(), "Shutdown timed out, dropping open connections");
            Ok(Drain::TimedOut)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stuck_connections_are_abandoned_after_grace() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();

        let outcome = serve_with_grace(
            std::future::pending::<io::Result<()>>(),
            rx,
            Duration::from_millis(20),
        )
        .await
        .unwrap();

        assert_eq!(outcome, Drain::TimedOut);
    }

    #[tokio::test]
    async fn drained_server_completes_within_grace() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();

        let server = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok::<(), io::Error>(())
        };
        let outcome = serve_with_grace(server, rx, Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(outcome, Drain::Completed);
    }

    #[tokio::test]
    async fn grace_does_not_limit_normal_operation() {
        let (_tx, rx) = oneshot::channel::<()>();

        let server = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok::<(), io::Error>(())
        };
        let outcome = serve_with_grace(server, rx, Duration::from_millis(1))
            .await
            .unwrap();

        assert_eq!(outcome, Drain::Completed);
    }

    #[tokio::test]
    async fn server_errors_are_returned() {
        let (_tx, rx) = oneshot::channel::<()>();

        let server = async { Err::<(), _>(io::Error::other("listener closed")) };
        let result = serve_with_grace(server, rx, Duration::from_secs(1)).await;

        assert!(result.is_err());
    }
}
